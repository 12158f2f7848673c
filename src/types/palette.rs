//! Brand palette.
//!
//! Named colours shared by every generated image.

use super::Colour;

/// Page background (#0A0A0F).
pub const DARK_BG: Colour = Colour::rgb(10, 10, 15);

/// Primary accent (#F97316).
pub const ORANGE: Colour = Colour::rgb(249, 115, 22);

/// Secondary accent and glow colour (#EA580C).
pub const DEEP_ORANGE: Colour = Colour::rgb(234, 88, 12);

/// Outer flame base (#DC2626).
pub const RED: Colour = Colour::rgb(220, 38, 38);

/// Bottom of the hero background gradient (#1A0A0A).
pub const DARK_RED_BG: Colour = Colour::rgb(26, 10, 10);

pub const WHITE: Colour = Colour::WHITE;

/// Flame tips and inner flame top.
pub const WARM_YELLOW: Colour = Colour::rgb(255, 200, 50);

/// Bright flame core.
pub const CORE: Colour = Colour::rgb(255, 230, 100);

/// Badge fill behind "Built on Base".
pub const BADGE_BG: Colour = Colour::new(30, 30, 50, 180);

/// Badge text.
pub const BADGE_TEXT: Colour = Colour::rgb(100, 150, 255);
