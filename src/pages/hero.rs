//! Hero banner: a row of flames over a dark red gradient, with embers.

use crate::render::{
    draw_centred_text, draw_embers, draw_gradient_text, Canvas, Flame, FontResolver,
};
use crate::types::palette::{DARK_BG, DARK_RED_BG, ORANGE, RED, WHITE};

pub const SIZE: (u32, u32) = (1200, 630);

/// Shared base line of the flame row.
pub const FLAME_BASE_Y: f64 = 600.0;

/// Flame (x, scale) pairs, largest in the middle.
pub const FLAMES: [(f64, f64); 5] = [
    (150.0, 0.8),
    (350.0, 1.2),
    (600.0, 1.8),
    (850.0, 1.2),
    (1050.0, 0.8),
];

const EMBER_COUNT: usize = 50;

const TITLE: &str = "ROAST ME";
const SUBTITLE: &str = "Get roasted by AI. Pay with crypto. Flex the burn.";

pub fn render(fonts: &FontResolver) -> Canvas {
    let mut canvas = Canvas::new(SIZE.0, SIZE.1, DARK_BG);
    let cx = SIZE.0 as f32 / 2.0;

    canvas.fill_vertical_gradient(DARK_BG, DARK_RED_BG);

    for (x, scale) in FLAMES {
        Flame::new(x, FLAME_BASE_Y, scale).draw(&mut canvas);
    }

    draw_embers(&mut canvas, EMBER_COUNT);

    let title_font = fonts.resolve(90, true);
    draw_gradient_text(&mut canvas, &title_font, TITLE, cx, 250.0, ORANGE, RED);

    let subtitle_font = fonts.resolve(24, false);
    draw_centred_text(&mut canvas, &subtitle_font, SUBTITLE, cx, 370.0, WHITE.with_alpha(180));

    canvas
}
