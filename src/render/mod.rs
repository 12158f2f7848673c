//! Rendering module for flamegen.
//!
//! This module holds the drawing toolkit shared by every page: the canvas,
//! fonts and text, the flame motif, ember particles and PNG output.

mod canvas;
mod embers;
mod flame;
mod font;
mod png;
mod text;

pub use canvas::{BoundingBox, Canvas};
pub use embers::{draw_embers, scatter_embers, Ember, DEFAULT_EMBER_COUNT, EMBER_SEED};
pub use flame::{draw_radial_glow, Falloff, Flame, FlameShape, Glow};
pub use font::{Font, FontResolver};
pub use png::write_png;
pub use text::{
    draw_centred_text, draw_gradient_text, draw_text, layout_gradient_text, measure_text,
    PlacedGlyph, TextSize,
};
