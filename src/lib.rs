//! flamegen - procedural branding image generator
//!
//! A library for drawing the layered flame motif and composing it into the
//! fixed set of app images (icon, splash, previews and banners).

pub mod cli;
pub mod error;
pub mod output;
pub mod pages;
pub mod render;
pub mod types;

pub use error::{FlameError, Result};
pub use pages::{generate, generate_all, Page, Progress};
pub use render::{
    draw_embers, draw_gradient_text, draw_radial_glow, scatter_embers, write_png, BoundingBox,
    Canvas, Ember, Flame, FlameShape, Font, FontResolver, Glow,
};
pub use types::Colour;
