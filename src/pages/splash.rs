//! Splash screen: a small flame on the dark background.

use crate::render::{Canvas, Flame};
use crate::types::palette::DARK_BG;

pub const SIZE: (u32, u32) = (200, 200);

pub fn render() -> Canvas {
    let mut canvas = Canvas::new(SIZE.0, SIZE.1, DARK_BG);
    Flame::new(100.0, 140.0, 0.5).draw(&mut canvas);
    canvas
}
