//! App icon: a single large flame.

use crate::render::{Canvas, Flame};
use crate::types::palette::DARK_BG;

pub const SIZE: (u32, u32) = (1024, 1024);

pub fn render() -> Canvas {
    let mut canvas = Canvas::new(SIZE.0, SIZE.1, DARK_BG);
    Flame::new(512.0, 680.0, 2.5).draw(&mut canvas);
    canvas
}
