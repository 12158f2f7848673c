//! Social preview card: flame, gradient title and tagline.

use crate::render::{draw_centred_text, draw_gradient_text, Canvas, Flame, FontResolver};
use crate::types::palette::{DARK_BG, ORANGE, WHITE};

pub const SIZE: (u32, u32) = (1200, 630);

const TITLE: &str = "ROAST ME";
const TAGLINE: &str = "AI-powered roasts on Base";

pub fn render(fonts: &FontResolver) -> Canvas {
    let mut canvas = Canvas::new(SIZE.0, SIZE.1, DARK_BG);
    let cx = SIZE.0 as f32 / 2.0;

    Flame::new(600.0, 360.0, 1.5).draw(&mut canvas);

    let title_font = fonts.resolve(80, true);
    draw_gradient_text(&mut canvas, &title_font, TITLE, cx, 400.0, WHITE, ORANGE);

    let tagline_font = fonts.resolve(28, false);
    draw_centred_text(&mut canvas, &tagline_font, TAGLINE, cx, 500.0, ORANGE.with_alpha(200));

    canvas
}
