//! Open Graph card: flame, title, subtitle and a "Built on Base" badge.

use crate::render::{
    draw_centred_text, draw_gradient_text, draw_text, measure_text, BoundingBox, Canvas, Flame,
    FontResolver,
};
use crate::types::palette::{BADGE_BG, BADGE_TEXT, DARK_BG, ORANGE, WHITE};

pub const SIZE: (u32, u32) = (1200, 630);

const TITLE: &str = "ONCHAIN ROAST ME";
const SUBTITLE: &str = "AI roasts your Farcaster profile";
const BADGE: &str = "Built on Base";

/// Gap between the badge text and the right/bottom edges.
const BADGE_MARGIN: (f32, f32) = (50.0, 40.0);
const BADGE_PADDING: f32 = 10.0;
const BADGE_RADIUS: f64 = 8.0;

pub fn render(fonts: &FontResolver) -> Canvas {
    let mut canvas = Canvas::new(SIZE.0, SIZE.1, DARK_BG);
    let cx = SIZE.0 as f32 / 2.0;

    Flame::new(600.0, 350.0, 1.5).draw(&mut canvas);

    let title_font = fonts.resolve(72, true);
    draw_gradient_text(&mut canvas, &title_font, TITLE, cx, 380.0, WHITE, ORANGE);

    let subtitle_font = fonts.resolve(30, false);
    draw_centred_text(&mut canvas, &subtitle_font, SUBTITLE, cx, 470.0, ORANGE);

    draw_badge(&mut canvas, fonts);

    canvas
}

/// Rounded pill in the bottom-right corner with the badge text on top.
///
/// The pill is as tall as the inked text, not the full line, plus padding.
fn draw_badge(canvas: &mut Canvas, fonts: &FontResolver) {
    let font = fonts.resolve(20, true);
    let size = measure_text(&font, BADGE);
    let x = (SIZE.0 as f32 - size.width - BADGE_MARGIN.0).floor();
    let y = (SIZE.1 as f32 - size.ink_height - BADGE_MARGIN.1).floor();

    let pill = BoundingBox::new(
        (x - BADGE_PADDING) as f64,
        (y - BADGE_PADDING) as f64,
        (x + size.width + BADGE_PADDING) as f64,
        (y + size.ink_height + BADGE_PADDING) as f64,
    );
    canvas.fill_rounded_rect(pill, BADGE_RADIUS, BADGE_BG);
    draw_text(canvas, &font, BADGE, x, y, BADGE_TEXT);
}
