//! Text layout and drawing.
//!
//! Text is laid out one character at a time along a single line, advancing
//! by each character's own width. This keeps the gradient variant simple:
//! every character gets a flat colour picked by its index in the string.

use crate::render::{Canvas, Font};
use crate::types::Colour;

/// Rendered extent of a line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    /// Line height of the font.
    pub height: f32,
    /// Height of the inked pixels only; zero for blank text.
    pub ink_height: f32,
}

/// A character positioned on the line with its fill colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub x: f32,
    pub colour: Colour,
}

/// Measure a single line of text.
pub fn measure_text(font: &Font, text: &str) -> TextSize {
    TextSize {
        width: text.chars().map(|ch| font.advance(ch)).sum(),
        height: font.line_height(),
        ink_height: font
            .ink_span(text)
            .map_or(0.0, |(top, bottom)| bottom - top),
    }
}

/// Left edge that centres a line of `text_width` on `cx`.
///
/// Lines wider than the canvas run off both edges.
fn centred_left(cx: f32, text_width: f32) -> f32 {
    cx - (text_width / 2.0).floor()
}

/// Lay out `text` centred on `cx`, fading from `from` to `to` across the string.
///
/// The first character is always exactly `from`; the last is `to` when there
/// are at least two characters.
pub fn layout_gradient_text(
    font: &Font,
    text: &str,
    cx: f32,
    from: Colour,
    to: Colour,
) -> Vec<PlacedGlyph> {
    let size = measure_text(font, text);
    let last = text.chars().count().saturating_sub(1).max(1) as f64;

    let mut x = centred_left(cx, size.width);
    let mut glyphs = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        glyphs.push(PlacedGlyph {
            ch,
            x,
            colour: from.lerp(to, i as f64 / last),
        });
        x += font.advance(ch);
    }
    glyphs
}

/// Draw `text` with a per-character horizontal gradient, centred on `cx`
/// with its top at `y`.
pub fn draw_gradient_text(
    canvas: &mut Canvas,
    font: &Font,
    text: &str,
    cx: f32,
    y: f32,
    from: Colour,
    to: Colour,
) -> Vec<PlacedGlyph> {
    let glyphs = layout_gradient_text(font, text, cx, from, to);
    for glyph in &glyphs {
        font.draw_char(canvas, glyph.x, y, glyph.ch, glyph.colour);
    }
    glyphs
}

/// Draw `text` in a single colour with its top-left corner at `(x, y)`.
pub fn draw_text(canvas: &mut Canvas, font: &Font, text: &str, x: f32, y: f32, colour: Colour) {
    let mut cursor = x;
    for ch in text.chars() {
        font.draw_char(canvas, cursor, y, ch, colour);
        cursor += font.advance(ch);
    }
}

/// Draw `text` in a single colour, horizontally centred on `cx`.
pub fn draw_centred_text(
    canvas: &mut Canvas,
    font: &Font,
    text: &str,
    cx: f32,
    y: f32,
    colour: Colour,
) {
    let width = measure_text(font, text).width;
    let x = centred_left(cx, width);
    draw_text(canvas, font, text, x, y, colour);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FROM: Colour = Colour::rgb(255, 255, 255);
    const TO: Colour = Colour::rgb(249, 115, 22);

    #[test]
    fn test_measure_builtin() {
        let size = measure_text(&Font::builtin(), "ROAST");
        assert_eq!(
            size,
            TextSize {
                width: 30.0,
                height: 8.0,
                ink_height: 7.0,
            }
        );
        assert_eq!(measure_text(&Font::builtin(), "  ").ink_height, 0.0);
    }

    #[test]
    fn test_single_char_uses_first_colour() {
        let glyphs = layout_gradient_text(&Font::builtin(), "A", 50.0, FROM, TO);
        assert_eq!(
            glyphs,
            vec![PlacedGlyph { ch: 'A', x: 47.0, colour: FROM }]
        );
    }

    #[test]
    fn test_empty_text_lays_out_nothing() {
        let glyphs = layout_gradient_text(&Font::builtin(), "", 50.0, FROM, TO);
        assert!(glyphs.is_empty());
    }

    #[test]
    fn test_gradient_spans_endpoints() {
        let glyphs = layout_gradient_text(&Font::builtin(), "ROAST ME", 600.0, FROM, TO);
        assert_eq!(glyphs.len(), 8);
        assert_eq!(glyphs[0].colour, FROM);
        assert_eq!(glyphs[7].colour, TO);
        // Centred: 8 chars * 6px = 48px wide
        assert_eq!(glyphs[0].x, 576.0);
        assert_eq!(glyphs[7].x, 618.0);
    }

    #[test]
    fn test_gradient_is_monotonic() {
        let glyphs = layout_gradient_text(&Font::builtin(), "ONCHAIN", 0.0, FROM, TO);
        for pair in glyphs.windows(2) {
            assert!(pair[0].colour.g >= pair[1].colour.g);
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn test_centring_runs_off_left_edge() {
        // 4 chars * 6px = 24px, half of it hangs left of x = 0
        let glyphs = layout_gradient_text(&Font::builtin(), "EDGE", 0.0, FROM, TO);
        assert_eq!(glyphs[0].x, -12.0);
        assert_eq!(glyphs[3].x, 6.0);
    }

    #[test]
    fn test_centring_odd_width_rounds_half_down() {
        let font = Font::builtin();
        let x = centred_left(10.0, 7.0);
        assert_eq!(x, 7.0);
        let glyphs = layout_gradient_text(&font, "EDGE", 1200.0, FROM, TO);
        assert_eq!(glyphs[0].x, 1188.0);
    }

    #[test]
    fn test_draw_centred_text_overflowing_canvas() {
        let bg = Colour::rgb(0, 0, 0);
        let mut canvas = Canvas::new(12, 10, bg);
        // 24px of text centred on 6 starts at -6: the third 'I' lands at x 6
        draw_centred_text(&mut canvas, &Font::builtin(), "IIII", 6.0, 0.0, Colour::WHITE);
        assert_eq!(canvas.get(8, 3), Some(Colour::WHITE));
        assert_eq!(canvas.get(2, 3), Some(Colour::WHITE));
    }

    #[test]
    fn test_draw_gradient_text_paints_canvas() {
        let bg = Colour::rgb(10, 10, 15);
        let mut canvas = Canvas::new(40, 12, bg);
        draw_gradient_text(&mut canvas, &Font::builtin(), "II", 20.0, 2.0, FROM, TO);

        // 'I' has a solid middle column two pixels right of its origin
        assert_eq!(canvas.get(16, 4), Some(FROM));
        assert_eq!(canvas.get(22, 4), Some(TO));
    }

    #[test]
    fn test_draw_centred_text() {
        let bg = Colour::rgb(0, 0, 0);
        let mut canvas = Canvas::new(30, 10, bg);
        draw_centred_text(&mut canvas, &Font::builtin(), "I", 15.0, 0.0, Colour::WHITE);
        assert_eq!(canvas.get(14, 3), Some(Colour::WHITE));
    }
}
