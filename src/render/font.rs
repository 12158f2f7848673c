//! Font loading and resolution.
//!
//! Fonts come from an ordered list of candidate files on disk; the first
//! one that exists and parses wins. When nothing loads, a built-in 5x7
//! bitmap font is used instead. That font ignores the requested size, so
//! callers must not assume metrics match what they asked for.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font as _, FontVec, PxScale, ScaleFont};

use crate::render::Canvas;
use crate::types::Colour;

/// Regular-weight candidates, in preference order.
const REGULAR_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/impact.ttf",
    "C:/Windows/Fonts/arialbd.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "C:/Windows/Fonts/segoeui.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Tried ahead of the regular list when a bold face is requested.
const BOLD_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/impact.ttf",
    "C:/Windows/Fonts/arialbd.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Impact.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
];

/// Built-in glyph cell: 5 columns of 8 bits, low bit at the top.
const BUILTIN_COLUMNS: usize = 5;
const BUILTIN_ROWS: usize = 8;
const BUILTIN_ADVANCE: f32 = 6.0;

/// Printable ASCII (0x20..=0x7E), column-major.
#[rustfmt::skip]
const BUILTIN_GLYPHS: [[u8; BUILTIN_COLUMNS]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x5F, 0x00, 0x00],
    [0x00, 0x07, 0x00, 0x07, 0x00], [0x14, 0x7F, 0x14, 0x7F, 0x14],
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], [0x23, 0x13, 0x08, 0x64, 0x62],
    [0x36, 0x49, 0x56, 0x20, 0x50], [0x00, 0x08, 0x07, 0x03, 0x00],
    [0x00, 0x1C, 0x22, 0x41, 0x00], [0x00, 0x41, 0x22, 0x1C, 0x00],
    [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], [0x08, 0x08, 0x3E, 0x08, 0x08],
    [0x00, 0x80, 0x70, 0x30, 0x00], [0x08, 0x08, 0x08, 0x08, 0x08],
    [0x00, 0x00, 0x60, 0x60, 0x00], [0x20, 0x10, 0x08, 0x04, 0x02],
    [0x3E, 0x51, 0x49, 0x45, 0x3E], [0x00, 0x42, 0x7F, 0x40, 0x00],
    [0x72, 0x49, 0x49, 0x49, 0x46], [0x21, 0x41, 0x49, 0x4D, 0x33],
    [0x18, 0x14, 0x12, 0x7F, 0x10], [0x27, 0x45, 0x45, 0x45, 0x39],
    [0x3C, 0x4A, 0x49, 0x49, 0x31], [0x41, 0x21, 0x11, 0x09, 0x07],
    [0x36, 0x49, 0x49, 0x49, 0x36], [0x46, 0x49, 0x49, 0x29, 0x1E],
    [0x00, 0x00, 0x14, 0x00, 0x00], [0x00, 0x40, 0x34, 0x00, 0x00],
    [0x00, 0x08, 0x14, 0x22, 0x41], [0x14, 0x14, 0x14, 0x14, 0x14],
    [0x00, 0x41, 0x22, 0x14, 0x08], [0x02, 0x01, 0x59, 0x09, 0x06],
    [0x3E, 0x41, 0x5D, 0x59, 0x4E], [0x7C, 0x12, 0x11, 0x12, 0x7C],
    [0x7F, 0x49, 0x49, 0x49, 0x36], [0x3E, 0x41, 0x41, 0x41, 0x22],
    [0x7F, 0x41, 0x41, 0x41, 0x3E], [0x7F, 0x49, 0x49, 0x49, 0x41],
    [0x7F, 0x09, 0x09, 0x09, 0x01], [0x3E, 0x41, 0x41, 0x51, 0x73],
    [0x7F, 0x08, 0x08, 0x08, 0x7F], [0x00, 0x41, 0x7F, 0x41, 0x00],
    [0x20, 0x40, 0x41, 0x3F, 0x01], [0x7F, 0x08, 0x14, 0x22, 0x41],
    [0x7F, 0x40, 0x40, 0x40, 0x40], [0x7F, 0x02, 0x1C, 0x02, 0x7F],
    [0x7F, 0x04, 0x08, 0x10, 0x7F], [0x3E, 0x41, 0x41, 0x41, 0x3E],
    [0x7F, 0x09, 0x09, 0x09, 0x06], [0x3E, 0x41, 0x51, 0x21, 0x5E],
    [0x7F, 0x09, 0x19, 0x29, 0x46], [0x26, 0x49, 0x49, 0x49, 0x32],
    [0x03, 0x01, 0x7F, 0x01, 0x03], [0x3F, 0x40, 0x40, 0x40, 0x3F],
    [0x1F, 0x20, 0x40, 0x20, 0x1F], [0x3F, 0x40, 0x38, 0x40, 0x3F],
    [0x63, 0x14, 0x08, 0x14, 0x63], [0x03, 0x04, 0x78, 0x04, 0x03],
    [0x61, 0x59, 0x49, 0x4D, 0x43], [0x00, 0x7F, 0x41, 0x41, 0x41],
    [0x02, 0x04, 0x08, 0x10, 0x20], [0x00, 0x41, 0x41, 0x41, 0x7F],
    [0x04, 0x02, 0x01, 0x02, 0x04], [0x40, 0x40, 0x40, 0x40, 0x40],
    [0x00, 0x03, 0x07, 0x08, 0x00], [0x20, 0x54, 0x54, 0x78, 0x40],
    [0x7F, 0x28, 0x44, 0x44, 0x38], [0x38, 0x44, 0x44, 0x44, 0x28],
    [0x38, 0x44, 0x44, 0x28, 0x7F], [0x38, 0x54, 0x54, 0x54, 0x18],
    [0x00, 0x08, 0x7E, 0x09, 0x02], [0x18, 0xA4, 0xA4, 0x9C, 0x78],
    [0x7F, 0x08, 0x04, 0x04, 0x78], [0x00, 0x44, 0x7D, 0x40, 0x00],
    [0x20, 0x40, 0x40, 0x3D, 0x00], [0x7F, 0x10, 0x28, 0x44, 0x00],
    [0x00, 0x41, 0x7F, 0x40, 0x00], [0x7C, 0x04, 0x78, 0x04, 0x78],
    [0x7C, 0x08, 0x04, 0x04, 0x78], [0x38, 0x44, 0x44, 0x44, 0x38],
    [0xFC, 0x18, 0x24, 0x24, 0x18], [0x18, 0x24, 0x24, 0x18, 0xFC],
    [0x7C, 0x08, 0x04, 0x04, 0x08], [0x48, 0x54, 0x54, 0x54, 0x24],
    [0x04, 0x04, 0x3F, 0x44, 0x24], [0x3C, 0x40, 0x40, 0x20, 0x7C],
    [0x1C, 0x20, 0x40, 0x20, 0x1C], [0x3C, 0x40, 0x30, 0x40, 0x3C],
    [0x44, 0x28, 0x10, 0x28, 0x44], [0x4C, 0x90, 0x90, 0x90, 0x7C],
    [0x44, 0x64, 0x54, 0x4C, 0x44], [0x00, 0x08, 0x36, 0x41, 0x00],
    [0x00, 0x00, 0x77, 0x00, 0x00], [0x00, 0x41, 0x36, 0x08, 0x00],
    [0x02, 0x01, 0x02, 0x04, 0x02],
];

/// A font ready to draw at a fixed size.
pub enum Font {
    /// A TrueType/OpenType face loaded from disk.
    Outline {
        face: FontVec,
        scale: PxScale,
        path: PathBuf,
    },
    /// The embedded bitmap font.
    Builtin,
}

impl Font {
    /// The embedded bitmap font.
    pub fn builtin() -> Self {
        Font::Builtin
    }

    /// Load a font file at `size` pixels per em.
    ///
    /// Returns `None` if the file cannot be read or is not a usable font.
    pub fn load(path: &Path, size: u32) -> Option<Self> {
        let data = fs::read(path).ok()?;
        let face = FontVec::try_from_vec(data).ok()?;
        // `size` is pixels per em; PxScale measures ascent-to-descent instead
        let scale = face
            .units_per_em()
            .map(|upem| PxScale::from(size as f32 * face.height_unscaled() / upem))
            .unwrap_or_else(|| PxScale::from(size as f32));
        Some(Font::Outline {
            face,
            scale,
            path: path.to_path_buf(),
        })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin)
    }

    /// Path the font was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Font::Outline { path, .. } => Some(path),
            Font::Builtin => None,
        }
    }

    /// Horizontal advance of a single character.
    pub fn advance(&self, ch: char) -> f32 {
        match self {
            Font::Outline { face, scale, .. } => {
                let scaled = face.as_scaled(*scale);
                scaled.h_advance(scaled.glyph_id(ch))
            }
            Font::Builtin => BUILTIN_ADVANCE,
        }
    }

    /// Distance from the top of a line to the bottom of its descenders.
    pub fn line_height(&self) -> f32 {
        match self {
            Font::Outline { face, scale, .. } => face.as_scaled(*scale).height(),
            Font::Builtin => BUILTIN_ROWS as f32,
        }
    }

    /// Top and bottom of the inked pixels of `text`, measured from the line top.
    ///
    /// Returns `None` when nothing in `text` leaves a mark (e.g. all spaces).
    pub fn ink_span(&self, text: &str) -> Option<(f32, f32)> {
        match self {
            Font::Outline { face, scale, .. } => {
                let scaled = face.as_scaled(*scale);
                text.chars()
                    .filter_map(|ch| {
                        let mut glyph = scaled.scaled_glyph(ch);
                        glyph.position = point(0.0, scaled.ascent());
                        face.outline_glyph(glyph)
                    })
                    .map(|outlined| {
                        let bounds = outlined.px_bounds();
                        (bounds.min.y, bounds.max.y)
                    })
                    .reduce(|(top, bottom), (t, b)| (top.min(t), bottom.max(b)))
            }
            Font::Builtin => {
                let rows = text
                    .chars()
                    .flat_map(|ch| builtin_glyph(ch).iter().copied())
                    .fold(0u8, |acc, bits| acc | bits);
                if rows == 0 {
                    return None;
                }
                let top = rows.trailing_zeros() as f32;
                let bottom = (u8::BITS - rows.leading_zeros()) as f32;
                Some((top, bottom))
            }
        }
    }

    /// Draw one character with its line top at `(x, y)`.
    pub fn draw_char(&self, canvas: &mut Canvas, x: f32, y: f32, ch: char, colour: Colour) {
        match self {
            Font::Outline { face, scale, .. } => {
                let scaled = face.as_scaled(*scale);
                let mut glyph = scaled.scaled_glyph(ch);
                glyph.position = point(x, y + scaled.ascent());
                let Some(outlined) = face.outline_glyph(glyph) else {
                    return;
                };
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let alpha = colour.a as f32 * coverage.clamp(0.0, 1.0);
                    canvas.blend_pixel(
                        bounds.min.x as i64 + gx as i64,
                        bounds.min.y as i64 + gy as i64,
                        colour.with_alpha(alpha.round() as u8),
                    );
                });
            }
            Font::Builtin => {
                let (left, top) = (x.round() as i64, y.round() as i64);
                for (col, bits) in builtin_glyph(ch).iter().enumerate() {
                    for row in 0..BUILTIN_ROWS {
                        if bits & (1 << row) != 0 {
                            canvas.blend_pixel(left + col as i64, top + row as i64, colour);
                        }
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Font::Outline { path, scale, .. } => f
                .debug_struct("Outline")
                .field("path", path)
                .field("scale", &scale.y)
                .finish(),
            Font::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Glyph columns for `ch`, with `?` standing in for anything outside printable ASCII.
fn builtin_glyph(ch: char) -> &'static [u8; BUILTIN_COLUMNS] {
    let index = match ch {
        ' '..='~' => ch as usize - ' ' as usize,
        _ => '?' as usize - ' ' as usize,
    };
    &BUILTIN_GLYPHS[index]
}

/// Ordered font candidate list with a built-in fallback.
#[derive(Debug, Clone)]
pub struct FontResolver {
    /// Tried before anything else, regardless of weight.
    preferred: Vec<PathBuf>,
    regular: Vec<PathBuf>,
    bold: Vec<PathBuf>,
}

impl FontResolver {
    /// Resolver over the platform font locations.
    pub fn new() -> Self {
        Self {
            preferred: Vec::new(),
            regular: REGULAR_CANDIDATES.iter().map(PathBuf::from).collect(),
            bold: BOLD_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }

    /// Resolver over an explicit candidate list, used for both weights.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self {
            preferred: Vec::new(),
            regular: candidates,
            bold: Vec::new(),
        }
    }

    /// Try `path` before every other candidate.
    pub fn prefer(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferred.push(path.into());
        self
    }

    /// Candidate paths in the order they will be tried.
    pub fn candidates(&self, bold: bool) -> Vec<&Path> {
        let bold_paths: &[PathBuf] = if bold { &self.bold } else { &[] };
        self.preferred
            .iter()
            .chain(bold_paths)
            .chain(&self.regular)
            .map(PathBuf::as_path)
            .collect()
    }

    /// First candidate that exists and loads at `size`, else the built-in font.
    pub fn resolve(&self, size: u32, bold: bool) -> Font {
        self.candidates(bold)
            .into_iter()
            .filter(|path| path.exists())
            .find_map(|path| Font::load(path, size))
            .unwrap_or_else(Font::builtin)
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_missing_candidates_falls_back() {
        let resolver = FontResolver::with_candidates(vec![
            PathBuf::from("/nonexistent/one.ttf"),
            PathBuf::from("/nonexistent/two.ttf"),
        ]);
        let font = resolver.resolve(80, true);
        assert!(font.is_builtin());
        assert_eq!(font.path(), None);
    }

    #[test]
    fn test_resolve_corrupt_file_is_skipped() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.ttf");
        fs::write(&broken, b"definitely not a font").unwrap();

        let resolver = FontResolver::with_candidates(vec![broken]);
        assert!(resolver.resolve(24, false).is_builtin());
    }

    #[test]
    fn test_bold_candidates_come_first() {
        let resolver = FontResolver::new();
        let bold = resolver.candidates(true);
        let regular = resolver.candidates(false);

        assert_eq!(bold.len(), BOLD_CANDIDATES.len() + REGULAR_CANDIDATES.len());
        assert_eq!(bold[0], Path::new("C:/Windows/Fonts/impact.ttf"));
        assert_eq!(bold[1], Path::new("C:/Windows/Fonts/arialbd.ttf"));
        assert_eq!(regular.len(), REGULAR_CANDIDATES.len());
    }

    #[test]
    fn test_preferred_path_is_tried_first() {
        let resolver = FontResolver::new().prefer("/opt/fonts/custom.ttf");
        assert_eq!(resolver.candidates(false)[0], Path::new("/opt/fonts/custom.ttf"));
        assert_eq!(resolver.candidates(true)[0], Path::new("/opt/fonts/custom.ttf"));
    }

    #[test]
    fn test_builtin_metrics_ignore_requested_size() {
        let font = Font::builtin();
        assert_eq!(font.advance('A'), BUILTIN_ADVANCE);
        assert_eq!(font.line_height(), BUILTIN_ROWS as f32);
    }

    #[test]
    fn test_outline_size_is_pixels_per_em() {
        let font = FontResolver::new().resolve(80, true);
        let Font::Outline { face, .. } = &font else {
            // No system font on this host
            return;
        };
        let upem = face.units_per_em().unwrap();
        let expected = face.h_advance_unscaled(face.glyph_id('M')) * 80.0 / upem;
        let got = font.advance('M');
        assert!((got - expected).abs() < 0.01, "expected {} got {}", expected, got);
    }

    #[test]
    fn test_outline_ink_fits_inside_line() {
        let font = FontResolver::new().resolve(20, true);
        if font.is_builtin() {
            return;
        }
        let (top, bottom) = font.ink_span("Built on Base").unwrap();
        assert!(top >= 0.0);
        assert!(bottom - top < font.line_height());
        assert_eq!(font.ink_span("   "), None);
    }

    #[test]
    fn test_builtin_ink_span() {
        let font = Font::builtin();
        // Capitals fill rows 0..7, 'g' descends into row 7
        assert_eq!(font.ink_span("Built on Base"), Some((0.0, 7.0)));
        assert_eq!(font.ink_span("Bg"), Some((0.0, 8.0)));
        assert_eq!(font.ink_span(" "), None);
    }

    #[test]
    fn test_builtin_unknown_char_uses_question_mark() {
        assert_eq!(builtin_glyph('é'), builtin_glyph('?'));
        assert_eq!(builtin_glyph(' '), &[0; BUILTIN_COLUMNS]);
    }

    #[test]
    fn test_builtin_draws_pixels() {
        let mut canvas = Canvas::new(10, 10, Colour::rgb(0, 0, 0));
        Font::builtin().draw_char(&mut canvas, 1.0, 1.0, 'I', Colour::WHITE);
        // Middle column of 'I' is solid for rows 0..7
        for row in 0..7 {
            assert_eq!(canvas.get(3, 1 + row), Some(Colour::WHITE));
        }
        assert_eq!(canvas.get(0, 0), Some(Colour::rgb(0, 0, 0)));
    }
}
