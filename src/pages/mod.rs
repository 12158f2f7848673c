//! Page generators.
//!
//! Each page paints a fixed layout onto a fresh canvas. `generate` then
//! flattens it onto the page background and writes it as a PNG. Pages are
//! independent of each other and always run in `Page::ALL` order.

pub mod hero;
pub mod icon;
pub mod og;
pub mod preview;
pub mod splash;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render::{write_png, Canvas, FontResolver};
use crate::types::palette::DARK_BG;

/// One of the generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Icon,
    Splash,
    Preview,
    Hero,
    Og,
}

impl Page {
    /// Every page, in generation order.
    pub const ALL: [Page; 5] = [Page::Icon, Page::Splash, Page::Preview, Page::Hero, Page::Og];

    pub fn file_name(self) -> &'static str {
        match self {
            Page::Icon => "icon.png",
            Page::Splash => "splash.png",
            Page::Preview => "preview.png",
            Page::Hero => "hero.png",
            Page::Og => "og.png",
        }
    }

    /// Pixel dimensions as (width, height).
    pub fn size(self) -> (u32, u32) {
        match self {
            Page::Icon => icon::SIZE,
            Page::Splash => splash::SIZE,
            Page::Preview => preview::SIZE,
            Page::Hero => hero::SIZE,
            Page::Og => og::SIZE,
        }
    }

    /// Paint the page onto a new canvas.
    pub fn render(self, fonts: &FontResolver) -> Canvas {
        match self {
            Page::Icon => icon::render(),
            Page::Splash => splash::render(),
            Page::Preview => preview::render(fonts),
            Page::Hero => hero::render(fonts),
            Page::Og => og::render(fonts),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.size();
        write!(f, "{} ({}x{})", self.file_name(), w, h)
    }
}

/// Render `page`, flatten it and write it into `out_dir`.
///
/// Returns the path written. An existing file at that path is replaced.
pub fn generate(page: Page, out_dir: &Path, fonts: &FontResolver) -> Result<PathBuf> {
    let canvas = page.render(fonts);
    let flat = canvas.flatten(DARK_BG);
    let path = out_dir.join(page.file_name());
    write_png(&flat, &path)?;
    Ok(path)
}

/// Progress reported by [`generate_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// About to render this page.
    Started(Page),
    /// The page was written to this path.
    Written(Page, &'a Path),
}

/// Generate every page in order, stopping at the first failure.
///
/// `on_progress` is called before and after each page.
pub fn generate_all<F>(
    out_dir: &Path,
    fonts: &FontResolver,
    mut on_progress: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(Progress<'_>),
{
    let mut written = Vec::with_capacity(Page::ALL.len());
    for page in Page::ALL {
        on_progress(Progress::Started(page));
        let path = generate(page, out_dir, fonts)?;
        on_progress(Progress::Written(page, &path));
        written.push(path);
    }
    Ok(written)
}
