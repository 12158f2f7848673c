//! Command-line interface.
//!
//! The default invocation takes no arguments and regenerates every image.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{FlameError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pages::{generate_all, Progress};
use crate::render::FontResolver;

/// flamegen - generate the flame-themed branding images
#[derive(Parser, Debug)]
#[command(name = "flamegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output directory (default: public/ in the crate root)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Font file to try before the built-in candidate list
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Directory the images are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"))
    }

    fn font_resolver(&self) -> FontResolver {
        match &self.font {
            Some(path) => FontResolver::new().prefer(path),
            None => FontResolver::new(),
        }
    }
}

pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let out_dir = cli.output_dir();
    fs::create_dir_all(&out_dir).map_err(|e| FlameError::Io {
        path: out_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;
    printer.info("Output", &printer.cyan(&display_path(&out_dir)));

    let fonts = cli.font_resolver();
    match fonts.resolve(20, false).path() {
        Some(path) => printer.info("Font", &display_path(path)),
        None => printer.warning("Font", "no system font found, using the built-in bitmap font"),
    }

    let written = generate_all(&out_dir, &fonts, |event| match event {
        Progress::Started(page) => printer.status("Generating", &page.to_string()),
        Progress::Written(_, path) => printer.success("Wrote", &printer.dim(&display_path(path))),
    })?;

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "image", "images"),
            display_path(&out_dir)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Page;
    use tempfile::tempdir;

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["flamegen"]).unwrap();
        assert!(cli.output.is_none());
        assert!(cli.font.is_none());
        assert!(!cli.quiet);
        assert!(cli.output_dir().ends_with("public"));
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["flamegen", "-o", "out", "--font", "a.ttf", "-q"]).unwrap();
        assert_eq!(cli.output_dir(), PathBuf::from("out"));
        assert_eq!(cli.font, Some(PathBuf::from("a.ttf")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_run_creates_nested_output_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("public");
        let cli = Cli {
            output: Some(out.clone()),
            font: None,
            quiet: true,
        };

        run(cli, &Printer::quiet()).unwrap();

        for page in Page::ALL {
            assert!(out.join(page.file_name()).exists());
        }
    }
}
