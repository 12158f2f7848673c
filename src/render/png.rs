//! PNG output for flattened images.

use std::path::Path;

use image::{ImageError, ImageFormat, RgbImage};

use crate::error::{FlameError, Result};

/// Write an opaque image to a PNG file, replacing any existing file.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(err) => FlameError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to write PNG: {}", err),
            },
            other => FlameError::Encode {
                path: path.to_path_buf(),
                message: other.to_string(),
                help: Some("Check the image dimensions are non-zero".to_string()),
            },
        })
}
