//! Image file decoding.

use crate::error::{Error, Result};
use image::DynamicImage;
use std::path::Path;

/// Decode an image file into memory.
///
/// The source's native channel order and bit depth are preserved here;
/// normalization to RGB happens in [`super::prepare`].
///
/// # Errors
/// Returns [`Error::ImageDecode`] if the file cannot be decoded (missing,
/// truncated, or not a supported image format) and [`Error::InvalidImage`]
/// if the decoded image has zero width or height.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|e| Error::ImageDecode {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidImage {
            reason: format!("image '{}' has zero width or height", path.display()),
        });
    }

    Ok(image)
}
