//! Raw image to model input tensor conversion.

use crate::error::{Error, Result};
use image::{DynamicImage, imageops::FilterType};
use ndarray::Array4;

/// Convert a decoded image into a model input tensor of shape `[1, H, W, 3]`.
///
/// The image is resized to exactly `target_width` x `target_height` with a
/// Catmull-Rom (cubic-class) filter, matching the interpolation the model
/// saw at training time. Channels are normalized to RGB, intensities
/// scaled to [0,1] by dividing by 255, and a leading batch axis of size 1
/// is added.
pub fn prepare(image: &DynamicImage, target_width: u32, target_height: u32) -> Result<Array4<f32>> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::InvalidImage {
            reason: format!("target size {target_width}x{target_height} must be non-zero"),
        });
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidImage {
            reason: "source image has zero width or height".to_string(),
        });
    }

    let resized = image
        .resize_exact(target_width, target_height, FilterType::CatmullRom)
        .to_rgb8();

    let mut tensor = Array4::<f32>::zeros((1, target_height as usize, target_width as usize, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let (row, col) = (y as usize, x as usize);
        tensor[[0, row, col, 0]] = f32::from(r) / 255.0;
        tensor[[0, row, col, 1]] = f32::from(g) / 255.0;
        tensor[[0, row, col, 2]] = f32::from(b) / 255.0;
    }

    Ok(tensor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb(rgb)))
    }

    #[test]
    fn test_prepare_shape_is_batch_height_width_channels() {
        let image = solid_image(37, 53, [10, 20, 30]);
        let tensor = prepare(&image, 200, 150).unwrap();
        assert_eq!(tensor.shape(), &[1, 150, 200, 3]);
    }

    #[test]
    fn test_prepare_values_in_unit_range() {
        let image = solid_image(64, 64, [255, 0, 128]);
        let tensor = prepare(&image, 32, 32).unwrap();
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_prepare_scales_by_255() {
        let image = solid_image(16, 16, [255, 51, 0]);
        let tensor = prepare(&image, 8, 8).unwrap();

        // A solid-color source stays solid through any resampling filter.
        assert!((tensor[[0, 3, 3, 0]] - 1.0).abs() < 1e-3);
        assert!((tensor[[0, 3, 3, 1]] - 0.2).abs() < 1e-3);
        assert!(tensor[[0, 3, 3, 2]].abs() < 1e-3);
    }

    #[test]
    fn test_prepare_normalizes_to_rgb() {
        let rgba = image::RgbaImage::from_pixel(10, 10, image::Rgba([200, 100, 50, 255]));
        let tensor = prepare(&DynamicImage::ImageRgba8(rgba), 5, 5).unwrap();

        assert_eq!(tensor.shape(), &[1, 5, 5, 3]);
        assert!((tensor[[0, 2, 2, 0]] - 200.0 / 255.0).abs() < 1e-2);
        assert!((tensor[[0, 2, 2, 2]] - 50.0 / 255.0).abs() < 1e-2);
    }

    #[test]
    fn test_prepare_zero_target_size_fails() {
        let image = solid_image(10, 10, [1, 2, 3]);
        let result = prepare(&image, 0, 200);
        assert!(matches!(result, Err(Error::InvalidImage { .. })));
    }
}
