use std::path::Path;

use image::imageops::FilterType;

use crate::core::transform::FileTransform;
use crate::models::RezipError;

/// Default target size, matching the classic "scale everything to 640x480"
/// batch job this tool grew out of.
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Image rescaling transformation
///
/// Resizes every supported image to exactly `width` x `height`, overwriting
/// it in place. Aspect ratio is not preserved. Files without a supported
/// image extension are reported as unsupported; a file with a supported
/// extension that fails to decode is a hard transformation error.
pub struct ImageScale {
    width: u32,
    height: u32,
}

impl ImageScale {
    /// Create a new image scaling transform targeting `width` x `height`
    pub fn new(width: u32, height: u32) -> Result<Self, RezipError> {
        if width == 0 || height == 0 {
            return Err(RezipError::InvalidConfig(format!(
                "Target dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        Ok(Self { width, height })
    }

    fn is_supported_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let lower = e.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&lower.as_str())
            })
            .unwrap_or(false)
    }
}

impl FileTransform for ImageScale {
    fn name(&self) -> &'static str {
        "image-scale"
    }

    fn apply(&self, path: &Path) -> Result<(), RezipError> {
        if !Self::is_supported_extension(path) {
            return Err(RezipError::UnsupportedFile(path.to_path_buf()));
        }

        let img = image::open(path).map_err(|e| {
            RezipError::Transform(format!("Failed to decode image {}: {}", path.display(), e))
        })?;

        let scaled = img.resize_exact(self.width, self.height, FilterType::Lanczos3);

        scaled.save(path).map_err(|e| {
            RezipError::Transform(format!("Failed to save image {}: {}", path.display(), e))
        })?;

        log::debug!(
            "image-scale resized {} to {}x{}",
            path.display(),
            self.width,
            self.height
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb};
    use std::fs;
    use tempfile::TempDir;

    fn write_test_png(path: &Path, width: u32, height: u32) {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgb([120, 60, 200]));
        DynamicImage::ImageRgb8(img).save(path).unwrap();
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            ImageScale::new(0, 480),
            Err(RezipError::InvalidConfig(_))
        ));
        assert!(matches!(
            ImageScale::new(640, 0),
            Err(RezipError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_scales_to_exact_dimensions() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("photo.png");
        write_test_png(&file, 32, 16);

        let transform = ImageScale::new(8, 10).unwrap();
        transform.apply(&file).unwrap();

        let scaled = image::open(&file).unwrap();
        assert_eq!(scaled.dimensions(), (8, 10));
    }

    #[test]
    fn test_upscales_as_well() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("tiny.png");
        write_test_png(&file, 2, 2);

        let transform = ImageScale::new(64, 48).unwrap();
        transform.apply(&file).unwrap();

        let scaled = image::open(&file).unwrap();
        assert_eq!(scaled.dimensions(), (64, 48));
    }

    #[test]
    fn test_case_insensitive_extension() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("photo.PNG");
        write_test_png(&file, 4, 4);

        let transform = ImageScale::new(6, 6).unwrap();
        transform.apply(&file).unwrap();

        let scaled = image::open(&file).unwrap();
        assert_eq!(scaled.dimensions(), (6, 6));
    }

    #[test]
    fn test_non_image_extension_is_unsupported() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("readme.txt");
        fs::write(&file, "not an image").unwrap();

        let transform = ImageScale::new(640, 480).unwrap();
        let result = transform.apply(&file);

        assert!(matches!(result, Err(RezipError::UnsupportedFile(_))));

        // Unsupported files must not be modified
        let after = fs::read_to_string(&file).unwrap();
        assert_eq!(after, "not an image");
    }

    #[test]
    fn test_corrupt_image_is_transform_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("broken.png");
        fs::write(&file, b"definitely not png bytes").unwrap();

        let transform = ImageScale::new(640, 480).unwrap();
        let result = transform.apply(&file);

        assert!(matches!(result, Err(RezipError::Transform(_))));
    }
}
