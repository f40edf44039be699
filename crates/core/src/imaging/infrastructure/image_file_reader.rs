use std::path::Path;

use image::imageops::FilterType;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::pixel_buffer::PixelBuffer;

/// Decodes image files with the `image` crate and converts them to RGBA8.
///
/// With a `max_dimension`, images whose longer side exceeds it are scaled
/// down proportionally before blurring, which keeps interactive previews
/// responsive on large photos.
pub struct ImageFileReader {
    max_dimension: Option<u32>,
}

impl ImageFileReader {
    pub fn new() -> Self {
        Self {
            max_dimension: None,
        }
    }

    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = Some(max_dimension.max(1));
        self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Target size that fits `(width, height)` within `max` on both sides,
/// preserving aspect ratio. Returns `None` if no scaling is needed.
pub fn fit_within(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width <= max && height <= max {
        return None;
    }
    let ratio = (max as f64 / width as f64).min(max as f64 / height as f64);
    let w = ((width as f64 * ratio).round() as u32).clamp(1, max);
    let h = ((height as f64 * ratio).round() as u32).clamp(1, max);
    Some((w, h))
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<PixelBuffer, Box<dyn std::error::Error>> {
        let mut img = image::open(path)?.to_rgba8();

        if let Some(max) = self.max_dimension {
            if let Some((w, h)) = fit_within(img.width(), img.height(), max) {
                log::debug!(
                    "Downscaling {}x{} to {w}x{h} for preview",
                    img.width(),
                    img.height()
                );
                img = image::imageops::resize(&img, w, h, FilterType::Triangle);
            }
        }

        let (width, height) = img.dimensions();
        Ok(PixelBuffer::new(img.into_raw(), width, height)?)
    }
}
