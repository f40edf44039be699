use std::path::Path;

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::pixel_buffer::PixelBuffer;

/// Writes a buffer to an image file using the `image` crate.
///
/// The format follows the path's extension. Formats without an alpha
/// channel (JPEG) receive the RGB channels only.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn drops_alpha(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "jpg" | "jpeg" | "bmp"))
        .unwrap_or(false)
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
            .ok_or("Failed to create image from buffer data")?;

        if drops_alpha(path) {
            image::DynamicImage::ImageRgba8(img).to_rgb8().save(path)?;
        } else {
            img.save(path)?;
        }
        Ok(())
    }
}
