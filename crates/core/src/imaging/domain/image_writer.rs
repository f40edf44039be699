use std::path::Path;

use crate::shared::pixel_buffer::PixelBuffer;

/// Encodes an RGBA [`PixelBuffer`] to an image file.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), Box<dyn std::error::Error>>;
}
