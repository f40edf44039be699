use std::path::Path;

use crate::shared::pixel_buffer::PixelBuffer;

/// Decodes an image source into an RGBA [`PixelBuffer`].
///
/// Format handling stays in implementations; the engine only ever sees
/// raw RGBA pixels.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<PixelBuffer, Box<dyn std::error::Error>>;
}
