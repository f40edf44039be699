pub mod image_reader;
pub mod image_writer;

use std::path::Path;

use crate::shared::constants::IMAGE_EXTENSIONS;

/// True if `path` has one of the supported image extensions.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
