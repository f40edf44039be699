use crate::blurring::domain::blur_algorithm::BlurAlgorithm;

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Recommended intensity domain for callers.
pub const MIN_INTENSITY: u32 = 1;
pub const MAX_INTENSITY: u32 = 30;

pub const DEFAULT_INTENSITY: u32 = 5;
pub const DEFAULT_ALGORITHM: BlurAlgorithm = BlurAlgorithm::Gaussian;

/// Upper bound on the motion look-ahead, independent of intensity.
pub const MOTION_MAX_RANGE: usize = 50;

/// Longest side used when decoding images for a quick preview.
pub const PREVIEW_MAX_DIMENSION: u32 = 1200;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
