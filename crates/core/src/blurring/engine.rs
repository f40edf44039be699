//! Entry point of the blur engine.
//!
//! [`process`] validates the buffer shape and hands the pixels to the
//! filter for the requested algorithm. Every call is pure: the input is
//! borrowed, a new buffer is returned, and nothing is retained between
//! calls, so the functions are safe to call from any number of threads.

use crate::blurring::domain::blur_algorithm::BlurAlgorithm;
use crate::blurring::domain::blur_error::BlurError;
use crate::blurring::infrastructure::filter_factory::filter_for;
use crate::shared::pixel_buffer::{check_shape, PixelBuffer};

/// Blurs a raw RGBA buffer of `width * height` pixels.
///
/// Fails with [`BlurError::InvalidBufferShape`] when `buffer.len()` is not
/// `width * height * 4`; no output is produced in that case. Intensities
/// below 1 return an unmodified copy.
pub fn process(
    buffer: &[u8],
    width: u32,
    height: u32,
    algorithm: BlurAlgorithm,
    intensity: i32,
) -> Result<PixelBuffer, BlurError> {
    check_shape(buffer.len(), width, height)?;
    let data = filter_for(algorithm).apply(buffer, width as usize, height as usize, intensity);
    PixelBuffer::new(data, width, height)
}

/// Same as [`process`] for an already validated [`PixelBuffer`].
pub fn process_buffer(
    buffer: &PixelBuffer,
    algorithm: BlurAlgorithm,
    intensity: i32,
) -> Result<PixelBuffer, BlurError> {
    process(buffer.data(), buffer.width(), buffer.height(), algorithm, intensity)
}
