//! Pixel-level blur engine for RGBA buffers.
//!
//! The engine itself lives in [`blurring`]: three stateless filters
//! (Gaussian, Box, Motion) behind a single [`process`] entry point.
//! [`imaging`] and [`pipeline`] wire it to image files, and [`advice`]
//! defines the contract for external blur recommendations.

pub mod advice;
pub mod blurring;
pub mod imaging;
pub mod pipeline;
pub mod shared;

pub use blurring::domain::blur_algorithm::BlurAlgorithm;
pub use blurring::domain::blur_error::BlurError;
pub use blurring::engine::{process, process_buffer};
pub use shared::pixel_buffer::PixelBuffer;
