use thiserror::Error;

/// Failures the blur engine can report.
///
/// Intensity extremes never fail: filters clamp or fall back to a copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlurError {
    #[error("buffer of {actual} bytes does not match {width}x{height} RGBA (expected {expected})")]
    InvalidBufferShape {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("unsupported blur algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}
