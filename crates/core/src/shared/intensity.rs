use thiserror::Error;

use crate::shared::constants::{MAX_INTENSITY, MIN_INTENSITY};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("intensity must be between 1 and 30, got {0}")]
pub struct IntensityError(pub i64);

/// Caller-side check of the recommended intensity domain.
///
/// The engine accepts any integer (values below 1 are a no-op copy); this is
/// for surfaces that take user input and must reject out-of-range values
/// before invoking it.
pub fn validate_intensity(value: i64) -> Result<u32, IntensityError> {
    if (MIN_INTENSITY as i64..=MAX_INTENSITY as i64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(IntensityError(value))
    }
}
