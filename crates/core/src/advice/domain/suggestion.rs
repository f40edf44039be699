use serde::{Deserialize, Serialize};

use crate::blurring::domain::blur_algorithm::BlurAlgorithm;
use crate::shared::constants::{DEFAULT_ALGORITHM, DEFAULT_INTENSITY};

pub const FALLBACK_REASONING: &str =
    "Unable to reach the advisor. Defaulting to standard Gaussian blur.";

/// A recommended blur setting produced outside the engine.
///
/// `reasoning` is free text for display only and is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "blurType")]
    pub algorithm: BlurAlgorithm,
    pub intensity: u32,
    pub reasoning: String,
}

impl Suggestion {
    /// The fixed answer returned whenever an advisor cannot produce one.
    pub fn fallback() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM,
            intensity: DEFAULT_INTENSITY,
            reasoning: FALLBACK_REASONING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_gaussian_five() {
        let s = Suggestion::fallback();
        assert_eq!(s.algorithm, BlurAlgorithm::Gaussian);
        assert_eq!(s.intensity, 5);
        assert!(!s.reasoning.is_empty());
    }

    #[test]
    fn test_serializes_with_blur_type_key() {
        let json = serde_json::to_value(Suggestion::fallback()).unwrap();
        assert_eq!(json["blurType"], "gaussian");
        assert_eq!(json["intensity"], 5);
    }
}
