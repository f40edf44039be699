use serde::{Deserialize, Serialize};

use crate::advice::domain::suggestion::Suggestion;
use crate::blurring::domain::blur_algorithm::BlurAlgorithm;
use crate::shared::constants::{DEFAULT_ALGORITHM, DEFAULT_INTENSITY};

/// The two parameters that drive a blur: which filter, and how strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlurSettings {
    pub algorithm: BlurAlgorithm,
    pub intensity: u32,
}

impl BlurSettings {
    pub fn new(algorithm: BlurAlgorithm, intensity: u32) -> Self {
        Self {
            algorithm,
            intensity,
        }
    }

    /// Adopts an advisor's recommendation as-is; the reasoning text is not consulted.
    pub fn from_suggestion(suggestion: &Suggestion) -> Self {
        Self::new(suggestion.algorithm, suggestion.intensity)
    }
}

impl Default for BlurSettings {
    fn default() -> Self {
        Self::new(DEFAULT_ALGORITHM, DEFAULT_INTENSITY)
    }
}
