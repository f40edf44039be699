use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::blur_error::BlurError;

/// The closed set of blur algorithms the engine dispatches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurAlgorithm {
    #[serde(alias = "Gaussian Blur", alias = "Gaussian")]
    Gaussian,
    #[serde(alias = "Box Blur", alias = "Box")]
    Box,
    #[serde(alias = "Motion Blur", alias = "Motion")]
    Motion,
}

impl BlurAlgorithm {
    pub const ALL: &[BlurAlgorithm] = &[
        BlurAlgorithm::Gaussian,
        BlurAlgorithm::Box,
        BlurAlgorithm::Motion,
    ];

    /// Lowercase identifier used on the command line and in settings files.
    pub fn name(self) -> &'static str {
        match self {
            BlurAlgorithm::Gaussian => "gaussian",
            BlurAlgorithm::Box => "box",
            BlurAlgorithm::Motion => "motion",
        }
    }
}

impl fmt::Display for BlurAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlurAlgorithm::Gaussian => write!(f, "Gaussian Blur"),
            BlurAlgorithm::Box => write!(f, "Box Blur"),
            BlurAlgorithm::Motion => write!(f, "Motion Blur"),
        }
    }
}

impl FromStr for BlurAlgorithm {
    type Err = BlurError;

    /// Accepts the short names (`gaussian`) and display labels (`Gaussian Blur`),
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let short = normalized.strip_suffix(" blur").unwrap_or(&normalized);
        match short {
            "gaussian" => Ok(BlurAlgorithm::Gaussian),
            "box" => Ok(BlurAlgorithm::Box),
            "motion" => Ok(BlurAlgorithm::Motion),
            _ => Err(BlurError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
