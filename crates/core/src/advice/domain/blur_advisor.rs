use thiserror::Error;

use super::suggestion::Suggestion;

#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    #[error("failed to run advisor: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed advisor response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid advisor response: {0}")]
    InvalidResponse(String),
}

/// Domain interface for anything that turns a free-text goal into a
/// blur recommendation.
///
/// The engine never depends on this; callers ask an advisor and feed the
/// resulting algorithm and intensity into the engine themselves.
pub trait BlurAdvisor: Send + Sync {
    fn suggest(&self, goal: &str) -> Result<Suggestion, AdviceError>;
}
