use crate::advice::domain::blur_advisor::{AdviceError, BlurAdvisor};
use crate::advice::domain::suggestion::Suggestion;

/// Wraps an advisor so that callers always get a usable suggestion.
///
/// Any failure of the inner advisor is logged and replaced with
/// [`Suggestion::fallback`].
pub struct FallbackAdvisor<A> {
    inner: Option<A>,
}

impl<A: BlurAdvisor> FallbackAdvisor<A> {
    pub fn new(inner: A) -> Self {
        Self { inner: Some(inner) }
    }

    /// An advisor with nothing behind it: every request yields the fallback.
    pub fn unavailable() -> Self {
        Self { inner: None }
    }

    pub fn suggest_or_fallback(&self, goal: &str) -> Suggestion {
        match self.suggest(goal) {
            Ok(suggestion) => suggestion,
            Err(e) => {
                log::warn!("Advisor failed, using fallback suggestion: {e}");
                Suggestion::fallback()
            }
        }
    }
}

impl<A: BlurAdvisor> BlurAdvisor for FallbackAdvisor<A> {
    fn suggest(&self, goal: &str) -> Result<Suggestion, AdviceError> {
        match &self.inner {
            Some(inner) => inner.suggest(goal),
            None => Err(AdviceError::Unavailable("no advisor configured".into())),
        }
    }
}
