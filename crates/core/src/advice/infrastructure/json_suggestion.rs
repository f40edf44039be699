use serde::Deserialize;

use crate::advice::domain::blur_advisor::AdviceError;
use crate::advice::domain::suggestion::Suggestion;
use crate::blurring::domain::blur_algorithm::BlurAlgorithm;
use crate::shared::intensity::validate_intensity;

/// Wire shape of an advisor reply. Intensity arrives as a JSON number and
/// is validated separately so fractional or out-of-range values are
/// reported rather than silently truncated.
#[derive(Deserialize)]
struct RawSuggestion {
    #[serde(rename = "blurType")]
    blur_type: String,
    intensity: f64,
    reasoning: String,
}

/// Parses `{"blurType": ..., "intensity": ..., "reasoning": ...}`.
///
/// `blurType` may be a short name (`"box"`) or a display label
/// (`"Box Blur"`). Intensity must be an integer in [1, 30].
pub fn parse_suggestion(json: &str) -> Result<Suggestion, AdviceError> {
    let raw: RawSuggestion = serde_json::from_str(json.trim())?;

    let algorithm: BlurAlgorithm = raw
        .blur_type
        .parse()
        .map_err(|e| AdviceError::InvalidResponse(format!("{e}")))?;

    if raw.intensity.fract() != 0.0 || !raw.intensity.is_finite() {
        return Err(AdviceError::InvalidResponse(format!(
            "intensity must be an integer, got {}",
            raw.intensity
        )));
    }
    let intensity = validate_intensity(raw.intensity as i64)
        .map_err(|e| AdviceError::InvalidResponse(e.to_string()))?;

    Ok(Suggestion {
        algorithm,
        intensity,
        reasoning: raw.reasoning,
    })
}

/// Prompt text for a hosted model that answers in the JSON shape
/// [`parse_suggestion`] accepts.
pub fn build_prompt(goal: &str) -> String {
    format!(
        "User requirement for image blurring: \"{goal}\".\n\
         Analyze the request and suggest the best blur algorithm (Gaussian, Motion, or Box) \
         and an intensity level (1-30).\n\
         \n\
         Guidelines:\n\
         - Gaussian: Good for privacy, smoothing, general defocus.\n\
         - Motion: Good for artistic movement, speed effects.\n\
         - Box: Good for retro/pixelated aesthetic or heavy obfuscation.\n\
         \n\
         Respond with JSON: {{\"blurType\": string, \"intensity\": number, \"reasoning\": string}}."
    )
}
