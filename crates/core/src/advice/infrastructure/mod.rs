pub mod command_advisor;
pub mod fallback_advisor;
pub mod json_suggestion;
