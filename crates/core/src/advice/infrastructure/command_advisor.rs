use std::path::PathBuf;
use std::process::Command;

use crate::advice::domain::blur_advisor::{AdviceError, BlurAdvisor};
use crate::advice::domain::suggestion::Suggestion;

use super::json_suggestion::{build_prompt, parse_suggestion};

/// Delegates to an external program that prints a JSON suggestion.
///
/// The program receives any configured arguments followed by the prompt
/// from [`build_prompt`], which embeds the goal text and the expected reply
/// shape. It must write `{"blurType", "intensity", "reasoning"}` to stdout.
/// Model access, credentials and networking all live in that program.
pub struct CommandAdvisor {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandAdvisor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl BlurAdvisor for CommandAdvisor {
    fn suggest(&self, goal: &str) -> Result<Suggestion, AdviceError> {
        log::debug!("Running advisor {}", self.program.display());
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(build_prompt(goal))
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AdviceError::Unavailable(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_suggestion(&stdout)
    }
}
