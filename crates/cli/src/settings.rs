use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use blur_engine_core::pipeline::blur_settings::BlurSettings;
use blur_engine_core::shared::intensity::validate_intensity;

/// Defaults remembered between runs with `--save-defaults`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub blur: BlurSettings,
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("BlurEngine").join("settings.json"))
    }

    /// Loads saved defaults; a missing, unreadable, or out-of-range file
    /// yields `Default`.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        let loaded: Option<Self> = fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok());
        match loaded {
            Some(settings) => match validate_intensity(settings.blur.intensity as i64) {
                Ok(_) => settings,
                Err(e) => {
                    log::warn!("Ignoring saved settings at {}: {e}", path.display());
                    Self::default()
                }
            },
            None => {
                log::debug!("No usable settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("could not determine config directory")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
