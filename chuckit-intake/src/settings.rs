use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File name of the settings document under the storage root.
const SETTINGS_FILE: &str = "intake_settings.json";

/// How long the host keeps the acknowledgment toast up before dismissing.
const DEFAULT_DISMISS_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSettings {
    /// Label stamped into every record as `source_app`. Hosts that know
    /// which surface invoked them set something more specific.
    pub source_app: String,
    /// Fixed delay before the host dismisses its share UI. The toast shows
    /// success regardless of persistence outcome.
    pub dismiss_delay_ms: u64,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            source_app: "unknown".to_string(),
            dismiss_delay_ms: DEFAULT_DISMISS_DELAY_MS,
        }
    }
}

fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

pub fn load_settings(root: &Path) -> Result<IntakeSettings> {
    let path = settings_path(root);

    if !path.exists() {
        return Ok(IntakeSettings::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let settings: IntakeSettings = serde_json::from_str(&content)?;
    Ok(settings)
}

pub fn save_settings(root: &Path, settings: &IntakeSettings) -> Result<()> {
    std::fs::create_dir_all(root)?;
    let path = settings_path(root);
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, content)?;
    Ok(())
}
