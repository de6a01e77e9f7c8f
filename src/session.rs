//! Session state - panel width and section restored across runs
//!
//! Stored as JSON in `~/.config/sidepanel/session.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::{PanelWidth, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub width: PanelWidth,
    pub section: SectionKey,
}

impl SessionState {
    /// Load the last session, `None` if missing or unreadable
    pub fn load() -> Option<Self> {
        let path = crate::config_paths::session_file()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::session_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        crate::config_paths::ensure_parent_dir(path)?;
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize session: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write session to {}: {}", path.display(), e))?;
        tracing::debug!("Saved session to {}", path.display());
        Ok(())
    }
}
