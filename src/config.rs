//! Panel configuration persistence
//!
//! Stores user preferences in `~/.config/sidepanel/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::{PanelWidth, SectionKey};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Selected theme id (e.g., "panel-dark", "panel-light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Width the panel starts with when no session is restored
    #[serde(default = "default_width")]
    pub width: PanelWidth,

    /// Section shown on startup
    #[serde(default)]
    pub section: SectionKey,

    /// Simulated time for the router to resolve its initial state
    #[serde(default = "default_router_delay_ms")]
    pub router_delay_ms: u64,

    /// Simulated latency of every unit load
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,

    /// Restore width and section from the previous session
    #[serde(default = "default_restore_session")]
    pub restore_session: bool,
}

fn default_theme() -> String {
    "panel-dark".to_string()
}

fn default_width() -> PanelWidth {
    PanelWidth::DEFAULT
}

fn default_router_delay_ms() -> u64 {
    400
}

fn default_load_delay_ms() -> u64 {
    250
}

fn default_restore_session() -> bool {
    true
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            width: default_width(),
            section: SectionKey::default(),
            router_delay_ms: default_router_delay_ms(),
            load_delay_ms: default_load_delay_ms(),
            restore_session: default_restore_session(),
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        crate::config_paths::ensure_parent_dir(path)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
