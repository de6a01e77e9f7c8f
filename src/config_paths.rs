//! Where the panel keeps its files
//!
//! Everything lives in one per-user directory (`~/.config/sidepanel/` on
//! Unix and macOS, `%APPDATA%\sidepanel\` on Windows):
//!
//! ```text
//! config.yaml        PanelConfig
//! session.json       width and section from the last run
//! themes/<id>.yaml   user themes, shadowing the built-in ones
//! logs/              daily-rotated log files
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "sidepanel";

/// Base directory, honouring `XDG_CONFIG_HOME` outside Windows
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn session_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("session.json"))
}

pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// User theme file for a theme id, whether or not it exists
pub fn user_theme_file(id: &str) -> Option<PathBuf> {
    themes_dir().map(|dir| dir.join(format!("{}.yaml", id)))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the directory a file is about to be written to
pub fn ensure_parent_dir(file: &Path) -> Result<(), String> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e)),
        _ => Ok(()),
    }
}

/// Create the logs directory and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_theme_file_uses_id() {
        let path = user_theme_file("panel-light").unwrap();
        assert!(path.ends_with("themes/panel-light.yaml"));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a").join("b").join("session.json");

        ensure_parent_dir(&file).unwrap();
        assert!(file.parent().unwrap().is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("config.yaml")).is_ok());
    }
}
