//! Panel theming
//!
//! Colors are YAML-defined, with built-in themes embedded at compile time and
//! user themes read from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/sidepanel/themes/{id}.yaml`
//! 2. Embedded: built-in themes compiled into the binary

use std::path::Path;

use serde::Deserialize;

pub const PANEL_DARK_YAML: &str = include_str!("../themes/panel-dark.yaml");
pub const PANEL_LIGHT_YAML: &str = include_str!("../themes/panel-light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "panel-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "panel-dark",
        yaml: PANEL_DARK_YAML,
    },
    BuiltinTheme {
        id: "panel-light",
        yaml: PANEL_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<PanelTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    PanelTheme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<PanelTheme, String> {
    if let Some(user_path) = crate::config_paths::user_theme_file(id) {
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    PanelTheme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const fn with_alpha(&self, a: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA"
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|c| u8::from_str_radix(c, 16).map_err(|e| e.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme file as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub panel: PanelThemeData,
}

/// Panel colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct PanelThemeData {
    pub background: String,
    pub editor_background: String,
    pub border: String,
    pub title: TitleThemeData,
    pub scrollbar_thumb: String,
    pub resize_handle: String,
    #[serde(default)]
    pub resize_handle_active: Option<String>,
    pub skeleton: String,
    #[serde(default)]
    pub skeleton_highlight: Option<String>,
    pub accent: String,
    pub error: String,
    pub status_bar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleThemeData {
    pub background: String,
    pub foreground: String,
}

/// Resolved panel theme
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTheme {
    pub name: String,
    pub background: Color,
    pub editor_background: Color,
    pub border: Color,
    pub title_background: Color,
    pub title_foreground: Color,
    pub scrollbar_thumb: Color,
    pub resize_handle: Color,
    pub resize_handle_active: Color,
    pub skeleton: Color,
    pub skeleton_highlight: Color,
    pub accent: Color,
    pub error: Color,
    pub status_bar: Color,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self::from_yaml(PANEL_DARK_YAML).unwrap_or_else(|_| Self::fallback_dark())
    }
}

impl PanelTheme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Invalid theme YAML: {}", e))?;
        Self::from_data(data)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        let p = data.panel;
        let resize_handle = Color::from_hex(&p.resize_handle)?;
        let skeleton = Color::from_hex(&p.skeleton)?;
        let accent = Color::from_hex(&p.accent)?;

        Ok(Self {
            name: data.name,
            background: Color::from_hex(&p.background)?,
            editor_background: Color::from_hex(&p.editor_background)?,
            border: Color::from_hex(&p.border)?,
            title_background: Color::from_hex(&p.title.background)?,
            title_foreground: Color::from_hex(&p.title.foreground)?,
            scrollbar_thumb: Color::from_hex(&p.scrollbar_thumb)?,
            resize_handle,
            resize_handle_active: p
                .resize_handle_active
                .as_deref()
                .map(Color::from_hex)
                .transpose()?
                .unwrap_or(accent),
            skeleton,
            skeleton_highlight: p
                .skeleton_highlight
                .as_deref()
                .map(Color::from_hex)
                .transpose()?
                .unwrap_or(skeleton),
            accent,
            error: Color::from_hex(&p.error)?,
            status_bar: Color::from_hex(&p.status_bar)?,
        })
    }

    /// Hardcoded dark palette used if the embedded YAML ever fails to parse
    fn fallback_dark() -> Self {
        Self {
            name: "Fallback Dark".to_string(),
            background: Color::rgb(0x1E, 0x1F, 0x22),
            editor_background: Color::rgb(0x2B, 0x2D, 0x30),
            border: Color::rgb(0x39, 0x3B, 0x40),
            title_background: Color::rgb(0x26, 0x28, 0x2C),
            title_foreground: Color::rgb(0xBC, 0xBE, 0xC4),
            scrollbar_thumb: Color::rgb(0x4E, 0x51, 0x57),
            resize_handle: Color::rgb(0x39, 0x3B, 0x40),
            resize_handle_active: Color::rgb(0x35, 0x74, 0xF0),
            skeleton: Color::rgb(0x2F, 0x31, 0x35),
            skeleton_highlight: Color::rgb(0x3A, 0x3D, 0x42),
            accent: Color::rgb(0x35, 0x74, 0xF0),
            error: Color::rgb(0xF7, 0x54, 0x64),
            status_bar: Color::rgb(0x2B, 0x2D, 0x30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            PanelTheme::from_yaml(builtin.yaml)
                .unwrap_or_else(|e| panic!("{} failed to parse: {}", builtin.id, e));
        }
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#3574F0"), Ok(Color::rgb(0x35, 0x74, 0xF0)));
        assert_eq!(
            Color::from_hex("#3574F080"),
            Ok(Color::rgba(0x35, 0x74, 0xF0, 0x80))
        );
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_argb_packing() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb_u32(), 0xFF123456);
    }

    #[test]
    fn test_optional_colors_fall_back() {
        let yaml = PANEL_DARK_YAML
            .replace("  resize_handle_active: \"#3574F0\"\n", "")
            .replace("  skeleton_highlight: \"#3A3D42\"\n", "");
        let theme = PanelTheme::from_yaml(&yaml).unwrap();
        assert_eq!(theme.resize_handle_active, theme.accent);
        assert_eq!(theme.skeleton_highlight, theme.skeleton);
    }

    #[test]
    fn test_unknown_builtin_is_error() {
        assert!(PanelTheme::from_builtin("no-such-theme").is_err());
    }
}
