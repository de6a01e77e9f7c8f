//! Section keys
//!
//! A section key selects which content unit the side panel shows. The set is
//! closed and known at build time; the active key is owned by the navigation
//! layer and only read by the panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a side panel section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    #[default]
    Explorer,
    Search,
    BuildDeploy,
    Test,
    Tutorials,
}

impl SectionKey {
    /// All section keys in sidebar order
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Explorer,
        SectionKey::Search,
        SectionKey::BuildDeploy,
        SectionKey::Test,
        SectionKey::Tutorials,
    ];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKey::Explorer => "Explorer",
            SectionKey::Search => "Search",
            SectionKey::BuildDeploy => "Build & Deploy",
            SectionKey::Test => "Test",
            SectionKey::Tutorials => "Tutorials",
        }
    }

    /// Title shown in the panel header (upper-cased display name)
    pub fn title(&self) -> String {
        self.display_name().to_uppercase()
    }

    /// Stable identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            SectionKey::Explorer => "explorer",
            SectionKey::Search => "search",
            SectionKey::BuildDeploy => "build-deploy",
            SectionKey::Test => "test",
            SectionKey::Tutorials => "tutorials",
        }
    }

    /// Whether navigation may select this section.
    ///
    /// Search is part of the key set but currently has no sidebar entry.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SectionKey::Search)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        SectionKey::ALL
            .into_iter()
            .find(|key| key.id() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = SectionKey::ALL.iter().map(|k| k.id()).collect();
                format!("unknown section '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_upper_case() {
        assert_eq!(SectionKey::Explorer.title(), "EXPLORER");
        assert_eq!(SectionKey::BuildDeploy.title(), "BUILD & DEPLOY");
    }

    #[test]
    fn test_from_str_accepts_ids_and_variants() {
        assert_eq!("test".parse::<SectionKey>(), Ok(SectionKey::Test));
        assert_eq!("Build_Deploy".parse::<SectionKey>(), Ok(SectionKey::BuildDeploy));
        assert_eq!("build deploy".parse::<SectionKey>(), Ok(SectionKey::BuildDeploy));
        assert!("terminal".parse::<SectionKey>().is_err());
    }

    #[test]
    fn test_search_is_disabled() {
        assert!(!SectionKey::Search.is_enabled());
        assert!(SectionKey::ALL
            .iter()
            .filter(|k| **k != SectionKey::Search)
            .all(|k| k.is_enabled()));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let yaml = serde_yaml::to_string(&SectionKey::BuildDeploy).unwrap();
        assert_eq!(yaml.trim(), "build-deploy");
        let parsed: SectionKey = serde_yaml::from_str("tutorials").unwrap();
        assert_eq!(parsed, SectionKey::Tutorials);
    }
}
