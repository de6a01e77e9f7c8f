//! Errors raised while loading section units

use thiserror::Error;

use super::registry::UnitKind;
use super::section::SectionKey;

/// A content or fallback unit failed to load.
///
/// The panel never recovers from this itself; it is handed to the
/// [`ErrorBoundary`](super::boundary::ErrorBoundary) above it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitLoadError {
    /// The loader returned an error
    #[error("failed to load {kind} unit for section '{key}': {message}")]
    Module {
        key: SectionKey,
        kind: UnitKind,
        message: String,
    },

    /// The loader panicked
    #[error("{kind} unit loader for section '{key}' panicked")]
    Panicked { key: SectionKey, kind: UnitKind },
}

impl UnitLoadError {
    /// Section whose unit failed
    pub fn key(&self) -> SectionKey {
        match self {
            UnitLoadError::Module { key, .. } | UnitLoadError::Panicked { key, .. } => *key,
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            UnitLoadError::Module { kind, .. } | UnitLoadError::Panicked { kind, .. } => *kind,
        }
    }
}
