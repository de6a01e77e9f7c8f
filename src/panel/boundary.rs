//! Error boundary above the side panel
//!
//! Catches unit load failures surfaced by the panel's composition root,
//! reports each distinct failure once, and keeps it until navigation resets
//! the boundary.

use super::error::UnitLoadError;

#[derive(Debug, Default)]
pub struct ErrorBoundary {
    caught: Option<UnitLoadError>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass `Ok` values through; capture errors and yield `None`
    pub fn catch<T>(&mut self, result: Result<T, UnitLoadError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                if self.caught.as_ref() != Some(&err) {
                    tracing::error!("Side panel failed: {}", err);
                    self.caught = Some(err);
                }
                None
            }
        }
    }

    pub fn caught(&self) -> Option<&UnitLoadError> {
        self.caught.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.caught.is_some()
    }

    pub fn reset(&mut self) {
        self.caught = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{SectionKey, UnitKind};

    fn failure() -> UnitLoadError {
        UnitLoadError::Module {
            key: SectionKey::Test,
            kind: UnitKind::Content,
            message: "timeout".to_string(),
        }
    }

    #[test]
    fn test_ok_passes_through() {
        let mut boundary = ErrorBoundary::new();
        assert_eq!(boundary.catch::<u32>(Ok(3)), Some(3));
        assert!(!boundary.has_error());
    }

    #[test]
    fn test_error_is_captured_until_reset() {
        let mut boundary = ErrorBoundary::new();
        assert_eq!(boundary.catch::<u32>(Err(failure())), None);
        assert_eq!(boundary.caught(), Some(&failure()));

        // Later successes do not clear it on their own
        boundary.catch::<u32>(Ok(1));
        assert!(boundary.has_error());

        boundary.reset();
        assert!(!boundary.has_error());
    }
}
