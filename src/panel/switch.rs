//! Content switch - decides what the panel body shows
//!
//! The decision is a pure function of the active section, the router flag and
//! the registry, re-evaluated whenever any of them changes:
//!
//! - router still resolving → `RouterPending`, show the section's fallback
//! - content not loaded yet → `RenderFallback`, show the section's fallback
//! - otherwise → `RenderContent`, show the content (or nothing if unmapped)
//!
//! Only the active section's slots are ever read, so a load that finishes for
//! a section the user already left can never appear on screen.

use std::sync::Arc;

use super::error::UnitLoadError;
use super::registry::{LoadRequest, SectionRegistry, UnitStatus};
use super::section::SectionKey;
use crate::sections::SectionView;

/// Which branch the switch took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    RouterPending,
    RenderFallback,
    RenderContent,
}

/// What ends up mounted in the panel body
#[derive(Debug, Clone)]
pub enum Mounted {
    Content(Arc<dyn SectionView>),
    Fallback(Arc<dyn SectionView>),
    /// Section without content
    Empty,
}

impl Mounted {
    /// Name of the mounted unit, `None` when empty
    pub fn unit_name(&self) -> Option<&'static str> {
        match self {
            Mounted::Content(unit) | Mounted::Fallback(unit) => Some(unit.name()),
            Mounted::Empty => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Mounted::Fallback(_))
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Mounted::Content(_))
    }
}

/// Inputs the decision depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchInputs {
    pub key: SectionKey,
    pub router_loading: bool,
}

/// Result of one evaluation
#[derive(Debug, Clone)]
pub struct RenderDecision {
    pub key: SectionKey,
    pub state: SwitchState,
    pub mounted: Mounted,
}

/// Decide what to show for `inputs`.
///
/// A failed unit is returned as an error for the enclosing error boundary.
pub fn decide(
    inputs: SwitchInputs,
    registry: &SectionRegistry,
) -> Result<RenderDecision, UnitLoadError> {
    let key = inputs.key;
    let fallback = |state| -> Result<RenderDecision, UnitLoadError> {
        Ok(RenderDecision {
            key,
            state,
            mounted: Mounted::Fallback(registry.resolve_fallback(key)?),
        })
    };

    if inputs.router_loading {
        return fallback(SwitchState::RouterPending);
    }

    match registry.resolve_content(key) {
        None => Ok(RenderDecision {
            key,
            state: SwitchState::RenderContent,
            mounted: Mounted::Empty,
        }),
        Some(UnitStatus::Loaded(unit)) => Ok(RenderDecision {
            key,
            state: SwitchState::RenderContent,
            mounted: Mounted::Content(Arc::clone(unit)),
        }),
        Some(UnitStatus::Failed(err)) => Err(err.clone()),
        Some(UnitStatus::Idle | UnitStatus::Loading) => fallback(SwitchState::RenderFallback),
    }
}

/// Start the loads the current inputs need.
///
/// Content is only requested once the router has resolved. While a fallback
/// is on screen the section's own skeleton is loaded in place, so it is
/// mounted on the same frame; only content loads are returned for the
/// runtime. Already requested slots are skipped by the registry.
pub fn request_loads(inputs: SwitchInputs, registry: &mut SectionRegistry) -> Vec<LoadRequest> {
    let key = inputs.key;

    let content_ready = !inputs.router_loading
        && !registry
            .resolve_content(key)
            .is_some_and(UnitStatus::is_pending);
    if !content_ready && registry.has_specific_fallback(key) {
        registry.load_fallback_now(key);
    }

    if inputs.router_loading {
        Vec::new()
    } else {
        registry.request_content(key).into_iter().collect()
    }
}

/// Stateful wrapper around [`decide`] that logs transitions
#[derive(Debug, Default)]
pub struct ContentSwitch {
    last: Option<(SectionKey, SwitchState)>,
}

impl ContentSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(
        &mut self,
        inputs: SwitchInputs,
        registry: &SectionRegistry,
    ) -> Result<RenderDecision, UnitLoadError> {
        let decision = decide(inputs, registry)?;
        let current = (decision.key, decision.state);
        if self.last != Some(current) {
            tracing::debug!(
                "Content switch: {:?} -> section '{}' {:?} ({})",
                self.last.map(|(_, state)| state),
                decision.key,
                decision.state,
                decision.mounted.unit_name().unwrap_or("nothing")
            );
            self.last = Some(current);
        }
        Ok(decision)
    }

    /// Last state reported by [`ContentSwitch::evaluate`]
    pub fn last_state(&self) -> Option<SwitchState> {
        self.last.map(|(_, state)| state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::registry::UnitKind;

    fn inputs(key: SectionKey, router_loading: bool) -> SwitchInputs {
        SwitchInputs {
            key,
            router_loading,
        }
    }

    fn finish(registry: &mut SectionRegistry, request: LoadRequest) {
        let result = request.run();
        registry.complete(request.key, request.kind, result);
    }

    #[test]
    fn test_router_pending_always_falls_back() {
        let mut registry = SectionRegistry::with_builtin_sections();
        let request = registry.request_content(SectionKey::Explorer).unwrap();
        finish(&mut registry, request);

        for key in SectionKey::ALL {
            let decision = decide(inputs(key, true), &registry).unwrap();
            assert_eq!(decision.state, SwitchState::RouterPending);
            assert!(decision.mounted.is_fallback(), "{key} mounted content");
        }
    }

    #[test]
    fn test_loading_content_falls_back() {
        let mut registry = SectionRegistry::with_builtin_sections();
        let requests = request_loads(inputs(SectionKey::Explorer, false), &mut registry);
        assert_eq!(requests.len(), 1);

        let decision = decide(inputs(SectionKey::Explorer, false), &registry).unwrap();
        assert_eq!(decision.state, SwitchState::RenderFallback);
        assert_eq!(decision.mounted.unit_name(), Some("spinner"));
    }

    #[test]
    fn test_loaded_content_renders() {
        let mut registry = SectionRegistry::with_builtin_sections();
        for request in request_loads(inputs(SectionKey::Explorer, false), &mut registry) {
            finish(&mut registry, request);
        }

        let decision = decide(inputs(SectionKey::Explorer, false), &registry).unwrap();
        assert_eq!(decision.state, SwitchState::RenderContent);
        assert_eq!(decision.mounted.unit_name(), Some("explorer"));
    }

    #[test]
    fn test_unmapped_section_renders_nothing() {
        let registry = SectionRegistry::with_builtin_sections();
        let decision = decide(inputs(SectionKey::Search, false), &registry).unwrap();
        assert_eq!(decision.state, SwitchState::RenderContent);
        assert!(matches!(decision.mounted, Mounted::Empty));
    }

    #[test]
    fn test_router_pending_mounts_skeleton_without_loading_content() {
        let mut registry = SectionRegistry::with_builtin_sections();
        let requests = request_loads(inputs(SectionKey::Test, true), &mut registry);

        assert!(requests.is_empty());
        assert!(matches!(
            registry.resolve_content(SectionKey::Test),
            Some(UnitStatus::Idle)
        ));
        let decision = decide(inputs(SectionKey::Test, true), &registry).unwrap();
        assert_eq!(decision.state, SwitchState::RouterPending);
        assert_eq!(decision.mounted.unit_name(), Some("test-skeleton"));
    }

    #[test]
    fn test_skeleton_is_mounted_while_content_loads() {
        let mut registry = SectionRegistry::with_builtin_sections();
        let requests = request_loads(inputs(SectionKey::Tutorials, false), &mut registry);

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, UnitKind::Content);
        let decision = decide(inputs(SectionKey::Tutorials, false), &registry).unwrap();
        assert_eq!(decision.state, SwitchState::RenderFallback);
        assert_eq!(decision.mounted.unit_name(), Some("tutorials-skeleton"));
    }

    #[test]
    fn test_loaded_content_does_not_request_fallback() {
        let mut registry = SectionRegistry::with_builtin_sections();
        let request = registry.request_content(SectionKey::Test).unwrap();
        finish(&mut registry, request);

        assert!(request_loads(inputs(SectionKey::Test, false), &mut registry).is_empty());
        assert_eq!(registry.loads_started(SectionKey::Test, UnitKind::Fallback), 0);
    }

    #[test]
    fn test_failed_content_propagates() {
        fn broken() -> Result<Arc<dyn SectionView>, String> {
            Err("network".to_string())
        }

        let mut registry = SectionRegistry::new();
        registry.register_content(SectionKey::Tutorials, broken);
        let request = registry.request_content(SectionKey::Tutorials).unwrap();
        finish(&mut registry, request);

        let err = decide(inputs(SectionKey::Tutorials, false), &registry).unwrap_err();
        assert_eq!(err.key(), SectionKey::Tutorials);
        // No retry is scheduled
        assert!(request_loads(inputs(SectionKey::Tutorials, false), &mut registry).is_empty());
    }

    #[test]
    fn test_evaluate_tracks_last_state() {
        let mut registry = SectionRegistry::with_builtin_sections();
        let mut switch = ContentSwitch::new();
        assert_eq!(switch.last_state(), None);

        switch
            .evaluate(inputs(SectionKey::Explorer, true), &registry)
            .unwrap();
        assert_eq!(switch.last_state(), Some(SwitchState::RouterPending));

        for request in request_loads(inputs(SectionKey::Explorer, false), &mut registry) {
            finish(&mut registry, request);
        }
        switch
            .evaluate(inputs(SectionKey::Explorer, false), &registry)
            .unwrap();
        assert_eq!(switch.last_state(), Some(SwitchState::RenderContent));
    }
}
