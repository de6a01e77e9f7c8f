//! Section registry - lazily loaded units keyed by section
//!
//! Each section may register a content unit and a fallback (skeleton) unit.
//! Units are produced by a [`UnitLoader`] the first time they are requested and
//! cached for the life of the process. Requesting a slot that is already
//! loading, loaded or failed does nothing, so a load never runs twice.
//!
//! Content units load on a worker thread. Skeletons are small and load on the
//! UI thread the first time they are needed, see [`SectionRegistry::load_fallback_now`].

use std::collections::HashMap;
use std::fmt;
use std::panic;
use std::sync::Arc;

use super::error::UnitLoadError;
use super::section::SectionKey;
use crate::sections::{self, SectionView, Spinner};

/// Which of a section's two units a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Content,
    Fallback,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Content => f.write_str("content"),
            UnitKind::Fallback => f.write_str("fallback"),
        }
    }
}

/// Produces a unit
pub type UnitLoader = fn() -> Result<Arc<dyn SectionView>, String>;

/// Load state of one slot
#[derive(Debug, Clone)]
pub enum UnitStatus {
    /// Registered, never requested
    Idle,
    /// Requested, loader has not reported back yet
    Loading,
    Loaded(Arc<dyn SectionView>),
    Failed(UnitLoadError),
}

impl UnitStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, UnitStatus::Loaded(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, UnitStatus::Idle | UnitStatus::Loading)
    }
}

#[derive(Debug)]
struct UnitSlot {
    loader: UnitLoader,
    status: UnitStatus,
    loads_started: u32,
}

impl UnitSlot {
    fn new(loader: UnitLoader) -> Self {
        Self {
            loader,
            status: UnitStatus::Idle,
            loads_started: 0,
        }
    }
}

/// A load the runtime has to perform
#[derive(Debug, Clone, Copy)]
pub struct LoadRequest {
    pub key: SectionKey,
    pub kind: UnitKind,
    loader: UnitLoader,
}

impl LoadRequest {
    /// Run the loader, turning errors and panics into [`UnitLoadError`]
    pub fn run(self) -> Result<Arc<dyn SectionView>, UnitLoadError> {
        match panic::catch_unwind(self.loader) {
            Ok(Ok(unit)) => Ok(unit),
            Ok(Err(message)) => Err(UnitLoadError::Module {
                key: self.key,
                kind: self.kind,
                message,
            }),
            Err(_) => Err(UnitLoadError::Panicked {
                key: self.key,
                kind: self.kind,
            }),
        }
    }
}

/// Content and fallback units for every section
#[derive(Debug)]
pub struct SectionRegistry {
    content: HashMap<SectionKey, UnitSlot>,
    fallback: HashMap<SectionKey, UnitSlot>,
    spinner: Arc<dyn SectionView>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRegistry {
    /// Empty registry; every section falls back to the generic spinner
    pub fn new() -> Self {
        Self {
            content: HashMap::new(),
            fallback: HashMap::new(),
            spinner: Arc::new(Spinner),
        }
    }

    /// Registry with the built-in sections.
    ///
    /// Search has no unit and renders nothing.
    pub fn with_builtin_sections() -> Self {
        let mut registry = Self::new();
        registry.register_content(SectionKey::Explorer, sections::load_explorer);
        registry.register_content(SectionKey::BuildDeploy, sections::load_build_deploy);
        registry.register_content(SectionKey::Test, sections::load_test);
        registry.register_fallback(SectionKey::Test, sections::load_test_skeleton);
        registry.register_content(SectionKey::Tutorials, sections::load_tutorials);
        registry.register_fallback(SectionKey::Tutorials, sections::load_tutorials_skeleton);
        registry
    }

    pub fn register_content(&mut self, key: SectionKey, loader: UnitLoader) {
        self.content.insert(key, UnitSlot::new(loader));
    }

    pub fn register_fallback(&mut self, key: SectionKey, loader: UnitLoader) {
        self.fallback.insert(key, UnitSlot::new(loader));
    }

    /// Content slot status for `key`, `None` if the section has no content
    pub fn resolve_content(&self, key: SectionKey) -> Option<&UnitStatus> {
        self.content.get(&key).map(|slot| &slot.status)
    }

    /// Placeholder to show for `key`.
    ///
    /// The section's own skeleton once it has loaded, the generic spinner
    /// when the section has none or its skeleton was never requested.
    pub fn resolve_fallback(&self, key: SectionKey) -> Result<Arc<dyn SectionView>, UnitLoadError> {
        match self.fallback.get(&key).map(|slot| &slot.status) {
            Some(UnitStatus::Loaded(unit)) => Ok(Arc::clone(unit)),
            Some(UnitStatus::Failed(err)) => Err(err.clone()),
            Some(UnitStatus::Idle | UnitStatus::Loading) | None => Ok(Arc::clone(&self.spinner)),
        }
    }

    /// Shared spinner used when a section has no skeleton
    pub fn generic_fallback(&self) -> Arc<dyn SectionView> {
        Arc::clone(&self.spinner)
    }

    pub fn has_specific_fallback(&self, key: SectionKey) -> bool {
        self.fallback.contains_key(&key)
    }

    /// Load the section's skeleton on the calling thread.
    ///
    /// Does nothing if the section has no skeleton or it was requested
    /// before; returns whether a load ran.
    pub fn load_fallback_now(&mut self, key: SectionKey) -> bool {
        let Some(request) = self.request_fallback(key) else {
            return false;
        };
        let result = request.run();
        self.complete(key, UnitKind::Fallback, result)
    }

    pub fn status(&self, key: SectionKey, kind: UnitKind) -> Option<&UnitStatus> {
        self.slots(kind).get(&key).map(|slot| &slot.status)
    }

    /// Number of times the loader for this slot was handed out
    pub fn loads_started(&self, key: SectionKey, kind: UnitKind) -> u32 {
        self.slots(kind)
            .get(&key)
            .map_or(0, |slot| slot.loads_started)
    }

    pub fn request_content(&mut self, key: SectionKey) -> Option<LoadRequest> {
        self.request(key, UnitKind::Content)
    }

    pub fn request_fallback(&mut self, key: SectionKey) -> Option<LoadRequest> {
        self.request(key, UnitKind::Fallback)
    }

    /// Mark an idle slot as loading and hand out its loader.
    ///
    /// Returns `None` for unregistered slots and for slots that were requested before.
    pub fn request(&mut self, key: SectionKey, kind: UnitKind) -> Option<LoadRequest> {
        let slot = self.slots_mut(kind).get_mut(&key)?;
        if !matches!(slot.status, UnitStatus::Idle) {
            return None;
        }

        slot.status = UnitStatus::Loading;
        slot.loads_started += 1;
        tracing::debug!("Loading {} unit for section '{}'", kind, key);

        Some(LoadRequest {
            key,
            kind,
            loader: slot.loader,
        })
    }

    /// Record the outcome of a load.
    ///
    /// Only a slot that is currently loading accepts a result; returns whether
    /// the result was stored.
    pub fn complete(
        &mut self,
        key: SectionKey,
        kind: UnitKind,
        result: Result<Arc<dyn SectionView>, UnitLoadError>,
    ) -> bool {
        let Some(slot) = self.slots_mut(kind).get_mut(&key) else {
            tracing::warn!("Load result for unregistered {} unit '{}' ignored", kind, key);
            return false;
        };

        if !matches!(slot.status, UnitStatus::Loading) {
            tracing::warn!(
                "Unexpected load result for {} unit '{}' (status {:?}), ignored",
                kind,
                key,
                slot.status
            );
            return false;
        }

        slot.status = match result {
            Ok(unit) => {
                tracing::debug!("Loaded {} unit '{}' for section '{}'", kind, unit.name(), key);
                UnitStatus::Loaded(unit)
            }
            Err(err) => {
                tracing::warn!("{}", err);
                UnitStatus::Failed(err)
            }
        };
        true
    }

    fn slots(&self, kind: UnitKind) -> &HashMap<SectionKey, UnitSlot> {
        match kind {
            UnitKind::Content => &self.content,
            UnitKind::Fallback => &self.fallback,
        }
    }

    fn slots_mut(&mut self, kind: UnitKind) -> &mut HashMap<SectionKey, UnitSlot> {
        match kind {
            UnitKind::Content => &mut self.content,
            UnitKind::Fallback => &mut self.fallback,
        }
    }
}
