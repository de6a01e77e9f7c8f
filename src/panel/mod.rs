//! Side panel - a resizable panel hosting one lazily loaded section
//!
//! ## Architecture
//!
//! - `SectionKey`: which section is active (owned by navigation, read here)
//! - `width`: collapse-to-zero resize policy and the drag surface
//! - `size`: height tracking against window resize events
//! - `registry`: load-once content and fallback units per section
//! - `switch`: pure decision between fallback and content
//! - `SidePanel`: composition root producing a `PanelView`
//! - `ErrorBoundary`: catches unit load failures above the panel
//!
//! ## Integration
//!
//! - Width is lifted into `model::PanelLayout`, which implements `WidthStore`
//! - Height anchors come from `model::HostWindow`
//! - Loads run through `Cmd::LoadUnit` and report back as `SectionMsg::UnitLoaded`

mod boundary;
mod error;
pub mod registry;
mod section;
mod side;
pub mod size;
pub mod switch;
pub mod width;

pub use boundary::ErrorBoundary;
pub use error::UnitLoadError;
pub use registry::{LoadRequest, SectionRegistry, UnitKind, UnitLoader, UnitStatus};
pub use section::SectionKey;
pub use side::{PanelView, SidePanel, TITLE_HEIGHT};
pub use size::{
    Anchor, HeightSample, ListenerGuard, MeasurementSource, ResizeHub, SizeTracker,
    FALLBACK_PANEL_HEIGHT,
};
pub use switch::{decide, ContentSwitch, Mounted, RenderDecision, SwitchInputs, SwitchState};
pub use width::{
    on_resize_stop, PanelWidth, ResizeDelta, ResizeSurface, WidthStore, DEFAULT_WIDTH, MIN_WIDTH,
};
