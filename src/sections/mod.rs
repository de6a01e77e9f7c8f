//! Section units hosted by the side panel
//!
//! Each section contributes a content unit and optionally a skeleton shown
//! while it loads. Units are opaque to the panel: it only knows their name
//! and asks them to paint into the body rect.
//!
//! ## Available Units
//!
//! - **Explorer**, **BuildDeploy**, **Test**, **Tutorials**: content placeholders
//! - **TestSkeleton**, **TutorialsSkeleton**: section-specific skeletons
//! - **Spinner**: generic fallback for sections without a skeleton

mod content;
mod skeleton;

use std::fmt;
use std::sync::Arc;

use crate::theme::PanelTheme;
use crate::view::frame::Frame;
use crate::view::geometry::Rect;

pub use content::{BuildDeploySection, ExplorerSection, TestSection, TutorialsSection};
pub use skeleton::{Spinner, TestSkeleton, TutorialsSkeleton};

/// A renderable unit mounted in the panel body
pub trait SectionView: Send + Sync + fmt::Debug {
    /// Stable unit name, used in logs and tests
    fn name(&self) -> &'static str;

    /// Paint into `area`; drawing is clipped to it by the caller
    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme);
}

pub fn load_explorer() -> Result<Arc<dyn SectionView>, String> {
    Ok(Arc::new(ExplorerSection::default()))
}

pub fn load_build_deploy() -> Result<Arc<dyn SectionView>, String> {
    Ok(Arc::new(BuildDeploySection))
}

pub fn load_test() -> Result<Arc<dyn SectionView>, String> {
    Ok(Arc::new(TestSection::default()))
}

pub fn load_tutorials() -> Result<Arc<dyn SectionView>, String> {
    Ok(Arc::new(TutorialsSection::default()))
}

pub fn load_test_skeleton() -> Result<Arc<dyn SectionView>, String> {
    Ok(Arc::new(TestSkeleton))
}

pub fn load_tutorials_skeleton() -> Result<Arc<dyn SectionView>, String> {
    Ok(Arc::new(TutorialsSkeleton))
}
