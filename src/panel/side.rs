//! Side panel composition root
//!
//! Combines the lifted width, the tracked height and the content decision
//! into a [`PanelView`] the renderer paints. The panel does not own its width:
//! callers pass the current value in and commit changes through a
//! [`WidthStore`].

use std::rc::Rc;

use super::error::UnitLoadError;
use super::registry::{LoadRequest, SectionRegistry};
use super::size::{MeasurementSource, ResizeHub, SizeTracker};
use super::switch::{request_loads, ContentSwitch, RenderDecision, SwitchInputs};
use super::width::{on_resize_stop, PanelWidth, ResizeSurface, WidthStore};

/// Height of the title strip at the top of the panel
pub const TITLE_HEIGHT: f32 = 32.0;

/// Everything needed to paint the panel for one frame
#[derive(Debug, Clone)]
pub struct PanelView {
    /// Upper-cased section name
    pub title: String,
    /// Width to paint; the live drag width while a resize is in progress
    pub width: u32,
    pub height: f32,
    pub resizing: bool,
    pub decision: RenderDecision,
}

impl PanelView {
    pub fn is_collapsed(&self) -> bool {
        self.width == 0
    }
}

/// Panel-local state: height tracking, the resize gesture and the switch
#[derive(Debug, Default)]
pub struct SidePanel {
    pub size: SizeTracker,
    pub resize: ResizeSurface,
    pub switch: ContentSwitch,
    live_width: Option<u32>,
}

impl SidePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount: start listening for window resizes
    pub fn mount(&mut self, hub: &ResizeHub, source: Rc<dyn MeasurementSource>) {
        self.size.attach(hub, source);
    }

    /// Unmount: release the resize listener
    pub fn unmount(&mut self) {
        self.size.detach();
        self.resize.cancel();
        self.live_width = None;
    }

    pub fn begin_resize(&mut self, x: f64, width: PanelWidth) {
        self.resize.begin(x, width);
        self.live_width = Some(width.get());
    }

    /// Follow the pointer; returns the live width if a drag is in progress
    pub fn drag_resize(&mut self, x: f64, window_width: u32) -> Option<u32> {
        let live = self.resize.drag(x, window_width)?;
        self.live_width = Some(live);
        Some(live)
    }

    /// Finish the drag and commit it to the lifted width
    pub fn end_resize<S: WidthStore>(
        &mut self,
        x: f64,
        window_width: u32,
        store: &mut S,
    ) -> Option<PanelWidth> {
        self.live_width = None;
        let delta = self.resize.end(x, window_width)?;
        Some(on_resize_stop(store, delta))
    }

    pub fn cancel_resize(&mut self) {
        self.resize.cancel();
        self.live_width = None;
    }

    /// Loads needed to show the current inputs
    pub fn request_loads(
        &self,
        inputs: SwitchInputs,
        registry: &mut SectionRegistry,
    ) -> Vec<LoadRequest> {
        request_loads(inputs, registry)
    }

    /// Build the view for this frame
    pub fn compose(
        &mut self,
        width: PanelWidth,
        inputs: SwitchInputs,
        registry: &SectionRegistry,
    ) -> Result<PanelView, UnitLoadError> {
        let decision = self.switch.evaluate(inputs, registry)?;
        Ok(PanelView {
            title: inputs.key.title(),
            width: self.live_width.unwrap_or(width.get()),
            height: self.size.effective_height(),
            resizing: self.resize.is_active(),
            decision,
        })
    }
}
