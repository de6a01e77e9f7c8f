//! Panel width: collapse policy and the drag-resize surface
//!
//! The width itself is lifted state. The parent owns it and hands the panel a
//! [`WidthStore`]; every change goes through `WidthStore::update_width`, so the
//! new value is always computed from the width current at commit time.

use serde::{Deserialize, Serialize};

/// Minimum usable width. A resize that ends narrower than this collapses the panel.
pub const MIN_WIDTH: u32 = 180;

/// Width used when reopening a panel that has never been open
pub const DEFAULT_WIDTH: u32 = 320;

/// Maximum width as a fraction of the host window width
pub const MAX_WIDTH_FRACTION: f32 = 0.75;

/// Panel width in logical layout units. `0` means collapsed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PanelWidth(u32);

impl PanelWidth {
    pub const COLLAPSED: PanelWidth = PanelWidth(0);
    pub const DEFAULT: PanelWidth = PanelWidth(DEFAULT_WIDTH);

    pub const fn new(width: u32) -> Self {
        Self(width)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_collapsed(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for PanelWidth {
    fn from(width: u32) -> Self {
        Self(width)
    }
}

/// Read/write handle to the lifted panel width
pub trait WidthStore {
    /// Current width
    fn width(&self) -> PanelWidth;

    /// Replace the width
    fn set_width(&mut self, width: PanelWidth);

    /// Compute the next width from the current one and store it
    fn update_width<F>(&mut self, f: F) -> PanelWidth
    where
        F: FnOnce(PanelWidth) -> PanelWidth,
        Self: Sized,
    {
        let next = f(self.width());
        self.set_width(next);
        next
    }
}

/// Width delta reported by the resize surface when a drag ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeDelta {
    pub width: i32,
}

impl ResizeDelta {
    pub const fn new(width: i32) -> Self {
        Self { width }
    }
}

/// Width after a drag stops.
///
/// Snaps to `0` below [`MIN_WIDTH`]; anything else is kept as-is. The upper
/// bound is enforced by [`ResizeSurface`] while dragging, not here.
pub fn resize_stop_width(current: PanelWidth, delta: ResizeDelta) -> PanelWidth {
    let new_width = i64::from(current.get()) + i64::from(delta.width);
    if new_width < i64::from(MIN_WIDTH) {
        PanelWidth::COLLAPSED
    } else {
        PanelWidth(u32::try_from(new_width).unwrap_or(u32::MAX))
    }
}

/// Commit a finished drag to the lifted width
pub fn on_resize_stop<S: WidthStore>(store: &mut S, delta: ResizeDelta) -> PanelWidth {
    let previous = store.width();
    let next = store.update_width(|w| resize_stop_width(w, delta));
    if next.is_collapsed() && !previous.is_collapsed() {
        tracing::debug!(
            "Resize ended below minimum ({} + {} < {}), collapsing panel",
            previous.get(),
            delta.width,
            MIN_WIDTH
        );
    } else {
        tracing::debug!("Panel width {} -> {}", previous.get(), next.get());
    }
    next
}

/// Largest width the resize surface lets a drag reach
pub fn max_width(window_width: u32) -> u32 {
    (window_width as f32 * MAX_WIDTH_FRACTION) as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGesture {
    start_x: f64,
    start_width: u32,
}

/// Drag-resize surface on the panel's right edge.
///
/// Tracks one gesture at a time. While dragging it reports a live width capped
/// to [`max_width`]; on release it reports the capped delta, which the caller
/// commits with [`on_resize_stop`].
#[derive(Debug, Clone, Default)]
pub struct ResizeSurface {
    gesture: Option<DragGesture>,
}

impl ResizeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at pointer x with the width shown at that moment
    pub fn begin(&mut self, x: f64, width: PanelWidth) {
        self.gesture = Some(DragGesture {
            start_x: x,
            start_width: width.get(),
        });
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Live width for the current pointer position, or `None` without a gesture
    pub fn drag(&self, x: f64, window_width: u32) -> Option<u32> {
        let gesture = self.gesture?;
        Some(Self::capped_width(gesture, x, window_width))
    }

    /// Finish the gesture and return its delta
    pub fn end(&mut self, x: f64, window_width: u32) -> Option<ResizeDelta> {
        let gesture = self.gesture.take()?;
        let width = Self::capped_width(gesture, x, window_width);
        let delta = i64::from(width) - i64::from(gesture.start_width);
        Some(ResizeDelta::new(delta.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
    }

    /// Drop the gesture without producing a delta
    pub fn cancel(&mut self) {
        self.gesture = None;
    }

    fn capped_width(gesture: DragGesture, x: f64, window_width: u32) -> u32 {
        let moved = (x - gesture.start_x).round() as i64;
        let target = i64::from(gesture.start_width) + moved;
        target.clamp(0, i64::from(max_width(window_width))) as u32
    }
}
