//! Panel height tracking
//!
//! The panel is as tall as the root container minus the bottom bar. Both are
//! measured through a [`MeasurementSource`] whenever the host window reports a
//! resize, and once eagerly when the tracker is attached.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Root container height assumed when it cannot be measured
pub const DEFAULT_ROOT_HEIGHT: f32 = 979.0;
/// Bottom bar height assumed when it cannot be measured
pub const DEFAULT_BOTTOM_HEIGHT: f32 = 24.0;
/// Panel height used whenever either measurement is unknown
pub const FALLBACK_PANEL_HEIGHT: f32 = 955.0;

/// Named layout anchors the tracker measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Root container spanning the whole window
    Root,
    /// Status bar pinned to the bottom of the window
    BottomBar,
}

/// Something that can report the height of a layout anchor.
///
/// Returns `None` while the anchor is not laid out yet. Must never panic.
pub trait MeasurementSource {
    fn anchor_height(&self, anchor: Anchor) -> Option<f32>;
}

/// One height measurement.
///
/// Raw values are kept so the layout can tell "unknown" from a real value.
/// Zero counts as unknown: a bar of genuinely zero height is treated the same
/// as a bar that is not mounted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeightSample {
    root: Option<f32>,
    bottom: Option<f32>,
}

impl HeightSample {
    pub fn new(root: Option<f32>, bottom: Option<f32>) -> Self {
        Self { root, bottom }
    }

    /// Root container height, or [`DEFAULT_ROOT_HEIGHT`]
    pub fn window_height(&self) -> f32 {
        self.root.unwrap_or(DEFAULT_ROOT_HEIGHT)
    }

    /// Bottom bar height, or [`DEFAULT_BOTTOM_HEIGHT`]
    pub fn bottom_height(&self) -> f32 {
        self.bottom.unwrap_or(DEFAULT_BOTTOM_HEIGHT)
    }

    /// Height available to the panel
    pub fn effective_height(&self) -> f32 {
        match (known(self.root), known(self.bottom)) {
            (Some(window), Some(bottom)) => window - bottom,
            _ => FALLBACK_PANEL_HEIGHT,
        }
    }
}

fn known(value: Option<f32>) -> Option<f32> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

/// Measure both anchors
pub fn measure(source: &dyn MeasurementSource) -> HeightSample {
    HeightSample::new(
        source.anchor_height(Anchor::Root),
        source.anchor_height(Anchor::BottomBar),
    )
}

type Listener = Rc<RefCell<dyn FnMut()>>;

#[derive(Default)]
struct HubInner {
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Window-level resize notifications.
///
/// Listeners are registered with [`ResizeHub::add_listener`] and stay
/// registered until the returned [`ListenerGuard`] is dropped.
#[derive(Clone, Default)]
pub struct ResizeHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for resize events
    pub fn add_listener<F>(&self, listener: F) -> ListenerGuard
    where
        F: FnMut() + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        inner.listeners.push((id, listener));
        tracing::trace!("Resize listener {} registered", id);

        ListenerGuard {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Notify every registered listener that the window was resized
    pub fn dispatch(&self) {
        // Snapshot first so listeners may add or drop guards while running
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in listeners {
            let mut callback = listener.borrow_mut();
            (&mut *callback)();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for ResizeHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration handle; dropping it removes the listener
pub struct ListenerGuard {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
            tracing::trace!("Resize listener {} removed", self.id);
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

/// Call `callback` with a fresh measurement now and after every resize
pub fn subscribe<F>(
    hub: &ResizeHub,
    source: Rc<dyn MeasurementSource>,
    mut callback: F,
) -> ListenerGuard
where
    F: FnMut(HeightSample) + 'static,
{
    callback(measure(source.as_ref()));
    hub.add_listener(move || callback(measure(source.as_ref())))
}

/// Caches the latest height sample for the panel
#[derive(Debug, Default)]
pub struct SizeTracker {
    sample: Rc<Cell<HeightSample>>,
    subscription: Option<ListenerGuard>,
}

impl SizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking, replacing any previous subscription
    pub fn attach(&mut self, hub: &ResizeHub, source: Rc<dyn MeasurementSource>) {
        // Release the old listener before registering a new one
        self.subscription = None;

        let sample = Rc::clone(&self.sample);
        self.subscription = Some(subscribe(hub, source, move |measured| {
            if sample.get() != measured {
                tracing::trace!(
                    "Panel height sample: window={} bottom={} effective={}",
                    measured.window_height(),
                    measured.bottom_height(),
                    measured.effective_height()
                );
            }
            sample.set(measured);
        }));
    }

    /// Stop tracking; the last sample is kept
    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn sample(&self) -> HeightSample {
        self.sample.get()
    }

    pub fn effective_height(&self) -> f32 {
        self.sample.get().effective_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeDom {
        root: Cell<Option<f32>>,
        bottom: Cell<Option<f32>>,
    }

    impl MeasurementSource for FakeDom {
        fn anchor_height(&self, anchor: Anchor) -> Option<f32> {
            match anchor {
                Anchor::Root => self.root.get(),
                Anchor::BottomBar => self.bottom.get(),
            }
        }
    }

    #[test]
    fn test_effective_height_subtracts_bottom_bar() {
        let sample = HeightSample::new(Some(800.0), Some(24.0));
        assert_eq!(sample.effective_height(), 776.0);
    }

    #[test]
    fn test_zero_or_missing_measurements_use_fallback() {
        assert_eq!(
            HeightSample::new(Some(800.0), Some(0.0)).effective_height(),
            FALLBACK_PANEL_HEIGHT
        );
        assert_eq!(
            HeightSample::new(None, Some(30.0)).effective_height(),
            FALLBACK_PANEL_HEIGHT
        );
        assert_eq!(HeightSample::default().effective_height(), FALLBACK_PANEL_HEIGHT);
    }

    #[test]
    fn test_missing_anchors_report_defaults() {
        let dom = FakeDom::default();
        let sample = measure(&dom);
        assert_eq!(sample.window_height(), DEFAULT_ROOT_HEIGHT);
        assert_eq!(sample.bottom_height(), DEFAULT_BOTTOM_HEIGHT);
    }

    #[test]
    fn test_subscribe_measures_immediately() {
        let hub = ResizeHub::new();
        let dom = Rc::new(FakeDom::default());
        dom.root.set(Some(600.0));
        dom.bottom.set(Some(20.0));

        let seen = Rc::new(Cell::new(0.0));
        let seen_cb = Rc::clone(&seen);
        let _guard = subscribe(&hub, dom, move |s| seen_cb.set(s.effective_height()));

        assert_eq!(seen.get(), 580.0);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_guard_drop_unregisters_once() {
        let hub = ResizeHub::new();
        let calls = Rc::new(Cell::new(0));
        let calls_cb = Rc::clone(&calls);
        let guard = hub.add_listener(move || calls_cb.set(calls_cb.get() + 1));

        hub.dispatch();
        assert_eq!(calls.get(), 1);

        drop(guard);
        assert_eq!(hub.listener_count(), 0);
        hub.dispatch();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_reattach_does_not_duplicate_listeners() {
        let hub = ResizeHub::new();
        let dom: Rc<dyn MeasurementSource> = Rc::new(FakeDom::default());
        let mut tracker = SizeTracker::new();

        tracker.attach(&hub, Rc::clone(&dom));
        tracker.attach(&hub, Rc::clone(&dom));
        tracker.attach(&hub, dom);
        assert_eq!(hub.listener_count(), 1);

        tracker.detach();
        assert_eq!(hub.listener_count(), 0);
        assert!(!tracker.is_attached());
    }

    #[test]
    fn test_guard_outliving_hub_is_harmless() {
        let hub = ResizeHub::new();
        let guard = hub.add_listener(|| {});
        drop(hub);
        drop(guard);
    }
}
