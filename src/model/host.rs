//! Host window measurements
//!
//! Stands in for the document the panel is laid out in: the runtime writes
//! the root container and status bar heights here, and the panel's size
//! tracker reads them back through [`MeasurementSource`]. Handles are cheap
//! clones sharing the same cell.

use std::cell::Cell;
use std::rc::Rc;

use crate::panel::{Anchor, MeasurementSource};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct HostMetrics {
    root_height: Option<f32>,
    bottom_bar_height: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct HostWindow {
    metrics: Rc<Cell<HostMetrics>>,
}

impl HostWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root_height(&self, height: Option<f32>) {
        let mut metrics = self.metrics.get();
        metrics.root_height = height;
        self.metrics.set(metrics);
    }

    pub fn set_bottom_bar_height(&self, height: Option<f32>) {
        let mut metrics = self.metrics.get();
        metrics.bottom_bar_height = height;
        self.metrics.set(metrics);
    }
}

impl MeasurementSource for HostWindow {
    fn anchor_height(&self, anchor: Anchor) -> Option<f32> {
        let metrics = self.metrics.get();
        match anchor {
            Anchor::Root => metrics.root_height,
            Anchor::BottomBar => metrics.bottom_bar_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_measurements() {
        let host = HostWindow::new();
        let reader = host.clone();
        assert_eq!(reader.anchor_height(Anchor::Root), None);

        host.set_root_height(Some(700.0));
        host.set_bottom_bar_height(Some(24.0));
        assert_eq!(reader.anchor_height(Anchor::Root), Some(700.0));
        assert_eq!(reader.anchor_height(Anchor::BottomBar), Some(24.0));
    }
}
