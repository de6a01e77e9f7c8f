//! Layout state owned above the panel
//!
//! The panel width lives here, not in the panel. `PanelLayout` is the single
//! writer the panel is handed through [`WidthStore`].

use crate::panel::width::max_width;
use crate::panel::{PanelWidth, WidthStore, MIN_WIDTH};

#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Window dimensions in pixels
    pub window_size: (u32, u32),
    width: PanelWidth,
    /// Last non-zero width, restored when the panel is reopened
    last_open_width: PanelWidth,
}

impl PanelLayout {
    pub fn new(window_width: u32, window_height: u32, width: PanelWidth) -> Self {
        Self {
            window_size: (window_width, window_height),
            width,
            last_open_width: if width.is_collapsed() {
                PanelWidth::DEFAULT
            } else {
                width
            },
        }
    }

    pub fn window_width(&self) -> u32 {
        self.window_size.0
    }

    pub fn window_height(&self) -> u32 {
        self.window_size.1
    }

    /// Widest the panel may be dragged in the current window
    pub fn max_panel_width(&self) -> u32 {
        max_width(self.window_width())
    }

    pub fn last_open_width(&self) -> PanelWidth {
        self.last_open_width
    }

    /// Collapse an open panel, or reopen a collapsed one at its last width
    pub fn toggle_collapsed(&mut self) -> PanelWidth {
        let restore = self.last_open_width;
        self.update_width(|w| {
            if w.is_collapsed() {
                restore
            } else {
                PanelWidth::COLLAPSED
            }
        })
    }

    /// Open the panel if collapsed; leaves an open panel untouched
    pub fn ensure_open(&mut self) -> PanelWidth {
        let restore = self.last_open_width;
        self.update_width(|w| if w.is_collapsed() { restore } else { w })
    }
}

impl WidthStore for PanelLayout {
    fn width(&self) -> PanelWidth {
        self.width
    }

    fn set_width(&mut self, width: PanelWidth) {
        if width.get() >= MIN_WIDTH {
            self.last_open_width = width;
        }
        self.width = width;
    }
}
