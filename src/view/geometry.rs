//! Layout geometry shared by rendering and input handling
//!
//! All functions are pure so hit-testing and painting agree on where the
//! panel, its title strip and its resize handle are.

use crate::panel::{PanelView, TITLE_HEIGHT};

/// Status bar height in pixels (the panel's bottom anchor)
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

/// Half-width of the grab zone around the panel's right edge
pub const RESIZE_HIT_ZONE: f64 = 4.0;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Shrink by `inset` on every side (never below zero size)
    pub fn inset(&self, inset: f32) -> Rect {
        Rect::new(
            self.x + inset,
            self.y + inset,
            (self.width - inset * 2.0).max(0.0),
            (self.height - inset * 2.0).max(0.0),
        )
    }
}

/// Whole panel area
pub fn panel_rect(view: &PanelView) -> Rect {
    Rect::new(0.0, 0.0, view.width as f32, view.height.max(0.0))
}

/// Title strip at the top of the panel
pub fn title_rect(view: &PanelView) -> Rect {
    let panel = panel_rect(view);
    Rect::new(0.0, 0.0, panel.width, TITLE_HEIGHT.min(panel.height))
}

/// Area below the title where the section unit paints
pub fn body_rect(view: &PanelView) -> Rect {
    let panel = panel_rect(view);
    let title = title_rect(view);
    Rect::new(
        0.0,
        title.height,
        panel.width,
        (panel.height - title.height).max(0.0),
    )
}

/// Status bar along the bottom of the window
pub fn status_bar_rect(window_width: u32, window_height: u32) -> Rect {
    Rect::new(
        0.0,
        (window_height as f32 - STATUS_BAR_HEIGHT).max(0.0),
        window_width as f32,
        STATUS_BAR_HEIGHT.min(window_height as f32),
    )
}

/// Laid-out status bar height, `None` when the window is too short to show it
pub fn status_bar_height(window_height: u32) -> Option<f32> {
    let height = status_bar_rect(0, window_height).height;
    (height > 0.0).then_some(height)
}

/// Whether the pointer is on the panel's draggable right edge.
///
/// A collapsed panel keeps a grab zone at x = 0 so it can be dragged open.
pub fn is_on_resize_handle(panel_width: u32, panel_height: f32, x: f64, y: f64) -> bool {
    let edge = panel_width as f64;
    y >= 0.0 && y < panel_height as f64 && (x - edge).abs() <= RESIZE_HIT_ZONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(!rect.contains(15.0, 12.0));
    }

    #[test]
    fn test_inset_never_negative() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0).inset(3.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn test_resize_handle_hit_zone() {
        assert!(is_on_resize_handle(300, 500.0, 302.0, 10.0));
        assert!(is_on_resize_handle(300, 500.0, 296.0, 10.0));
        assert!(!is_on_resize_handle(300, 500.0, 310.0, 10.0));
        assert!(!is_on_resize_handle(300, 500.0, 300.0, 600.0));
        assert!(is_on_resize_handle(0, 500.0, 2.0, 10.0));
    }

    #[test]
    fn test_status_bar_height_shrinks_with_window() {
        assert_eq!(status_bar_height(979), Some(STATUS_BAR_HEIGHT));
        assert_eq!(status_bar_height(10), Some(10.0));
        assert_eq!(status_bar_height(0), None);
    }

    #[test]
    fn test_status_bar_sits_at_bottom() {
        let bar = status_bar_rect(800, 600);
        assert_eq!(bar.y, 576.0);
        assert_eq!(bar.height, STATUS_BAR_HEIGHT);
    }
}
