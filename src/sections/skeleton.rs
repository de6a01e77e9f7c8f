//! Loading placeholders
//!
//! Shown by the content switch while a section (or the router) is not ready.

use crate::theme::PanelTheme;
use crate::view::frame::Frame;
use crate::view::geometry::Rect;

use super::content::paint_card_grid;
use super::SectionView;

/// Generic loading indicator for sections without a skeleton
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner;

impl SectionView for Spinner {
    fn name(&self) -> &'static str {
        "spinner"
    }

    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        // Ring of dots, centred horizontally, 2rem below the title
        const DOTS: usize = 8;
        const RADIUS: f32 = 14.0;
        let cx = area.x + area.width / 2.0;
        let cy = area.y + 32.0 + RADIUS;
        for i in 0..DOTS {
            let angle = i as f32 / DOTS as f32 * std::f32::consts::TAU;
            let x = cx + RADIUS * angle.cos() - 2.0;
            let y = cy + RADIUS * angle.sin() - 2.0;
            if x < area.x || y < area.y {
                continue;
            }
            let alpha = 0x40 + (i * 0xBF / DOTS) as u8;
            frame.blend_rect_px(
                x as usize,
                y as usize,
                4,
                4,
                theme.accent.with_alpha(alpha).to_argb_u32(),
            );
        }
    }
}

/// Skeleton of the test view: title bar plus placeholder rows
#[derive(Debug, Clone, Copy, Default)]
pub struct TestSkeleton;

impl SectionView for TestSkeleton {
    fn name(&self) -> &'static str {
        "test-skeleton"
    }

    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let body = area.inset(12.0);
        frame.fill_rect_px(
            body.x as usize,
            body.y as usize,
            (body.width * 0.4) as usize,
            14,
            theme.skeleton_highlight.to_argb_u32(),
        );
        for i in 0..4 {
            let y = body.y + 28.0 + i as f32 * 22.0;
            frame.fill_rect_px(
                body.x as usize,
                y as usize,
                body.width as usize,
                12,
                theme.skeleton.to_argb_u32(),
            );
        }
    }
}

/// Skeleton of the tutorials view: empty card grid
#[derive(Debug, Clone, Copy, Default)]
pub struct TutorialsSkeleton;

impl SectionView for TutorialsSkeleton {
    fn name(&self) -> &'static str {
        "tutorials-skeleton"
    }

    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        paint_card_grid(frame, area, 4, theme.skeleton, theme.skeleton_highlight);
    }
}
