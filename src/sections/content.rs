//! Placeholder content units
//!
//! These stand in for the real explorer, build & deploy, test and tutorial
//! views. They paint a recognisable block layout and nothing more.

use crate::theme::PanelTheme;
use crate::view::frame::Frame;
use crate::view::geometry::Rect;

use super::SectionView;

const ROW_HEIGHT: f32 = 22.0;
const PADDING: f32 = 12.0;

/// File tree: indented rows
#[derive(Debug, Clone)]
pub struct ExplorerSection {
    /// Indent depth of each row
    pub rows: Vec<u8>,
}

impl Default for ExplorerSection {
    fn default() -> Self {
        Self {
            rows: vec![0, 1, 1, 2, 2, 1, 0, 1, 0],
        }
    }
}

impl SectionView for ExplorerSection {
    fn name(&self) -> &'static str {
        "explorer"
    }

    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let color = theme.title_foreground.with_alpha(0x60).to_argb_u32();
        for (i, depth) in self.rows.iter().enumerate() {
            let y = area.y + PADDING + i as f32 * ROW_HEIGHT;
            if y + ROW_HEIGHT > area.y + area.height {
                break;
            }
            let x = area.x + PADDING + f32::from(*depth) * 14.0;
            let width = (area.width - (x - area.x) - PADDING).max(0.0) * 0.6;
            frame.blend_rect_px(x as usize, y as usize + 6, width as usize, 10, color);
        }
    }
}

/// Build and deploy: two stacked action buttons
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildDeploySection;

impl SectionView for BuildDeploySection {
    fn name(&self) -> &'static str {
        "build-deploy"
    }

    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let body = area.inset(PADDING);
        let button_height = 30.0;
        for i in 0..2 {
            let y = body.y + i as f32 * (button_height + PADDING);
            frame.draw_bordered_rect(
                body.x as usize,
                y as usize,
                body.width as usize,
                button_height as usize,
                theme.accent.to_argb_u32(),
                theme.border.to_argb_u32(),
            );
        }
    }
}

/// Test runner: a list of test rows with status markers
#[derive(Debug, Clone)]
pub struct TestSection {
    pub passed: Vec<bool>,
}

impl Default for TestSection {
    fn default() -> Self {
        Self {
            passed: vec![true, true, false, true],
        }
    }
}

impl SectionView for TestSection {
    fn name(&self) -> &'static str {
        "test"
    }

    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let body = area.inset(PADDING);
        let text = theme.title_foreground.with_alpha(0x60).to_argb_u32();
        for (i, passed) in self.passed.iter().enumerate() {
            let y = body.y + i as f32 * ROW_HEIGHT;
            let marker = if *passed { theme.accent } else { theme.error };
            frame.fill_rect_px(body.x as usize, y as usize + 6, 10, 10, marker.to_argb_u32());
            frame.blend_rect_px(
                body.x as usize + 18,
                y as usize + 6,
                (body.width * 0.5) as usize,
                10,
                text,
            );
        }
    }
}

/// Tutorials: a grid of cards
#[derive(Debug, Clone)]
pub struct TutorialsSection {
    pub cards: usize,
}

impl Default for TutorialsSection {
    fn default() -> Self {
        Self { cards: 6 }
    }
}

impl SectionView for TutorialsSection {
    fn name(&self) -> &'static str {
        "tutorials"
    }

    fn paint(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        paint_card_grid(frame, area, self.cards, theme.title_background, theme.border);
    }
}

/// Two-column card grid shared by the tutorials view and its skeleton
pub(super) fn paint_card_grid(
    frame: &mut Frame,
    area: Rect,
    cards: usize,
    fill: crate::theme::Color,
    border: crate::theme::Color,
) {
    let body = area.inset(PADDING);
    let card_width = ((body.width - PADDING) / 2.0).max(0.0);
    let card_height = 90.0;
    for i in 0..cards {
        let col = (i % 2) as f32;
        let row = (i / 2) as f32;
        let x = body.x + col * (card_width + PADDING);
        let y = body.y + row * (card_height + PADDING);
        if y + card_height > body.y + body.height {
            break;
        }
        frame.draw_bordered_rect(
            x as usize,
            y as usize,
            card_width as usize,
            card_height as usize,
            fill.to_argb_u32(),
            border.to_argb_u32(),
        );
    }
}
