//! View module - paints the side panel into a softbuffer surface
//!
//! Painting is split in two: `paint_*` functions draw into a [`Frame`] and
//! are pure over the model, and [`Renderer`] owns the window surface and
//! presents the result.

pub mod frame;
pub mod geometry;

pub use frame::Frame;
pub use geometry::Rect;

use anyhow::Result;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use crate::model::AppModel;
use crate::panel::{Mounted, PanelView, UnitLoadError, WidthStore, DEFAULT_WIDTH};
use crate::theme::PanelTheme;

/// Width of the drawn resize handle on the panel's right edge
const HANDLE_WIDTH: f32 = 2.0;

/// Width of one title placeholder cell per character
const TITLE_CELL_WIDTH: usize = 7;

/// Paint the whole window: editor background, panel and status bar
pub fn paint(frame: &mut Frame, model: &mut AppModel) {
    let theme = model.theme.clone();
    frame.clear(theme.editor_background.to_argb_u32());

    match model.render_panel() {
        Some(view) => paint_panel(frame, &view, &theme),
        None => {
            if let Some(err) = model.boundary.caught().cloned() {
                let height = model.panel.size.effective_height();
                let width = model.layout.width().get();
                paint_error(frame, &err, width, height, &theme);
            }
        }
    }

    let (window_width, window_height) = model.layout.window_size;
    frame.fill_rect(
        geometry::status_bar_rect(window_width, window_height),
        theme.status_bar.to_argb_u32(),
    );
}

/// Paint a composed panel view
pub fn paint_panel(frame: &mut Frame, view: &PanelView, theme: &PanelTheme) {
    if view.is_collapsed() {
        // Keep a sliver of the handle visible so the panel can be dragged open
        if view.resizing {
            frame.fill_rect(
                Rect::new(0.0, 0.0, HANDLE_WIDTH, view.height),
                theme.resize_handle_active.to_argb_u32(),
            );
        }
        return;
    }

    let panel = geometry::panel_rect(view);
    frame.fill_rect(panel, theme.background.to_argb_u32());

    paint_title(frame, view, theme);

    let body = geometry::body_rect(view);
    frame.set_clip(body);
    match &view.decision.mounted {
        Mounted::Content(unit) | Mounted::Fallback(unit) => unit.paint(frame, body, theme),
        Mounted::Empty => {}
    }
    frame.clear_clip();

    let handle_color = if view.resizing {
        theme.resize_handle_active
    } else {
        theme.resize_handle
    };
    frame.fill_rect(
        Rect::new(
            panel.width - HANDLE_WIDTH,
            0.0,
            HANDLE_WIDTH.min(panel.width),
            panel.height,
        ),
        handle_color.to_argb_u32(),
    );
}

/// Title strip with a placeholder block sized to the title
fn paint_title(frame: &mut Frame, view: &PanelView, theme: &PanelTheme) {
    let title = geometry::title_rect(view);
    frame.fill_rect(title, theme.title_background.to_argb_u32());
    frame.fill_rect(
        Rect::new(0.0, title.height - 1.0, title.width, 1.0),
        theme.border.to_argb_u32(),
    );

    let label_width = view.title.chars().count() * TITLE_CELL_WIDTH;
    let label_height = (title.height / 3.0) as usize;
    frame.set_clip(title.inset(4.0));
    frame.blend_rect_px(
        12,
        (title.height as usize).saturating_sub(label_height) / 2,
        label_width,
        label_height,
        theme.title_foreground.with_alpha(0x60).to_argb_u32(),
    );
    frame.clear_clip();
}

/// Error surface shown in place of the panel when a unit failed to load
pub fn paint_error(
    frame: &mut Frame,
    err: &UnitLoadError,
    width: u32,
    height: f32,
    theme: &PanelTheme,
) {
    let width = if width == 0 {
        DEFAULT_WIDTH
    } else {
        width
    };
    let area = Rect::new(0.0, 0.0, width as f32, height.max(0.0));
    frame.fill_rect(area, theme.background.to_argb_u32());

    let banner = area.inset(12.0);
    frame.draw_bordered_rect(
        banner.x as usize,
        banner.y as usize,
        banner.width as usize,
        (48.0f32).min(banner.height) as usize,
        frame::blend_colors(
            theme.background.to_argb_u32(),
            theme.error.to_argb_u32(),
            0.25,
        ),
        theme.error.to_argb_u32(),
    );
    tracing::trace!("Painted error surface for {}", err);
}

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents between frames, so the
    /// frame is painted here and copied to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        resize_surface(&mut surface, width, height)?;

        Ok(Self {
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    pub fn render(&mut self, model: &mut AppModel) -> Result<()> {
        let (width, height) = model.layout.window_size;
        let (width, height) = (width.max(1), height.max(1));

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            resize_surface(&mut self.surface, width, height)?;
        }

        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            paint(&mut frame, model);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn resize_surface(
    surface: &mut Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(());
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
}
