//! Pixel frame used to paint the panel
//!
//! Wraps the softbuffer pixel slice with clipped drawing primitives. Colors
//! are ARGB (`0xAARRGGBB`).

use super::geometry::Rect;

/// Blend `fg` over `bg` with the given alpha, returning an opaque color
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let channel = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        ((b * (1.0 - alpha) + f * alpha) as u32) << shift
    };
    0xFF000000 | channel(16) | channel(8) | channel(0)
}

#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// Mutable view over a `width * height` pixel buffer.
///
/// Everything outside the buffer or the current clip rect is silently skipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Wrap a buffer; a short buffer shrinks the usable height
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Restrict drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    pub fn clear(&mut self, color: u32) {
        self.buffer[..self.width * self.height].fill(color);
    }

    /// Opaque fill
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.pixel_bounds(rect);
        self.fill_span(x0, y0, x1, y1, color);
    }

    /// Opaque fill in pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        self.fill_span(x, y, x.saturating_add(w), y.saturating_add(h), color);
    }

    /// Alpha-blended fill in pixel coordinates; alpha comes from the color
    pub fn blend_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect_px(x, y, w, h, color);
        }

        let (x0, y0, x1, y1) = self.clipped(x, y, x.saturating_add(w), y.saturating_add(h));
        for py in y0..y1 {
            let row = py * self.width;
            for px in x0..x1 {
                self.buffer[row + px] = blend_colors(self.buffer[row + px], color, alpha);
            }
        }
    }

    /// Filled box with a 1px opaque border
    pub fn draw_bordered_rect(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        fill_color: u32,
        border_color: u32,
    ) {
        self.fill_rect_px(x, y, w, h, fill_color);
        let border = border_color | 0xFF000000;
        self.fill_rect_px(x, y, w, 1, border);
        self.fill_rect_px(x, y + h.saturating_sub(1), w, 1, border);
        self.fill_rect_px(x, y, 1, h, border);
        self.fill_rect_px(x + w.saturating_sub(1), y, 1, h, border);
    }

    /// Pixel at (x, y), `0` outside the frame
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    fn fill_span(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: u32) {
        let (x0, y0, x1, y1) = self.clipped(x0, y0, x1, y1);
        for py in y0..y1 {
            let row = py * self.width;
            self.buffer[row + x0..row + x1].fill(color);
        }
    }

    fn clipped(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> (usize, usize, usize, usize) {
        let (cx0, cy0, cx1, cy1) = match self.clip {
            Some(c) => (c.x0, c.y0, c.x1, c.y1),
            None => (0, 0, self.width, self.height),
        };
        let x1 = x1.min(cx1);
        let y1 = y1.min(cy1);
        (x0.max(cx0).min(x1), y0.max(cy0).min(y1), x1, y1)
    }

    fn pixel_bounds(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        (x0, y0, x1.max(x0), y1.max(y0))
    }
}
