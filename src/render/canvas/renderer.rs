//! Canvas 2D rendering backend.
//!
//! Implements the RenderBackend trait using HTML Canvas 2D API via web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::Result;
use crate::render::backend::RenderBackend;
use crate::render::{Frame, SelectionOverlay};
use crate::types::GridColors;

use super::headers::{crisp, render_column_headers, render_header_corner, render_row_headers};
use super::text_width::WidthCache;

const TEXT_WIDTH_GENERATION: usize = 2048;
const SELECTION_BORDER_WIDTH: f64 = 1.0;
const ELLIPSIS: &str = "\u{2026}";

/// Canvas 2D renderer
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Physical buffer size
    width: u32,
    height: u32,
    dpr: f32,
    colors: GridColors,
    font: String,
    text_widths: WidthCache,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement, colors: GridColors, font: String) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            dpr: 1.0,
            colors,
            font,
            text_widths: WidthCache::new(TEXT_WIDTH_GENERATION),
        })
    }

    fn measure(&mut self, text: &str) -> f64 {
        let ctx = &self.ctx;
        self.text_widths.width_of(text, |text| {
            ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
        })
    }

    /// Longest prefix of `text` (plus an ellipsis) that fits in `max_width`.
    fn fit_text<'a>(&mut self, text: &'a str, max_width: f64) -> std::borrow::Cow<'a, str> {
        if self.measure(text) <= max_width {
            return text.into();
        }
        let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).skip(1).collect();
        // Binary search over char boundaries for the widest prefix that fits.
        let (mut lo, mut hi) = (0usize, boundaries.len());
        let mut best = String::new();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let end = boundaries.get(mid).copied().unwrap_or(text.len());
            let candidate = format!("{}{ELLIPSIS}", text.get(..end).unwrap_or_default());
            if self.measure(&candidate) <= max_width {
                best = candidate;
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        best.into()
    }

    fn render_selection_fill(&self, overlay: &SelectionOverlay) {
        let clip = overlay.clip;
        self.ctx.set_fill_style_str(&self.colors.selection_fill);
        self.ctx.fill_rect(clip.x, clip.y, clip.w, clip.h);
    }

    fn render_grid_lines(&self, frame: &Frame) {
        self.ctx.set_stroke_style_str(&self.colors.grid_line);
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        for row in &frame.rows {
            let y = crisp(row.end);
            self.ctx.move_to(frame.row_header_width, y);
            self.ctx.line_to(frame.width, y);
        }
        for col in &frame.columns {
            let x = crisp(col.end);
            self.ctx.move_to(x, frame.col_header_height);
            self.ctx.line_to(x, frame.height);
        }
        self.ctx.stroke();
    }

    fn render_cell_text(&mut self, frame: &Frame) {
        let body = frame.body;
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(body.x, body.y, body.w, body.h);
        self.ctx.clip();

        self.ctx.set_font(&self.font);
        self.ctx.set_fill_style_str(&self.colors.cell_text);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("middle");
        let room = frame.cell_width - 2.0 * frame.text_padding;
        for text in &frame.texts {
            let shown = self.fit_text(&text.text, room);
            let _ = self.ctx.fill_text(&shown, text.x, text.y);
        }
        self.ctx.restore();
    }

    fn render_selection_border(&self, overlay: &SelectionOverlay) {
        let b = overlay.bounds;
        let (left, top, right, bottom) = (b.x, b.y, b.x + b.w, b.y + b.h);
        let clip = overlay.clip;
        let (clip_right, clip_bottom) = (clip.x + clip.w, clip.y + clip.h);

        self.ctx.set_stroke_style_str(&self.colors.selection_border);
        self.ctx.set_line_width(SELECTION_BORDER_WIDTH);
        self.ctx.begin_path();
        if overlay.draw_top {
            self.ctx.move_to(clip.x, top);
            self.ctx.line_to(clip_right, top);
        }
        if overlay.draw_bottom {
            self.ctx.move_to(clip.x, bottom);
            self.ctx.line_to(clip_right, bottom);
        }
        if overlay.draw_left {
            self.ctx.move_to(left, clip.y);
            self.ctx.line_to(left, clip_bottom);
        }
        if overlay.draw_right {
            self.ctx.move_to(right, clip.y);
            self.ctx.line_to(right, clip_bottom);
        }
        self.ctx.stroke();
    }
}

impl RenderBackend for CanvasRenderer {
    fn init(&mut self) -> Result<()> {
        // Canvas 2D doesn't need explicit initialization
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        self.text_widths.clear();

        // Set canvas buffer size to physical pixels
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn render(&mut self, frame: &Frame) -> Result<()> {
        let dpr = f64::from(self.dpr);
        self.ctx.save();
        // All drawing below uses logical (CSS pixel) coordinates.
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|_| "Failed to set canvas transform")?;

        self.ctx.set_fill_style_str(&self.colors.background);
        self.ctx.fill_rect(0.0, 0.0, frame.width, frame.height);

        if let Some(overlay) = &frame.selection {
            self.render_selection_fill(overlay);
        }
        self.render_grid_lines(frame);

        self.ctx.set_font(&self.font);
        self.ctx.set_line_width(1.0);
        render_column_headers(&self.ctx, frame, &self.colors);
        render_row_headers(&self.ctx, frame, &self.colors);
        render_header_corner(&self.ctx, frame, &self.colors);

        self.render_cell_text(frame);

        if let Some(overlay) = &frame.selection {
            self.render_selection_border(overlay);
        }

        // Restore clean state (removes any clip leaks from this frame).
        self.ctx.restore();
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
