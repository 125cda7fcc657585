//! Row and column header rendering.
//!
//! Column headers carry letters (A, B, ... Z, AA, ...), row headers carry
//! 1-based numbers. Both bands are painted over the cell body so scrolled
//! content never shows underneath them.

use web_sys::CanvasRenderingContext2d;

use crate::render::{Frame, HeaderLabel};
use crate::types::GridColors;

/// Paint the top band with one centered letter label per visible column.
pub fn render_column_headers(ctx: &CanvasRenderingContext2d, frame: &Frame, colors: &GridColors) {
    if frame.col_header_height <= 0.0 {
        return;
    }
    let height = frame.col_header_height;

    ctx.set_fill_style_str(&colors.header);
    ctx.fill_rect(0.0, 0.0, frame.width, height);

    ctx.set_stroke_style_str(&colors.grid_line);
    ctx.begin_path();
    for col in &frame.columns {
        let x = crisp(col.start);
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
    }
    ctx.stroke();

    ctx.set_fill_style_str(&colors.header_text);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for col in &frame.columns {
        render_label(ctx, col, (col.start + col.end) * 0.5, height * 0.5);
    }
}

/// Paint the left band with one centered number label per visible row.
pub fn render_row_headers(ctx: &CanvasRenderingContext2d, frame: &Frame, colors: &GridColors) {
    if frame.row_header_width <= 0.0 {
        return;
    }
    let width = frame.row_header_width;

    ctx.set_fill_style_str(&colors.header);
    ctx.fill_rect(0.0, 0.0, width, frame.height);

    ctx.set_stroke_style_str(&colors.grid_line);
    ctx.begin_path();
    for row in &frame.rows {
        let y = crisp(row.start);
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
    }
    ctx.stroke();

    ctx.set_fill_style_str(&colors.header_text);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for row in &frame.rows {
        render_label(ctx, row, width * 0.5, (row.start + row.end) * 0.5);
    }
}

/// Paint the top-left corner where both bands meet.
pub fn render_header_corner(ctx: &CanvasRenderingContext2d, frame: &Frame, colors: &GridColors) {
    if frame.row_header_width <= 0.0 || frame.col_header_height <= 0.0 {
        return;
    }
    ctx.set_fill_style_str(&colors.header);
    ctx.fill_rect(0.0, 0.0, frame.row_header_width, frame.col_header_height);

    ctx.set_stroke_style_str(&colors.grid_line);
    ctx.begin_path();
    ctx.move_to(crisp(frame.row_header_width), 0.0);
    ctx.line_to(crisp(frame.row_header_width), frame.col_header_height);
    ctx.move_to(0.0, crisp(frame.col_header_height));
    ctx.line_to(frame.row_header_width, crisp(frame.col_header_height));
    ctx.stroke();
}

fn render_label(ctx: &CanvasRenderingContext2d, header: &HeaderLabel, x: f64, y: f64) {
    let _ = ctx.fill_text(&header.label, x, y);
}

/// Snap a 1px line onto the pixel grid.
pub(super) fn crisp(pos: f64) -> f64 {
    pos.floor() + 0.5
}
