//! Frame assembly: everything a backend needs to paint one frame.
//!
//! Building the frame is the only place the render pass reads the store, and
//! it reads only the visible window.

use super::selection::{selection_overlay, SelectionOverlay};
use crate::cell_ref::col_to_letter;
use crate::layout::{PixelRect, Viewport};
use crate::store::GridStore;
use crate::types::{GridConfig, SelectionRect};

/// A visible row or column with its header label.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLabel {
    pub index: u32,
    pub start: f64,
    pub end: f64,
    pub label: String,
}

/// Text of one non-empty visible cell, positioned for left-aligned,
/// vertically centered drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct CellText {
    pub col: u32,
    pub row: u32,
    /// Text origin x (column start + padding)
    pub x: f64,
    /// Vertical center of the row
    pub y: f64,
    pub text: String,
}

/// One frame of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub row_header_width: f64,
    pub col_header_height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub text_padding: f64,
    /// The cell body: the surface minus the header bands
    pub body: PixelRect,
    pub columns: Vec<HeaderLabel>,
    pub rows: Vec<HeaderLabel>,
    /// Normalized selection, in cells
    pub selected: Option<SelectionRect>,
    /// Selection geometry, when any of it is on screen
    pub selection: Option<SelectionOverlay>,
    /// Non-empty visible cells in row-major order
    pub texts: Vec<CellText>,
}

impl Frame {
    pub fn build<S: GridStore + ?Sized>(
        viewport: &Viewport,
        selection: Option<SelectionRect>,
        store: &S,
        config: &GridConfig,
    ) -> Self {
        let columns: Vec<HeaderLabel> = viewport
            .columns()
            .iter()
            .map(|(index, start, end)| HeaderLabel {
                index,
                start,
                end,
                label: col_to_letter(index),
            })
            .collect();
        let rows: Vec<HeaderLabel> = viewport
            .rows()
            .iter()
            .map(|(index, start, end)| HeaderLabel {
                index,
                start,
                end,
                label: (u64::from(index) + 1).to_string(),
            })
            .collect();

        let half_row = viewport.cell_height() * 0.5;
        let mut texts = Vec::new();
        for row in &rows {
            for col in &columns {
                let Some(text) = store.read(row.index, col.index) else {
                    continue;
                };
                if text.is_empty() {
                    continue;
                }
                texts.push(CellText {
                    col: col.index,
                    row: row.index,
                    x: col.start + config.text_padding,
                    y: row.start + half_row,
                    text: text.to_string(),
                });
            }
        }

        Self {
            width: viewport.width(),
            height: viewport.height(),
            row_header_width: viewport.row_header_width(),
            col_header_height: viewport.col_header_height(),
            cell_width: viewport.cell_width(),
            cell_height: viewport.cell_height(),
            text_padding: config.text_padding,
            body: viewport.body(),
            columns,
            rows,
            selected: selection.map(|s| s.normalized()),
            selection: selection.and_then(|s| selection_overlay(&s, viewport)),
            texts,
        }
    }

    /// Whether `(col, row)` lies inside the selection.
    pub fn is_selected(&self, col: u32, row: u32) -> bool {
        self.selected
            .is_some_and(|s| s.contains(crate::types::CellPos::new(col, row)))
    }
}
