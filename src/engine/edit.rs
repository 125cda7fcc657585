//! Single-cell edit session behind the text overlay.

use crate::layout::{PixelRect, Viewport};
use crate::types::{CellPos, CellWrite};

/// Inset of the overlay inside the cell's grid lines.
const OVERLAY_INSET: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInput {
    /// Open an editor on `cell`, pre-filled with `current`.
    Activate { cell: CellPos, current: String },
    /// Replace the buffer with the overlay's text.
    Text(String),
    /// Commit the buffer.
    Confirm,
    /// Throw the buffer away.
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Unchanged,
    /// Session opened or closed without a write.
    Changed,
    Commit(CellWrite),
}

/// At most one cell is edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    target: Option<CellPos>,
    buffer: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<CellPos> {
        self.target
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn transition(&mut self, input: EditInput) -> EditOutcome {
        match input {
            EditInput::Activate { cell, current } => {
                if self.is_active() {
                    return EditOutcome::Unchanged;
                }
                self.target = Some(cell);
                self.buffer = current;
                EditOutcome::Changed
            }
            EditInput::Text(text) => {
                if self.is_active() {
                    self.buffer = text;
                }
                EditOutcome::Unchanged
            }
            EditInput::Confirm => match self.target.take() {
                Some(cell) => {
                    let value = std::mem::take(&mut self.buffer);
                    EditOutcome::Commit(CellWrite::new(cell.x, cell.y, value))
                }
                None => EditOutcome::Unchanged,
            },
            EditInput::Cancel => {
                self.buffer.clear();
                match self.target.take() {
                    Some(_) => EditOutcome::Changed,
                    None => EditOutcome::Unchanged,
                }
            }
        }
    }

    /// Where the text input sits: one pixel inside the target cell's lines.
    pub fn overlay_rect(&self, viewport: &Viewport) -> Option<PixelRect> {
        let cell = self.target?;
        let (x, y) = viewport.cell_to_pixel(cell);
        Some(PixelRect {
            x: x + OVERLAY_INSET,
            y: y + OVERLAY_INSET,
            w: viewport.cell_width() - 2.0 * OVERLAY_INSET,
            h: viewport.cell_height() - 2.0 * OVERLAY_INSET,
        })
    }
}
