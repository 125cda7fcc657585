use serde::{Deserialize, Serialize};

use super::CellPos;

/// A rectangular selection stored as two raw corners.
///
/// `(x1, y1)` is the anchor where the drag started and `(x2, y2)` the free
/// corner that follows the pointer, so either corner may be the top-left.
/// Consumers call [`SelectionRect::normalized`] rather than relying on order.
///
/// The serialized form (`{"x1":..,"y1":..,"x2":..,"y2":..}`) doubles as the
/// clipboard payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl SelectionRect {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A one-cell rectangle with both corners at `cell`.
    pub fn single(cell: CellPos) -> Self {
        Self::from_corners(cell, cell)
    }

    pub fn from_corners(anchor: CellPos, free: CellPos) -> Self {
        Self::new(anchor.x, anchor.y, free.x, free.y)
    }

    pub fn anchor(&self) -> CellPos {
        CellPos::new(self.x1, self.y1)
    }

    pub fn free(&self) -> CellPos {
        CellPos::new(self.x2, self.y2)
    }

    /// Swap components so the first corner is the top-left.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn top_left(&self) -> CellPos {
        let n = self.normalized();
        CellPos::new(n.x1, n.y1)
    }

    pub fn bottom_right(&self) -> CellPos {
        let n = self.normalized();
        CellPos::new(n.x2, n.y2)
    }

    /// Column span minus one (`|x2 - x1|`).
    pub fn width(&self) -> u32 {
        self.x1.abs_diff(self.x2)
    }

    /// Row span minus one (`|y2 - y1|`).
    pub fn height(&self) -> u32 {
        self.y1.abs_diff(self.y2)
    }

    /// Number of cells covered, inclusive of both corners.
    ///
    /// `None` when the count does not fit in a `u64` (both spans maximal).
    pub fn cell_count(&self) -> Option<u64> {
        (u64::from(self.width()) + 1).checked_mul(u64::from(self.height()) + 1)
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        let n = self.normalized();
        (n.x1..=n.x2).contains(&cell.x) && (n.y1..=n.y2).contains(&cell.y)
    }
}
