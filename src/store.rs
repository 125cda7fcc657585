//! Grid value storage.
//!
//! The engine never owns cell values. It reads them through [`GridStore`] and
//! hands write batches back to the caller, who applies them here.

use std::collections::HashMap;

use crate::types::CellWrite;

/// A mutable 2D text store keyed by (row, column).
pub trait GridStore {
    /// Value at `(row, col)`, or `None` when the cell is empty.
    fn read(&self, row: u32, col: u32) -> Option<&str>;

    /// Apply a batch in order. Later writes to the same cell win, and the
    /// whole batch must become visible at once.
    fn apply_batch(&mut self, writes: &[CellWrite]);
}

/// Sparse in-memory store. Writing an empty string clears the cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashMap<(u32, u32), String>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from row-major data, skipping empty strings.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::new();
        grid.load_rows(rows);
        grid
    }

    /// Merge row-major data into the grid starting at (0, 0).
    pub fn load_rows<R, S>(&mut self, rows: R)
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (row, values) in (0..=u32::MAX).zip(rows) {
            for (col, value) in (0..=u32::MAX).zip(values) {
                self.set(row, col, value);
            }
        }
    }

    pub fn set(&mut self, row: u32, col: u32, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&(row, col)).map(String::as_str)
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl GridStore for SparseGrid {
    fn read(&self, row: u32, col: u32) -> Option<&str> {
        self.get(row, col)
    }

    fn apply_batch(&mut self, writes: &[CellWrite]) {
        for write in writes {
            self.set(write.y, write.x, write.value.as_str());
        }
    }
}
