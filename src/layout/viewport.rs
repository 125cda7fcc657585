//! Viewport state: surface extent, scroll offset and pixel↔cell mapping.

use super::AxisWindow;
use crate::types::{CellPos, GridConfig, SelectionRect};

/// A rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Viewport state - represents the visible area of the grid
///
/// The column and row windows are recomputed whenever the extent or the
/// offset changes, so every mapping below works off the same frame.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Surface width in pixels
    width: f64,
    /// Surface height in pixels
    height: f64,
    cell_width: f64,
    cell_height: f64,
    row_header_width: f64,
    col_header_height: f64,
    /// Whole cells scrolled past on each axis
    offset: CellPos,
    columns: AxisWindow,
    rows: AxisWindow,
}

impl Viewport {
    pub fn new(config: &GridConfig, width: f64, height: f64) -> Self {
        let mut viewport = Self {
            width,
            height,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            row_header_width: config.row_header_width,
            col_header_height: config.col_header_height,
            offset: CellPos::default(),
            columns: AxisWindow::default(),
            rows: AxisWindow::default(),
        };
        viewport.recompute();
        viewport
    }

    fn recompute(&mut self) {
        self.columns = AxisWindow::compute(
            self.cell_width,
            self.width,
            self.row_header_width,
            self.offset.x,
        );
        self.rows = AxisWindow::compute(
            self.cell_height,
            self.height,
            self.col_header_height,
            self.offset.y,
        );
    }

    /// Resize the surface. Returns whether anything changed.
    #[allow(clippy::float_cmp)]
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.recompute();
        true
    }

    /// Set the scroll offset in whole cells. Returns whether it changed.
    pub fn set_offset(&mut self, offset: CellPos) -> bool {
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.recompute();
        true
    }

    pub fn offset(&self) -> CellPos {
        self.offset
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn row_header_width(&self) -> f64 {
        self.row_header_width
    }

    pub fn col_header_height(&self) -> f64 {
        self.col_header_height
    }

    /// The cell body: the surface minus the header bands.
    pub fn body(&self) -> PixelRect {
        PixelRect {
            x: self.row_header_width,
            y: self.col_header_height,
            w: (self.width - self.row_header_width).max(0.0),
            h: (self.height - self.col_header_height).max(0.0),
        }
    }

    pub fn columns(&self) -> &AxisWindow {
        &self.columns
    }

    pub fn rows(&self) -> &AxisWindow {
        &self.rows
    }

    /// Map a surface pixel to the cell under it.
    ///
    /// Returns `None` when either axis misses the visible window (headers,
    /// or outside the surface).
    pub fn pixel_to_cell(&self, x: f64, y: f64) -> Option<CellPos> {
        let col = self.columns.index_at(x)?;
        let row = self.rows.index_at(y)?;
        Some(CellPos::new(col, row))
    }

    /// Left edge of column `col`; extrapolated when off-screen.
    pub fn col_to_pixel(&self, col: u32) -> f64 {
        self.columns.start_of(col).unwrap_or_else(|| {
            extrapolate(col, self.offset.x, self.cell_width, self.row_header_width)
        })
    }

    /// Top edge of row `row`; extrapolated when off-screen.
    pub fn row_to_pixel(&self, row: u32) -> f64 {
        self.rows.start_of(row).unwrap_or_else(|| {
            extrapolate(row, self.offset.y, self.cell_height, self.col_header_height)
        })
    }

    /// Top-left pixel of `cell`.
    pub fn cell_to_pixel(&self, cell: CellPos) -> (f64, f64) {
        (self.col_to_pixel(cell.x), self.row_to_pixel(cell.y))
    }

    /// Pixel rectangle covering a selection, corners included.
    pub fn selection_bounds(&self, selection: &SelectionRect) -> PixelRect {
        let n = selection.normalized();
        let (x1, y1) = self.cell_to_pixel(CellPos::new(n.x1, n.y1));
        let (x2, y2) = self.cell_to_pixel(CellPos::new(n.x2, n.y2));
        PixelRect {
            x: x1,
            y: y1,
            w: x2 + self.cell_width - x1,
            h: y2 + self.cell_height - y1,
        }
    }
}

/// Off-screen position: the header inset plus whole cells from the offset.
/// Matches the visible branch exactly, since visible starts are
/// `inset + k * size` as well.
fn extrapolate(index: u32, offset: u32, size: f64, inset: f64) -> f64 {
    inset + (f64::from(index) - f64::from(offset)) * size
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(&GridConfig::default(), 1000.0, 800.0)
    }

    #[test]
    fn maps_pixels_to_cells() {
        let vp = viewport();
        assert_eq!(vp.pixel_to_cell(60.0, 30.0), Some(CellPos::new(0, 0)));
        assert_eq!(vp.pixel_to_cell(275.0, 100.0), Some(CellPos::new(2, 3)));
    }

    #[test]
    fn headers_map_to_nothing() {
        let vp = viewport();
        assert_eq!(vp.pixel_to_cell(10.0, 100.0), None);
        assert_eq!(vp.pixel_to_cell(300.0, 10.0), None);
    }

    #[test]
    fn visible_and_extrapolated_positions_agree() {
        let mut vp = viewport();
        vp.set_offset(CellPos::new(5, 100));
        // Visible
        assert_eq!(vp.col_to_pixel(5), 50.0);
        assert_eq!(vp.row_to_pixel(101), 44.0);
        // Scrolled out above/left
        assert_eq!(vp.col_to_pixel(3), -150.0);
        assert_eq!(vp.row_to_pixel(98), -22.0);
        // Past the bottom/right edge
        assert_eq!(vp.col_to_pixel(5 + 20), 50.0 + 2000.0);
    }

    #[test]
    fn selection_bounds_cover_corners() {
        let vp = viewport();
        let bounds = vp.selection_bounds(&SelectionRect::new(2, 3, 0, 1));
        assert_eq!(
            bounds,
            PixelRect {
                x: 50.0,
                y: 44.0,
                w: 300.0,
                h: 66.0
            }
        );
    }

    #[test]
    fn body_excludes_headers_and_never_goes_negative() {
        let vp = viewport();
        assert_eq!(
            vp.body(),
            PixelRect {
                x: 50.0,
                y: 22.0,
                w: 950.0,
                h: 778.0
            }
        );
        let tiny = Viewport::new(&GridConfig::default(), 30.0, 10.0);
        assert_eq!((tiny.body().w, tiny.body().h), (0.0, 0.0));
    }

    #[test]
    fn resize_and_offset_report_changes() {
        let mut vp = viewport();
        assert!(!vp.resize(1000.0, 800.0));
        assert!(vp.resize(500.0, 800.0));
        assert_eq!(vp.columns().len(), 5);
        assert!(!vp.set_offset(CellPos::new(0, 0)));
        assert!(vp.set_offset(CellPos::new(3, 0)));
        assert_eq!(vp.columns().first(), Some(3));
    }
}
