//! Visible-index windowing along one axis.

/// Hard cap on cells in one window, so a huge extent cannot exhaust memory.
const MAX_WINDOW_CELLS: usize = 1 << 16;

/// The indices visible along one axis and their pixel bounds.
///
/// `visible`, `start` and `end` are parallel: cell `visible[i]` spans
/// `start[i]..=end[i]` on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisWindow {
    pub visible: Vec<u32>,
    pub start: Vec<f64>,
    pub end: Vec<f64>,
}

impl AxisWindow {
    /// Window the axis starting at `cell_offset`, with the first cell drawn at
    /// `header_inset`, until the running position reaches `extent`.
    ///
    /// The last cell may be partially visible, so its end bound can exceed
    /// `extent` by up to one `cell_size`. Non-positive or non-finite sizes
    /// produce an empty window.
    pub fn compute(cell_size: f64, extent: f64, header_inset: f64, cell_offset: u32) -> Self {
        let mut window = Self::default();
        if !cell_size.is_finite() || cell_size <= 0.0 || !extent.is_finite() {
            return window;
        }

        let mut idx = cell_offset;
        let mut next_start = header_inset;
        while next_start < extent && window.visible.len() < MAX_WINDOW_CELLS {
            window.visible.push(idx);
            window.start.push(next_start);
            window.end.push(next_start + cell_size);

            let Some(next) = idx.checked_add(1) else {
                break;
            };
            idx = next;
            next_start += cell_size;
        }
        window
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn first(&self) -> Option<u32> {
        self.visible.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.visible.last().copied()
    }

    /// End bound of the last visible cell.
    pub fn last_end(&self) -> Option<f64> {
        self.end.last().copied()
    }

    /// Index of the first cell whose bounds contain `pixel` (inclusive on both
    /// ends, so a shared boundary belongs to the earlier cell).
    pub fn index_at(&self, pixel: f64) -> Option<u32> {
        self.iter()
            .find(|&(_, start, end)| pixel >= start && pixel <= end)
            .map(|(idx, _, _)| idx)
    }

    /// Recorded start bound of `index` if it is visible.
    pub fn start_of(&self, index: u32) -> Option<f64> {
        let pos = self.visible.iter().position(|&v| v == index)?;
        self.start.get(pos).copied()
    }

    pub fn contains(&self, index: u32) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (first..=last).contains(&index),
            _ => false,
        }
    }

    /// `(index, start, end)` triples in screen order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.visible
            .iter()
            .zip(self.start.iter())
            .zip(self.end.iter())
            .map(|((&idx, &start), &end)| (idx, start, end))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn columns_for_default_viewport() {
        let window = AxisWindow::compute(100.0, 1000.0, 50.0, 0);
        assert_eq!(window.len(), 10);
        assert_eq!(window.first(), Some(0));
        assert_eq!(window.last(), Some(9));
        assert_eq!(window.start.first().copied(), Some(50.0));
        assert_eq!(window.last_end(), Some(1050.0));
    }

    #[test]
    fn rows_for_default_viewport() {
        let window = AxisWindow::compute(22.0, 800.0, 22.0, 0);
        assert_eq!(window.len(), 36);
        assert!(window.last_end().unwrap_or(0.0) >= 800.0);
    }

    #[test]
    fn offset_shifts_indices_not_pixels() {
        let window = AxisWindow::compute(22.0, 200.0, 22.0, 1000);
        assert_eq!(window.first(), Some(1000));
        assert_eq!(window.start.first().copied(), Some(22.0));
        assert_eq!(window.start_of(1002), Some(66.0));
    }

    #[test]
    fn extent_inside_header_is_empty() {
        assert!(AxisWindow::compute(22.0, 22.0, 22.0, 0).is_empty());
        assert!(AxisWindow::compute(22.0, 10.0, 22.0, 5).is_empty());
    }

    #[test]
    fn degenerate_sizes_are_empty() {
        assert!(AxisWindow::compute(0.0, 800.0, 22.0, 0).is_empty());
        assert!(AxisWindow::compute(-5.0, 800.0, 22.0, 0).is_empty());
        assert!(AxisWindow::compute(f64::NAN, 800.0, 22.0, 0).is_empty());
        assert!(AxisWindow::compute(22.0, f64::INFINITY, 22.0, 0).is_empty());
    }

    #[test]
    fn stops_at_last_index() {
        let window = AxisWindow::compute(10.0, 1000.0, 0.0, u32::MAX - 2);
        assert_eq!(window.visible, vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn boundary_pixel_belongs_to_earlier_cell() {
        let window = AxisWindow::compute(100.0, 1000.0, 50.0, 0);
        assert_eq!(window.index_at(150.0), Some(0));
        assert_eq!(window.index_at(150.5), Some(1));
        assert_eq!(window.index_at(49.0), None);
        assert_eq!(window.index_at(2000.0), None);
    }
}
