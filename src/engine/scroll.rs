//! Scroll offset derivation and growth of the virtual scroll area.

/// Whole cells scrolled past for a raw scroll position.
///
/// Negative and non-finite positions count as no scroll.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cell_offset(raw: f64, cell_size: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 || !cell_size.is_finite() || cell_size <= 0.0 {
        return 0;
    }
    let cells = (raw / cell_size).floor();
    if cells >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        cells as u32
    }
}

/// Virtual scrollable extent per axis. Bounds only ever grow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollArea {
    bound_x: f64,
    bound_y: f64,
    padding: f64,
}

impl ScrollArea {
    pub fn new(initial_bound: f64, padding: f64) -> Self {
        Self {
            bound_x: initial_bound,
            bound_y: initial_bound,
            padding,
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.bound_x, self.bound_y)
    }

    /// Spacer size for a scroll container showing `viewport` pixels.
    ///
    /// The container can scroll at most `spacer - viewport`, so one viewport
    /// is added on top of bound and padding: the furthest reachable position
    /// is then `bound + padding`, past the bound at any viewport size.
    pub fn extent(&self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        (
            self.bound_x + self.padding + viewport_width.max(0.0),
            self.bound_y + self.padding + viewport_height.max(0.0),
        )
    }

    /// Furthest scroll position reachable in a container sized by [`Self::extent`].
    pub fn max_scroll(&self) -> (f64, f64) {
        (self.bound_x + self.padding, self.bound_y + self.padding)
    }

    /// Record a raw scroll position, doubling each axis whose bound it reached.
    /// Returns whether either bound grew.
    pub fn on_scroll(&mut self, left: f64, top: f64) -> bool {
        let grew_x = grow(&mut self.bound_x, left);
        let grew_y = grow(&mut self.bound_y, top);
        grew_x || grew_y
    }
}

fn grow(bound: &mut f64, raw: f64) -> bool {
    // A zero position means nothing has been scrolled yet.
    if raw.is_finite() && raw > 0.0 && raw >= *bound {
        *bound *= 2.0;
        true
    } else {
        false
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 22.0 => 0; "origin")]
    #[test_case(21.9, 22.0 => 0; "inside first cell")]
    #[test_case(22.0, 22.0 => 1; "exact boundary")]
    #[test_case(1000.0, 100.0 => 10; "columns")]
    #[test_case(-50.0, 22.0 => 0; "negative clamps")]
    #[test_case(f64::NAN, 22.0 => 0; "nan")]
    #[test_case(f64::MAX, 1.0 => u32::MAX; "saturates")]
    fn offsets(raw: f64, size: f64) -> u32 {
        cell_offset(raw, size)
    }

    #[test]
    fn grows_only_at_or_past_bound() {
        let mut area = ScrollArea::new(5000.0, 2000.0);
        assert!(!area.on_scroll(4999.0, 0.0));
        assert_eq!(area.bounds(), (5000.0, 5000.0));

        assert!(area.on_scroll(5000.0, 0.0));
        assert_eq!(area.bounds(), (10000.0, 5000.0));

        assert!(area.on_scroll(0.0, 6000.0));
        assert_eq!(area.bounds(), (10000.0, 10000.0));
        assert_eq!(area.extent(1000.0, 800.0), (13000.0, 12800.0));
    }

    #[test]
    fn wide_viewport_can_still_reach_the_bound() {
        let (width, height) = (2560.0, 1440.0);
        let mut area = ScrollArea::new(5000.0, 2000.0);
        for _ in 0..3 {
            let (spacer_w, spacer_h) = area.extent(width, height);
            let (left, top) = (spacer_w - width, spacer_h - height);
            assert_eq!((left, top), area.max_scroll());
            assert!(area.on_scroll(left, top));
        }
        assert_eq!(area.bounds(), (40000.0, 40000.0));
    }

    #[test]
    fn zero_scroll_never_grows() {
        let mut area = ScrollArea::new(5000.0, 0.0);
        assert!(!area.on_scroll(0.0, 0.0));
        assert!(!area.on_scroll(-10.0, f64::NAN));
        assert_eq!(area.bounds(), (5000.0, 5000.0));
    }

    #[test]
    fn bounds_never_shrink() {
        let mut area = ScrollArea::new(100.0, 0.0);
        area.on_scroll(150.0, 150.0);
        area.on_scroll(10.0, 10.0);
        assert_eq!(area.bounds(), (200.0, 200.0));
    }

    #[test]
    fn doubles_once_per_event() {
        let mut area = ScrollArea::new(100.0, 0.0);
        assert!(area.on_scroll(1000.0, 0.0));
        assert_eq!(area.bounds().0, 200.0);
        assert!(area.on_scroll(1000.0, 0.0));
        assert_eq!(area.bounds().0, 400.0);
    }
}
