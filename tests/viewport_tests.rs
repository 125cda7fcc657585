//! Viewport windowing and coordinate mapping tests
//!
//! Tests for visible row/column calculation, pixel/cell conversion in both
//! directions, and scroll offset derivation.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::engine::scroll::cell_offset;
use gridview::layout::{AxisWindow, Viewport};
use gridview::{CellPos, Engine, GridConfig, InputEvent, SelectionRect, SparseGrid};
use test_case::test_case;

fn default_viewport() -> Viewport {
    Viewport::new(&GridConfig::default(), 1000.0, 800.0)
}

#[test]
fn default_viewport_window_sizes() {
    let vp = default_viewport();
    assert_eq!(vp.columns().first(), Some(0));
    assert_eq!(vp.columns().len(), 10);
    assert_eq!(vp.rows().first(), Some(0));
    assert_eq!(vp.rows().len(), 36);
}

#[test_case(800.0, 22.0, 22.0, 0; "rows at origin")]
#[test_case(1000.0, 100.0, 50.0, 0; "columns at origin")]
#[test_case(1000.0, 100.0, 50.0, 4_000_000; "columns far away")]
#[test_case(23.0, 22.0, 22.0, 7; "one partial row")]
#[test_case(333.3, 17.0, 0.0, 1; "no inset")]
fn windows_are_contiguous_and_cover_extent(extent: f64, size: f64, inset: f64, offset: u32) {
    let window = AxisWindow::compute(size, extent, inset, offset);
    assert!(!window.is_empty());
    assert_eq!(window.first(), Some(offset));
    for (i, idx) in window.visible.iter().enumerate() {
        assert_eq!(u64::from(*idx), u64::from(offset) + i as u64);
        assert_eq!(window.end[i], window.start[i] + size);
        if i > 0 {
            assert_eq!(window.start[i], window.end[i - 1]);
        }
    }
    assert_eq!(window.start[0], inset);
    assert!(window.last_end().unwrap() >= extent);
}

#[test]
fn surface_inside_headers_has_empty_windows() {
    let vp = Viewport::new(&GridConfig::default(), 40.0, 20.0);
    assert!(vp.columns().is_empty());
    assert!(vp.rows().is_empty());
    assert_eq!(vp.pixel_to_cell(30.0, 10.0), None);
}

#[test]
fn window_stops_at_last_addressable_index() {
    let window = AxisWindow::compute(10.0, 1000.0, 0.0, u32::MAX - 2);
    assert_eq!(window.visible, vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);
}

#[test]
fn pixel_round_trip_for_every_visible_cell() {
    let mut vp = default_viewport();
    vp.set_offset(CellPos::new(13, 250));
    for col in vp.columns().visible.clone() {
        for row in vp.rows().visible.clone() {
            let cell = CellPos::new(col, row);
            let (x, y) = vp.cell_to_pixel(cell);
            let inside = vp.pixel_to_cell(x + 1.0, y + 1.0);
            assert_eq!(inside, Some(cell), "round trip of {cell:?}");
        }
    }
}

#[test]
fn shared_boundary_belongs_to_earlier_cell() {
    let vp = default_viewport();
    // x = 150 is the line between columns 0 and 1.
    assert_eq!(vp.pixel_to_cell(150.0, 30.0), Some(CellPos::new(0, 0)));
    assert_eq!(vp.pixel_to_cell(150.5, 30.0), Some(CellPos::new(1, 0)));
}

#[test]
fn off_screen_cells_extrapolate_from_the_header_inset() {
    let mut vp = default_viewport();
    vp.set_offset(CellPos::new(10, 100));

    // Above and left of the window.
    assert_eq!(vp.col_to_pixel(8), 50.0 - 200.0);
    assert_eq!(vp.row_to_pixel(99), 22.0 - 22.0);
    // Past the window.
    assert_eq!(vp.col_to_pixel(30), 50.0 + 2000.0);
    // Visible cells agree with the same formula.
    assert_eq!(vp.col_to_pixel(12), 250.0);
}

#[test]
fn selection_bounds_cover_both_corners() {
    let vp = default_viewport();
    let bounds = vp.selection_bounds(&SelectionRect::new(2, 3, 0, 1));
    assert_eq!((bounds.x, bounds.y), (50.0, 44.0));
    assert_eq!((bounds.w, bounds.h), (300.0, 66.0));
}

#[test_case(0.0, 0.0 => (0, 0); "origin")]
#[test_case(99.9, 21.9 => (0, 0); "inside first cell")]
#[test_case(100.0, 22.0 => (1, 1); "exact boundary")]
#[test_case(1050.0, 2200.0 => (10, 100); "scrolled")]
#[test_case(-10.0, -5.0 => (0, 0); "overscroll bounce")]
fn scroll_position_sets_offset(left: f64, top: f64) -> (u32, u32) {
    let mut engine = Engine::new(GridConfig::default(), 1000.0, 800.0).unwrap();
    engine.handle(InputEvent::Scroll { left, top }, &SparseGrid::new());
    let offset = engine.viewport().offset();
    (offset.x, offset.y)
}

#[test]
fn cell_offset_matches_scroll_handling() {
    assert_eq!(cell_offset(2200.0, 22.0), 100);
    assert_eq!(cell_offset(f64::INFINITY, 22.0), 0);
}

#[test]
fn resize_recomputes_windows() {
    let mut engine = Engine::new(GridConfig::default(), 1000.0, 800.0).unwrap();
    let store = SparseGrid::new();
    engine.handle(
        InputEvent::Resize {
            width: 450.0,
            height: 110.0,
        },
        &store,
    );
    assert_eq!(engine.viewport().columns().len(), 4);
    assert_eq!(engine.viewport().rows().len(), 4);
}
