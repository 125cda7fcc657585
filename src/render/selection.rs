//! Selection overlay helpers.
//!
//! These helpers keep selection math testable without depending on Canvas APIs.

use crate::layout::{PixelRect, Viewport};
use crate::types::SelectionRect;

/// Where to paint the selection in one frame.
///
/// `bounds` is the full highlight rectangle (it may extend under the headers
/// or past the surface when the selection is partly scrolled away); `clip` is
/// its visible part inside the cell body. Border edges that fall outside the
/// body are not drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOverlay {
    pub bounds: PixelRect,
    pub clip: PixelRect,
    pub draw_top: bool,
    pub draw_bottom: bool,
    pub draw_left: bool,
    pub draw_right: bool,
}

/// Overlay geometry for `selection`, or `None` when none of it is on screen.
pub fn selection_overlay(
    selection: &SelectionRect,
    viewport: &Viewport,
) -> Option<SelectionOverlay> {
    let bounds = viewport.selection_bounds(selection);
    let body = viewport.body();

    let left = bounds.x.max(body.x);
    let top = bounds.y.max(body.y);
    let right = (bounds.x + bounds.w).min(body.x + body.w);
    let bottom = (bounds.y + bounds.h).min(body.y + body.h);
    if right <= left || bottom <= top {
        return None;
    }

    Some(SelectionOverlay {
        bounds,
        clip: PixelRect {
            x: left,
            y: top,
            w: right - left,
            h: bottom - top,
        },
        draw_top: bounds.y >= body.y,
        draw_bottom: bounds.y + bounds.h <= body.y + body.h,
        draw_left: bounds.x >= body.x,
        draw_right: bounds.x + bounds.w <= body.x + body.w,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CellPos, GridConfig};

    fn viewport() -> Viewport {
        Viewport::new(&GridConfig::default(), 1000.0, 800.0)
    }

    #[test]
    fn fully_visible_selection_draws_every_edge() {
        let overlay = selection_overlay(&SelectionRect::new(0, 0, 1, 1), &viewport()).unwrap();
        assert_eq!(overlay.bounds, overlay.clip);
        assert!(overlay.draw_top && overlay.draw_bottom && overlay.draw_left && overlay.draw_right);
    }

    #[test]
    fn selection_scrolled_partly_away_is_clipped() {
        let mut vp = viewport();
        vp.set_offset(CellPos::new(2, 0));
        let overlay = selection_overlay(&SelectionRect::new(0, 0, 3, 0), &vp).unwrap();
        assert_eq!(overlay.bounds.x, -150.0);
        assert_eq!(overlay.clip.x, 50.0);
        assert_eq!(overlay.clip.w, 200.0);
        assert!(!overlay.draw_left);
        assert!(overlay.draw_right);
    }

    #[test]
    fn off_screen_selection_has_no_overlay() {
        let mut vp = viewport();
        vp.set_offset(CellPos::new(0, 500));
        assert_eq!(selection_overlay(&SelectionRect::new(0, 0, 4, 4), &vp), None);
    }
}
