//! Clipboard transfer: rectangles out, write batches in.
//!
//! Copy puts only the normalized source rectangle on the clipboard, as JSON.
//! Paste reads the source cells from the store when it runs, so edits made to
//! the source between copy and paste are picked up.

use crate::error::{GridError, Result};
use crate::store::GridStore;
use crate::types::{CellWrite, SelectionRect};

/// Serialize the current selection for the clipboard.
pub fn copy_payload(selection: Option<SelectionRect>) -> Result<String> {
    let rect = selection.ok_or(GridError::NothingSelected)?;
    Ok(serde_json::to_string(&rect.normalized())?)
}

/// Parse clipboard text back into a normalized rectangle.
pub fn parse_payload(text: &str) -> Result<SelectionRect> {
    let rect: SelectionRect = serde_json::from_str(text.trim())?;
    Ok(rect.normalized())
}

/// The result of a successful paste: writes to apply and the new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastePlan {
    pub writes: Vec<CellWrite>,
    pub selection: SelectionRect,
}

/// Re-anchor `source` at the top-left of `dest` and read its values.
///
/// Writes are emitted row-major. Absent source cells paste as empty text.
pub fn plan_paste<S: GridStore + ?Sized>(
    source: SelectionRect,
    dest: SelectionRect,
    store: &S,
    max_cells: u64,
) -> Result<PastePlan> {
    let source = source.normalized();
    // A count past u64 is reported as u64::MAX.
    let count = source.cell_count();
    let Some(cells) = count.filter(|&cells| cells <= max_cells) else {
        return Err(GridError::PasteTooLarge {
            cells: count.unwrap_or(u64::MAX),
            limit: max_cells,
        });
    };

    let width = source.width();
    let height = source.height();
    let origin = dest.top_left();
    let dest_x2 = origin
        .x
        .checked_add(width)
        .ok_or(GridError::PasteOutOfRange)?;
    let dest_y2 = origin
        .y
        .checked_add(height)
        .ok_or(GridError::PasteOutOfRange)?;

    let mut writes = Vec::with_capacity(usize::try_from(cells).unwrap_or_default());
    for dy in 0..=height {
        for dx in 0..=width {
            let value = store
                .read(source.y1 + dy, source.x1 + dx)
                .unwrap_or_default();
            writes.push(CellWrite::new(origin.x + dx, origin.y + dy, value));
        }
    }

    Ok(PastePlan {
        writes,
        selection: SelectionRect::new(origin.x, origin.y, dest_x2, dest_y2),
    })
}

/// Handle for one outstanding asynchronous clipboard read.
///
/// Issued by [`Engine::begin_paste`](super::Engine::begin_paste) and redeemed
/// by [`Engine::finish_paste`](super::Engine::finish_paste). A ticket whose
/// epoch no longer matches the engine's was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteTicket {
    pub(crate) epoch: u64,
}
