//! Viewport & interaction engine.
//!
//! [`Engine`] owns all mutable UI state of one grid view (scroll offset,
//! selection, edit session, scroll-area bound) and advances it one
//! [`InputEvent`] at a time. Cell values stay with the caller's
//! [`GridStore`]: the engine only reads them and returns write batches.
//!
//! Every failure inside a handler (bad clipboard text, nothing selected, ...)
//! is logged and turned into [`Outcome::Unchanged`], so the input loop never
//! stops on an error.

pub mod clipboard;
pub mod edit;
pub mod events;
pub mod scroll;
pub mod selection;

pub use clipboard::{PastePlan, PasteTicket};
pub use edit::{EditInput, EditOutcome, EditSession};
pub use events::InputEvent;
pub use scroll::ScrollArea;
pub use selection::{DragState, SelectionInput, SelectionState};

use crate::cell_ref::cell_name;
use crate::error::{GridError, Result};
use crate::layout::{PixelRect, Viewport};
use crate::render::Frame;
use crate::store::GridStore;
use crate::types::{CellPos, CellWrite, GridConfig, SelectionRect};

/// What the host must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed.
    Unchanged,
    /// Repaint; no values changed.
    Redraw,
    /// Apply these writes to the store as one batch, notify listeners, repaint.
    Commit(Vec<CellWrite>),
    /// Put this text on the system clipboard.
    Copy(String),
}

/// Interaction state of one grid view.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GridConfig,
    viewport: Viewport,
    selection: SelectionState,
    edit: EditSession,
    scroll: ScrollArea,
    /// Bumped to invalidate outstanding paste tickets.
    paste_epoch: u64,
    needs_render: bool,
}

impl Engine {
    /// Create an engine for a `width` x `height` pixel surface.
    pub fn new(config: GridConfig, width: f64, height: f64) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::new(&config, width, height);
        let scroll = ScrollArea::new(config.initial_scroll_bound, config.scroll_padding);
        Ok(Self {
            config,
            viewport,
            selection: SelectionState::new(),
            edit: EditSession::new(),
            scroll,
            paste_epoch: 0,
            needs_render: true,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Raw selection (anchor corner first).
    pub fn selection(&self) -> Option<SelectionRect> {
        self.selection.rect()
    }

    pub fn is_dragging(&self) -> bool {
        self.selection.is_dragging()
    }

    pub fn edit_target(&self) -> Option<CellPos> {
        self.edit.target()
    }

    pub fn edit_buffer(&self) -> &str {
        self.edit.buffer()
    }

    /// Placement of the text input while a cell is being edited.
    pub fn edit_overlay(&self) -> Option<PixelRect> {
        self.edit.overlay_rect(&self.viewport)
    }

    /// Current virtual scroll bounds per axis.
    pub fn scroll_bounds(&self) -> (f64, f64) {
        self.scroll.bounds()
    }

    /// Size the scroll spacer must have for the current surface.
    pub fn scroll_extent(&self) -> (f64, f64) {
        self.scroll.extent(self.viewport.width(), self.viewport.height())
    }

    /// Replace the selection programmatically.
    pub fn set_selection(&mut self, rect: Option<SelectionRect>) {
        if self.selection.set(rect) {
            self.needs_render = true;
        }
    }

    /// Force a repaint on the next frame (e.g. after the store changed).
    pub fn invalidate(&mut self) {
        self.needs_render = true;
    }

    /// Whether a repaint is due.
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Whether a repaint is due; clears the flag.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Build the frame for the current state.
    pub fn frame<S: GridStore + ?Sized>(&self, store: &S) -> Frame {
        Frame::build(&self.viewport, self.selection.rect(), store, &self.config)
    }

    /// Advance the state by one input event.
    pub fn handle<S: GridStore + ?Sized>(&mut self, event: InputEvent, store: &S) -> Outcome {
        match self.dispatch(event, store) {
            Ok(outcome) => {
                if matches!(outcome, Outcome::Redraw | Outcome::Commit(_)) {
                    self.needs_render = true;
                }
                outcome
            }
            Err(err) => {
                tracing::warn!(error = %err, "grid input ignored");
                Outcome::Unchanged
            }
        }
    }

    /// Start an asynchronous paste; redeem the ticket with [`Engine::finish_paste`]
    /// once the clipboard text arrives.
    pub fn begin_paste(&self) -> PasteTicket {
        PasteTicket {
            epoch: self.paste_epoch,
        }
    }

    /// Complete a paste against the state at resolution time.
    ///
    /// Overlapping pastes each apply against whatever selection and values
    /// exist when they resolve, so the last to resolve wins. Tickets issued
    /// before [`Engine::cancel_pending_pastes`] are dropped.
    pub fn finish_paste<S: GridStore + ?Sized>(
        &mut self,
        ticket: PasteTicket,
        payload: &str,
        store: &S,
    ) -> Outcome {
        if ticket.epoch != self.paste_epoch {
            tracing::warn!(error = %GridError::StalePaste, "grid input ignored");
            return Outcome::Unchanged;
        }
        self.handle(InputEvent::Paste(payload.to_string()), store)
    }

    /// Invalidate every outstanding paste ticket (teardown).
    pub fn cancel_pending_pastes(&mut self) {
        self.paste_epoch = self.paste_epoch.wrapping_add(1);
    }

    fn dispatch<S: GridStore + ?Sized>(&mut self, event: InputEvent, store: &S) -> Result<Outcome> {
        let outcome = match event {
            InputEvent::PointerDown { x, y } => {
                // Clicking away from an open editor abandons it.
                let closed = self.edit.transition(EditInput::Cancel) == EditOutcome::Changed;
                let cell = self.viewport.pixel_to_cell(x, y);
                let moved = self.selection.transition(SelectionInput::Down(cell));
                redraw_if(closed || moved)
            }
            InputEvent::PointerMove { x, y } => {
                if !self.selection.is_dragging() {
                    return Ok(Outcome::Unchanged);
                }
                let cell = self.viewport.pixel_to_cell(x, y);
                redraw_if(self.selection.transition(SelectionInput::Move(cell)))
            }
            InputEvent::PointerUp => {
                self.selection.transition(SelectionInput::Up);
                Outcome::Unchanged
            }
            InputEvent::DoubleClick { x, y } => {
                let Some(cell) = self.viewport.pixel_to_cell(x, y) else {
                    return Ok(Outcome::Unchanged);
                };
                if self.edit.is_active() {
                    return Ok(Outcome::Unchanged);
                }
                self.selection.end_drag();
                let current = store.read(cell.y, cell.x).unwrap_or_default().to_string();
                tracing::debug!(cell = %cell_name(cell.x, cell.y), "edit started");
                let outcome = self.edit.transition(EditInput::Activate { cell, current });
                redraw_if(outcome == EditOutcome::Changed)
            }
            InputEvent::Scroll { left, top } => self.scroll_to(left, top),
            InputEvent::Resize { width, height } => {
                redraw_if(self.viewport.resize(width, height))
            }
            InputEvent::EditInput(text) => {
                self.edit.transition(EditInput::Text(text));
                Outcome::Unchanged
            }
            InputEvent::EditConfirm => match self.edit.transition(EditInput::Confirm) {
                EditOutcome::Commit(write) => Outcome::Commit(vec![write]),
                _ => Outcome::Unchanged,
            },
            InputEvent::EditCancel => {
                redraw_if(self.edit.transition(EditInput::Cancel) == EditOutcome::Changed)
            }
            InputEvent::Copy => Outcome::Copy(clipboard::copy_payload(self.selection.rect())?),
            InputEvent::Paste(payload) => self.paste(&payload, store)?,
        };
        Ok(outcome)
    }

    fn scroll_to(&mut self, left: f64, top: f64) -> Outcome {
        let offset = CellPos::new(
            scroll::cell_offset(left, self.viewport.cell_width()),
            scroll::cell_offset(top, self.viewport.cell_height()),
        );
        let grew = self.scroll.on_scroll(left, top);
        if grew {
            let (bound_x, bound_y) = self.scroll.bounds();
            tracing::debug!(bound_x, bound_y, "scroll area grew");
        }
        let moved = self.viewport.set_offset(offset);
        redraw_if(grew || moved)
    }

    fn paste<S: GridStore + ?Sized>(&mut self, payload: &str, store: &S) -> Result<Outcome> {
        let source = clipboard::parse_payload(payload)?;
        let dest = self.selection.rect().ok_or(GridError::NothingSelected)?;
        let plan = clipboard::plan_paste(source, dest, store, self.config.max_paste_cells)?;
        tracing::debug!(
            from = %cell_name(source.x1, source.y1),
            to = %cell_name(plan.selection.x1, plan.selection.y1),
            cells = plan.writes.len(),
            "paste"
        );
        self.selection.set(Some(plan.selection));
        Ok(Outcome::Commit(plan.writes))
    }
}

fn redraw_if(changed: bool) -> Outcome {
    if changed {
        Outcome::Redraw
    } else {
        Outcome::Unchanged
    }
}
