//! Rectangular selection driven by pointer drags.

use crate::types::{CellPos, SelectionRect};

/// Whether the pointer is currently dragging out a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// A pointer input already mapped to a cell (`None` = over no cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    Down(Option<CellPos>),
    Move(Option<CellPos>),
    Up,
}

/// The current selection and drag state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    rect: Option<SelectionRect>,
    drag: DragState,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw rectangle: anchor first, free corner second.
    pub fn rect(&self) -> Option<SelectionRect> {
        self.rect
    }

    pub fn normalized(&self) -> Option<SelectionRect> {
        self.rect.map(|r| r.normalized())
    }

    pub fn is_active(&self) -> bool {
        self.rect.is_some()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Replace the selection outright; any drag in progress ends.
    pub fn set(&mut self, rect: Option<SelectionRect>) -> bool {
        self.drag = DragState::Idle;
        if self.rect == rect {
            return false;
        }
        self.rect = rect;
        true
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Apply one pointer input. Returns whether the visible rectangle changed.
    ///
    /// - `Down` over a cell starts a drag with anchor = free = that cell.
    /// - `Move` while dragging moves the free corner only.
    /// - `Up` ends the drag and keeps the rectangle.
    ///
    /// Inputs that land on no cell are ignored.
    pub fn transition(&mut self, input: SelectionInput) -> bool {
        match input {
            SelectionInput::Down(Some(cell)) => {
                self.drag = DragState::Dragging;
                let rect = Some(SelectionRect::single(cell));
                let changed = self.rect != rect;
                self.rect = rect;
                changed
            }
            SelectionInput::Move(Some(cell)) if self.is_dragging() => {
                let Some(rect) = self.rect.as_mut() else {
                    return false;
                };
                if rect.free() == cell {
                    return false;
                }
                rect.x2 = cell.x;
                rect.y2 = cell.y;
                true
            }
            SelectionInput::Up => {
                self.drag = DragState::Idle;
                false
            }
            SelectionInput::Down(None) | SelectionInput::Move(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u32, y: u32) -> Option<CellPos> {
        Some(CellPos::new(x, y))
    }

    #[test]
    fn drag_up_and_left_normalizes() {
        let mut sel = SelectionState::new();
        assert!(sel.transition(SelectionInput::Down(cell(2, 3))));
        assert!(sel.is_dragging());
        assert!(sel.transition(SelectionInput::Move(cell(1, 2))));
        assert!(sel.transition(SelectionInput::Move(cell(0, 1))));
        assert!(!sel.transition(SelectionInput::Up));
        assert!(!sel.is_dragging());

        assert_eq!(sel.rect(), Some(SelectionRect::new(2, 3, 0, 1)));
        assert_eq!(sel.normalized(), Some(SelectionRect::new(0, 1, 2, 3)));
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut sel = SelectionState::new();
        sel.transition(SelectionInput::Down(cell(1, 1)));
        sel.transition(SelectionInput::Up);
        assert!(!sel.transition(SelectionInput::Move(cell(4, 4))));
        assert_eq!(sel.rect(), Some(SelectionRect::new(1, 1, 1, 1)));
    }

    #[test]
    fn anchor_stays_fixed_while_dragging() {
        let mut sel = SelectionState::new();
        sel.transition(SelectionInput::Down(cell(5, 5)));
        sel.transition(SelectionInput::Move(cell(9, 0)));
        sel.transition(SelectionInput::Move(cell(0, 9)));
        let rect = sel.rect();
        assert_eq!(rect.map(|r| r.anchor()), cell(5, 5));
        assert_eq!(rect.map(|r| r.free()), cell(0, 9));
    }

    #[test]
    fn off_grid_inputs_change_nothing() {
        let mut sel = SelectionState::new();
        assert!(!sel.transition(SelectionInput::Down(None)));
        assert!(!sel.is_active());
        assert!(!sel.is_dragging());

        sel.transition(SelectionInput::Down(cell(3, 3)));
        assert!(!sel.transition(SelectionInput::Move(None)));
        assert_eq!(sel.rect(), Some(SelectionRect::new(3, 3, 3, 3)));
        assert!(sel.is_dragging());
    }

    #[test]
    fn repeated_move_to_same_cell_is_not_a_change() {
        let mut sel = SelectionState::new();
        sel.transition(SelectionInput::Down(cell(0, 0)));
        assert!(sel.transition(SelectionInput::Move(cell(1, 1))));
        assert!(!sel.transition(SelectionInput::Move(cell(1, 1))));
    }

    #[test]
    fn set_ends_drag() {
        let mut sel = SelectionState::new();
        sel.transition(SelectionInput::Down(cell(0, 0)));
        assert!(sel.set(Some(SelectionRect::new(1, 1, 2, 2))));
        assert_eq!(sel.drag(), DragState::Idle);
        assert!(sel.set(None));
        assert!(!sel.set(None));
    }
}
