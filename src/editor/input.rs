//! DOM input overlay for cell editing.
//!
//! An `<input>` element positioned over the cell being edited. It is a sibling
//! of the scroll container, so pointer events on it never reach the grid.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::layout::PixelRect;

/// Input overlay for cell editing.
pub(crate) struct InputOverlay {
    input: HtmlInputElement,
    visible: bool,
}

impl InputOverlay {
    /// Create the hidden `<input>` inside `parent`.
    pub(crate) fn new(document: &Document, parent: &HtmlElement, font: &str) -> Option<Self> {
        let input = document
            .create_element("input")
            .ok()?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        input.set_type("text");
        let style = input.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("z-index", "2");
        let _ = style.set_property("box-sizing", "border-box");
        let _ = style.set_property("border", "none");
        let _ = style.set_property("outline", "none");
        let _ = style.set_property("padding", "0 4px");
        let _ = style.set_property("font", font);
        let _ = style.set_property("background", "#fff");
        let _ = style.set_property("display", "none");
        let _ = parent.append_child(&input);

        Some(Self {
            input,
            visible: false,
        })
    }

    pub(crate) fn element(&self) -> &HtmlInputElement {
        &self.input
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the overlay at `rect` (surface pixels) holding `value`, focused.
    pub(crate) fn show(&mut self, rect: PixelRect, value: &str) {
        self.place(rect);
        let _ = self.input.style().set_property("display", "block");
        self.input.set_value(value);
        self.visible = true;

        // Focus and select all text
        let _ = self.input.focus();
        self.input.select();
    }

    /// Move a visible overlay, e.g. after a scroll.
    pub(crate) fn place(&self, rect: PixelRect) {
        let style = self.input.style();
        let _ = style.set_property("left", &format!("{}px", rect.x));
        let _ = style.set_property("top", &format!("{}px", rect.y));
        let _ = style.set_property("width", &format!("{}px", rect.w));
        let _ = style.set_property("height", &format!("{}px", rect.h));
    }

    /// Hide the input overlay.
    pub(crate) fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        let _ = self.input.style().set_property("display", "none");
        let _ = self.input.blur();
    }

    /// Get current input value.
    pub(crate) fn value(&self) -> String {
        self.input.value()
    }
}

impl Drop for InputOverlay {
    fn drop(&mut self) {
        if let Some(parent) = self.input.parent_node() {
            let _ = parent.remove_child(&self.input);
        }
    }
}
