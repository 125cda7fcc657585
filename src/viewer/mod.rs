//! Main GridView struct - the browser entry point.
//!
//! This module provides the WASM-exported `GridView` struct that:
//! - Builds the DOM scaffold (canvas, scroll container with spacer, edit input)
//! - Owns the interaction engine and the cell store
//! - Applies write batches and forwards them to the JS change callback
//! - Coalesces redraws into one animation frame
//!
//! Event handlers for pointer, scroll, keyboard and clipboard input are
//! registered when the view is created - no manual JavaScript wiring required.

mod clipboard;
mod events;
mod scroll;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{
    Event, EventTarget, HtmlCanvasElement, HtmlDivElement, HtmlElement, KeyboardEvent, MouseEvent,
};

#[cfg(target_arch = "wasm32")]
use crate::editor::input::InputOverlay;
use crate::engine::{Engine, InputEvent, Outcome};
#[cfg(target_arch = "wasm32")]
use crate::error::GridError;
#[cfg(not(target_arch = "wasm32"))]
use crate::render::TextRenderer;
#[cfg(target_arch = "wasm32")]
use crate::render::{CanvasRenderer, RenderBackend};
use crate::store::{GridStore, SparseGrid};
use crate::types::{CellWrite, GridConfig, SelectionRect};

/// Shared state that can be accessed by event handlers (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) engine: Engine,
    pub(crate) store: SparseGrid,
    pub(crate) renderer: CanvasRenderer,
    pub(crate) overlay: Option<InputOverlay>,
    pub(crate) canvas: HtmlCanvasElement,
    pub(crate) spacer: HtmlDivElement,
    /// Spacer size last written to the DOM
    pub(crate) spacer_extent: (f64, f64),
    pub(crate) on_change: Option<Function>,
    pub(crate) raf_id: Option<i32>,
    pub(crate) raf_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) destroyed: bool,
}

/// A DOM listener kept alive until `destroy`.
#[cfg(target_arch = "wasm32")]
pub(crate) enum Listener {
    Mouse(Closure<dyn FnMut(MouseEvent)>),
    Key(Closure<dyn FnMut(KeyboardEvent)>),
    Plain(Closure<dyn FnMut(Event)>),
}

#[cfg(target_arch = "wasm32")]
impl Listener {
    fn function(&self) -> &Function {
        match self {
            Self::Mouse(c) => c.as_ref().unchecked_ref(),
            Self::Key(c) => c.as_ref().unchecked_ref(),
            Self::Plain(c) => c.as_ref().unchecked_ref(),
        }
    }
}

/// The grid view exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    listeners: Vec<(EventTarget, &'static str, Listener)>,
    #[cfg(target_arch = "wasm32")]
    root: HtmlDivElement,
    #[cfg(target_arch = "wasm32")]
    scroll_container: HtmlDivElement,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    engine: Engine,
    #[cfg(not(target_arch = "wasm32"))]
    store: SparseGrid,
    #[cfg(not(target_arch = "wasm32"))]
    renderer: TextRenderer,
    #[cfg(not(target_arch = "wasm32"))]
    clipboard: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    changes: Vec<Vec<CellWrite>>,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a grid view filling `container`.
    ///
    /// `config` is an optional partial config object (camelCase keys); missing
    /// fields keep their defaults.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::cast_possible_truncation, clippy::needless_pass_by_value)]
    pub fn new(container: HtmlElement, config: JsValue) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        crate::logging::init_console_logging();

        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| GridError::Config(e.to_string()))?
        };

        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let dpr = window.device_pixel_ratio() as f32;
        let width = f64::from(container.client_width()).max(1.0);
        let height = f64::from(container.client_height()).max(1.0);

        let (root, canvas, scroll_container, spacer) =
            Self::build_dom(&document, &container).ok_or("Failed to build grid DOM")?;

        let mut renderer =
            CanvasRenderer::new(canvas.clone(), config.colors.clone(), config.font.clone())?;
        renderer.init()?;

        let overlay = InputOverlay::new(&document, &root, &config.font);
        let engine = Engine::new(config, width, height)?;
        tracing::debug!(width, height, dpr, "grid view created");

        let state = Rc::new(RefCell::new(SharedState {
            engine,
            store: SparseGrid::new(),
            renderer,
            overlay,
            canvas,
            spacer,
            spacer_extent: (0.0, 0.0),
            on_change: None,
            raf_id: None,
            raf_closure: None,
            destroyed: false,
        }));

        Self::resize_surface(&state, width, height, dpr);
        Self::sync_spacer(&state);

        let mut view = GridView {
            state,
            listeners: Vec::new(),
            root,
            scroll_container,
        };
        view.register_listeners();
        Self::schedule_render(&view.state);
        Ok(view)
    }

    /// Set the value of cell (`x`, `y`). Does not fire the change callback.
    pub fn set_cell(&mut self, x: u32, y: u32, value: &str) {
        {
            let mut s = self.state.borrow_mut();
            s.store.set(y, x, value);
            s.engine.invalidate();
        }
        Self::schedule_render(&self.state);
    }

    /// Value of cell (`x`, `y`), empty when unset.
    pub fn get_cell(&self, x: u32, y: u32) -> String {
        self.state
            .borrow()
            .store
            .read(y, x)
            .unwrap_or_default()
            .to_string()
    }

    /// Bulk-load a row-major 2D array of strings starting at A1.
    pub fn load_rows(&mut self, rows: JsValue) -> Result<(), JsValue> {
        let rows: Vec<Vec<String>> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| GridError::Other(format!("load_rows expects string[][]: {e}")))?;
        {
            let mut s = self.state.borrow_mut();
            s.store.load_rows(rows);
            s.engine.invalidate();
        }
        Self::schedule_render(&self.state);
        Ok(())
    }

    /// Register the callback receiving each committed batch as
    /// `[{x, y, value}, ...]`.
    pub fn set_on_change(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().on_change = callback;
    }

    /// Normalized selection as `[x1, y1, x2, y2]`.
    pub fn get_selection(&self) -> Option<Vec<u32>> {
        let s = self.state.borrow();
        let sel = s.engine.selection()?.normalized();
        Some(vec![sel.x1, sel.y1, sel.x2, sel.y2])
    }

    pub fn set_selection(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        self.state
            .borrow_mut()
            .engine
            .set_selection(Some(SelectionRect::new(x1, y1, x2, y2)));
        Self::schedule_render(&self.state);
    }

    pub fn clear_selection(&mut self) {
        self.state.borrow_mut().engine.set_selection(None);
        Self::schedule_render(&self.state);
    }

    /// Paint immediately, bypassing frame coalescing.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.state.borrow_mut().engine.invalidate();
        Self::render_now(&self.state)?;
        Ok(())
    }

    /// Resize the drawing surface to `width` x `height` CSS pixels.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f32) {
        Self::resize_surface(&self.state, width, height, dpr);
        Self::dispatch(&self.state, InputEvent::Resize { width, height });
    }

    /// Remove all listeners and DOM nodes, cancel the pending frame and any
    /// outstanding clipboard reads.
    pub fn destroy(&mut self) {
        for (target, kind, listener) in self.listeners.drain(..) {
            let _ = target.remove_event_listener_with_callback(kind, listener.function());
        }
        Self::cancel_render(&self.state);
        {
            let mut s = self.state.borrow_mut();
            s.destroyed = true;
            s.engine.cancel_pending_pastes();
            s.on_change = None;
            s.overlay = None;
        }
        self.root.remove();
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Create root > (canvas, scroll container > spacer) inside `container`.
    fn build_dom(
        document: &web_sys::Document,
        container: &HtmlElement,
    ) -> Option<(HtmlDivElement, HtmlCanvasElement, HtmlDivElement, HtmlDivElement)> {
        let create_div = || -> Option<HtmlDivElement> {
            document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
        };
        let root = create_div()?;
        let scroll_container = create_div()?;
        let spacer = create_div()?;
        let canvas = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;

        let root_style = root.style();
        let _ = root_style.set_property("position", "relative");
        let _ = root_style.set_property("width", "100%");
        let _ = root_style.set_property("height", "100%");
        let _ = root_style.set_property("overflow", "hidden");

        // Canvas: viewport-sized, behind the scroll container.
        let canvas_style = canvas.style();
        let _ = canvas_style.set_property("position", "absolute");
        let _ = canvas_style.set_property("top", "0");
        let _ = canvas_style.set_property("left", "0");
        let _ = canvas_style.set_property("pointer-events", "none");
        let _ = canvas_style.set_property("z-index", "0");

        // Scroll container: transparent, on top of the canvas, receives input.
        let container_style = scroll_container.style();
        let _ = container_style.set_property("position", "absolute");
        let _ = container_style.set_property("inset", "0");
        let _ = container_style.set_property("overflow", "auto");
        let _ = container_style.set_property("z-index", "1");
        let _ = container_style.set_property("background", "transparent");
        let _ = scroll_container.set_attribute("data-gridview-scroll", "");

        let spacer_style = spacer.style();
        let _ = spacer_style.set_property("position", "absolute");
        let _ = spacer_style.set_property("top", "0");
        let _ = spacer_style.set_property("left", "0");
        let _ = spacer_style.set_property("width", "1px");
        let _ = spacer_style.set_property("height", "1px");

        let _ = scroll_container.append_child(&spacer);
        let _ = root.append_child(&canvas);
        let _ = root.append_child(&scroll_container);
        let _ = container.append_child(&root);
        Some((root, canvas, scroll_container, spacer))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize_surface(state: &Rc<RefCell<SharedState>>, width: f64, height: f64, dpr: f32) {
        let mut s = state.borrow_mut();
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let physical_w = (width * f64::from(dpr)).round().max(1.0) as u32;
        let physical_h = (height * f64::from(dpr)).round().max(1.0) as u32;
        s.renderer.resize(physical_w, physical_h, dpr);
        let style = s.canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    /// Feed one event to the engine and carry out its outcome.
    pub(crate) fn dispatch(state: &Rc<RefCell<SharedState>>, event: InputEvent) {
        let outcome = {
            let mut guard = state.borrow_mut();
            if guard.destroyed {
                return;
            }
            let s = &mut *guard;
            s.engine.handle(event, &s.store)
        };
        Self::apply_outcome(state, outcome);
    }

    pub(crate) fn apply_outcome(state: &Rc<RefCell<SharedState>>, outcome: Outcome) {
        match outcome {
            Outcome::Unchanged | Outcome::Redraw => {}
            Outcome::Commit(writes) => Self::commit(state, &writes),
            Outcome::Copy(text) => Self::copy_to_clipboard_internal(&text),
        }
        Self::sync_edit_overlay(state);
        Self::sync_spacer(state);
        Self::schedule_render(state);
    }

    /// Apply a batch to the store in one step, then notify JS.
    fn commit(state: &Rc<RefCell<SharedState>>, writes: &[CellWrite]) {
        let callback = {
            let mut s = state.borrow_mut();
            s.store.apply_batch(writes);
            s.engine.invalidate();
            s.on_change.clone()
        };
        let Some(callback) = callback else {
            return;
        };
        match serde_wasm_bindgen::to_value(writes) {
            Ok(batch) => {
                let _ = callback.call1(&JsValue::NULL, &batch);
            }
            Err(err) => tracing::warn!(error = %err, "change batch not serializable"),
        }
    }

    /// Show, move or hide the edit input to match the engine's edit session.
    fn sync_edit_overlay(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        let rect = s.engine.edit_overlay();
        let buffer = s.engine.edit_buffer().to_string();
        let Some(overlay) = s.overlay.as_mut() else {
            return;
        };
        match rect {
            Some(rect) if overlay.is_visible() => overlay.place(rect),
            Some(rect) => overlay.show(rect, &buffer),
            None => overlay.hide(),
        }
    }
}

// ============================================================================
// Non-WASM32 Implementation (for testing)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a headless view for testing. Renders with the text backend.
    pub fn new_test(width: f64, height: f64) -> crate::error::Result<Self> {
        Self::with_config(GridConfig::default(), width, height)
    }

    pub fn with_config(config: GridConfig, width: f64, height: f64) -> crate::error::Result<Self> {
        Ok(Self {
            engine: Engine::new(config, width, height)?,
            store: SparseGrid::new(),
            renderer: TextRenderer::new(),
            clipboard: None,
            changes: Vec::new(),
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Feed one event, applying any committed batch to the store.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        let outcome = self.engine.handle(event, &self.store);
        match &outcome {
            Outcome::Commit(writes) => {
                self.store.apply_batch(writes);
                self.engine.invalidate();
                self.changes.push(writes.clone());
            }
            Outcome::Copy(text) => self.clipboard = Some(text.clone()),
            Outcome::Unchanged | Outcome::Redraw => {}
        }
        outcome
    }

    /// Paste whatever the last copy put on the clipboard.
    pub fn paste_clipboard(&mut self) -> Outcome {
        let text = self.clipboard.clone().unwrap_or_default();
        self.handle(InputEvent::Paste(text))
    }

    pub fn clipboard_text(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Batches delivered to the change listener so far.
    pub fn changes(&self) -> &[Vec<CellWrite>] {
        &self.changes
    }

    pub fn set_cell(&mut self, x: u32, y: u32, value: &str) {
        self.store.set(y, x, value);
        self.engine.invalidate();
    }

    pub fn get_cell(&self, x: u32, y: u32) -> String {
        self.store.read(y, x).unwrap_or_default().to_string()
    }

    pub fn load_rows(&mut self, rows: Vec<Vec<String>>) {
        self.store.load_rows(rows);
        self.engine.invalidate();
    }

    pub fn get_selection(&self) -> Option<Vec<u32>> {
        let sel = self.engine.selection()?.normalized();
        Some(vec![sel.x1, sel.y1, sel.x2, sel.y2])
    }

    pub fn set_selection(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        self.engine
            .set_selection(Some(SelectionRect::new(x1, y1, x2, y2)));
    }

    pub fn clear_selection(&mut self) {
        self.engine.set_selection(None);
    }

    /// Render the current frame as text.
    pub fn render(&mut self) -> crate::error::Result<&str> {
        use crate::render::RenderBackend;

        self.engine.take_needs_render();
        let frame = self.engine.frame(&self.store);
        self.renderer.render(&frame)?;
        Ok(self.renderer.output())
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.handle(InputEvent::Resize { width, height });
    }

    pub fn destroy(&mut self) {
        self.engine.cancel_pending_pastes();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn edit_commit_reaches_store_and_listener() {
        let mut view = GridView::new_test(1000.0, 800.0).unwrap();
        view.set_cell(0, 0, "1");
        view.handle(InputEvent::DoubleClick { x: 60.0, y: 30.0 });
        view.handle(InputEvent::EditInput("7".to_string()));
        view.handle(InputEvent::EditConfirm);

        assert_eq!(view.get_cell(0, 0), "7");
        assert_eq!(view.changes(), &[vec![CellWrite::new(0, 0, "7")]]);
    }

    #[test]
    fn text_render_reflects_selection() {
        let mut view = GridView::new_test(250.0, 44.0).unwrap();
        view.load_rows(vec![vec!["a".to_string(), "b".to_string()]]);
        view.set_selection(1, 0, 1, 0);
        let out = view.render().unwrap().to_string();
        assert!(out.contains("|*b"));
        assert!(out.contains("| a"));
        assert_eq!(view.get_selection(), Some(vec![1, 0, 1, 0]));
        view.clear_selection();
        assert_eq!(view.get_selection(), None);
    }
}
