//! Scroll area and frame scheduling for `GridView`.
//!
//! The spacer inside the scroll container is sized to the engine's scroll
//! extent, and repaints are coalesced into one `requestAnimationFrame`.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::render::RenderBackend;

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Resize the spacer when the scroll area grew.
    pub(crate) fn sync_spacer(state: &Rc<RefCell<SharedState>>) {
        let (spacer, (width, height)) = {
            let mut s = state.borrow_mut();
            let extent = s.engine.scroll_extent();
            if s.spacer_extent == extent {
                return;
            }
            s.spacer_extent = extent;
            (s.spacer.clone(), extent)
        };
        // Borrow released: resizing the spacer can fire a scroll event.
        let style = spacer.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    /// Request one animation frame if a repaint is due and none is pending.
    pub(crate) fn schedule_render(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        if s.destroyed || s.raf_id.is_some() || !s.engine.needs_render() {
            return;
        }
        if s.raf_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    state.borrow_mut().raf_id = None;
                    if let Err(err) = GridView::render_now(&state) {
                        tracing::warn!(error = %err, "grid render failed");
                    }
                }
            }) as Box<dyn FnMut()>);
            s.raf_closure = Some(closure);
        }
        let Some(callback) = s.raf_closure.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => s.raf_id = Some(id),
            Err(_) => s.raf_id = None,
        }
    }

    /// Paint now if a repaint is due.
    pub(crate) fn render_now(state: &Rc<RefCell<SharedState>>) -> Result<()> {
        let mut guard = state.borrow_mut();
        let s = &mut *guard;
        if s.destroyed || !s.engine.take_needs_render() {
            return Ok(());
        }
        let frame = s.engine.frame(&s.store);
        s.renderer.render(&frame)
    }

    /// Cancel the pending animation frame, if any.
    pub(crate) fn cancel_render(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        if let Some(id) = s.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        s.raf_closure = None;
    }
}
