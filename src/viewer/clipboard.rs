//! System clipboard access for `GridView`.
//!
//! Copy writes the serialized selection with `navigator.clipboard.writeText`.
//! Paste reads with `readText`, which resolves asynchronously: the engine
//! issues a ticket first and redeems it when the text arrives, so a view
//! destroyed in between drops the result.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState};

#[cfg(target_arch = "wasm32")]
impl GridView {
    pub(crate) fn copy_to_clipboard_internal(text: &str) {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(text);
        }
    }

    pub(crate) fn start_paste(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let ticket = state.borrow().engine.begin_paste();
        let read = JsFuture::from(window.navigator().clipboard().read_text());
        let weak_state = Rc::downgrade(state);

        wasm_bindgen_futures::spawn_local(async move {
            let text = match read.await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(_) => {
                    tracing::warn!("clipboard read was rejected");
                    return;
                }
            };
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let outcome = {
                let mut guard = state.borrow_mut();
                if guard.destroyed {
                    return;
                }
                let s = &mut *guard;
                s.engine.finish_paste(ticket, &text, &s.store)
            };
            GridView::apply_outcome(&state, outcome);
        });
    }
}
