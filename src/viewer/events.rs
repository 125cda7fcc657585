//! DOM listener wiring for `GridView`.
//!
//! Every listener translates its DOM event into an [`InputEvent`] and hands it
//! to `GridView::dispatch`. Listeners are stored on the view so `destroy` can
//! detach them.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

#[cfg(target_arch = "wasm32")]
use super::{GridView, Listener, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::engine::InputEvent;

/// Pointer position relative to `element`, in CSS pixels.
#[cfg(target_arch = "wasm32")]
fn local_position(element: &HtmlElement, event: &MouseEvent) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    )
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    pub(crate) fn register_listeners(&mut self) {
        let container: HtmlElement = self.scroll_container.clone().into();

        let surface: EventTarget = container.clone().into();
        self.listen_mouse(surface.clone(), &container, "mousedown", |state, el, event| {
            // Primary button only
            if event.button() != 0 {
                return;
            }
            let (x, y) = local_position(el, event);
            Self::dispatch(state, InputEvent::PointerDown { x, y });
        });
        self.listen_mouse(surface, &container, "dblclick", |state, el, event| {
            let (x, y) = local_position(el, event);
            Self::dispatch(state, InputEvent::DoubleClick { x, y });
        });

        // A drag that leaves the grid keeps tracking, and releasing anywhere
        // ends it.
        let document = web_sys::window().and_then(|w| w.document());
        if let Some(document) = &document {
            let page: EventTarget = document.clone().into();
            self.listen_mouse(page.clone(), &container, "mousemove", |state, el, event| {
                if !state.borrow().engine.is_dragging() {
                    return;
                }
                let (x, y) = local_position(el, event);
                Self::dispatch(state, InputEvent::PointerMove { x, y });
            });
            self.listen_mouse(page, &container, "mouseup", |state, _el, _event| {
                if state.borrow().engine.is_dragging() {
                    Self::dispatch(state, InputEvent::PointerUp);
                }
            });
        }

        {
            let state = Rc::clone(&self.state);
            let container_for_scroll = self.scroll_container.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let left = f64::from(container_for_scroll.scroll_left());
                let top = f64::from(container_for_scroll.scroll_top());
                Self::dispatch(&state, InputEvent::Scroll { left, top });
            }) as Box<dyn FnMut(Event)>);
            self.attach(container.clone().into(), "scroll", Listener::Plain(closure));
        }

        self.register_edit_listeners();

        // Copy/paste shortcuts are global, like a spreadsheet's.
        if let Some(document) = document {
            let state = Rc::clone(&self.state);
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if Self::internal_key_down(&state, &event.key(), event.ctrl_key() || event.meta_key())
                {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            self.attach(document.into(), "keydown", Listener::Key(closure));
        }
    }

    /// Wire the edit `<input>`: text changes, Enter and Escape.
    fn register_edit_listeners(&mut self) {
        let input = {
            let s = self.state.borrow();
            s.overlay.as_ref().map(|o| o.element().clone())
        };
        let Some(input) = input else {
            return;
        };

        {
            let state = Rc::clone(&self.state);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let value = state.borrow().overlay.as_ref().map(|o| o.value());
                if let Some(value) = value {
                    Self::dispatch(&state, InputEvent::EditInput(value));
                }
            }) as Box<dyn FnMut(Event)>);
            self.attach(input.clone().into(), "input", Listener::Plain(closure));
        }

        {
            let state = Rc::clone(&self.state);
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                // Keys typed into the editor never reach the grid shortcuts.
                event.stop_propagation();
                if let Some(edit) = InputEvent::from_edit_key(&event.key()) {
                    event.prevent_default();
                    Self::dispatch(&state, edit);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            self.attach(input.into(), "keydown", Listener::Key(closure));
        }
    }

    /// Listen for `kind` on `target`, reporting positions relative to `element`.
    fn listen_mouse<F>(
        &mut self,
        target: EventTarget,
        element: &HtmlElement,
        kind: &'static str,
        handler: F,
    ) where
        F: Fn(&Rc<RefCell<SharedState>>, &HtmlElement, &MouseEvent) + 'static,
    {
        let state = Rc::clone(&self.state);
        let element_ref = element.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(&state, &element_ref, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        self.attach(target, kind, Listener::Mouse(closure));
    }

    fn attach(&mut self, target: EventTarget, kind: &'static str, listener: Listener) {
        target
            .add_event_listener_with_callback(kind, listener.function())
            .ok();
        self.listeners.push((target, kind, listener));
    }

    /// Grid keyboard shortcuts. Returns whether the key was consumed.
    pub(crate) fn internal_key_down(
        state: &Rc<RefCell<SharedState>>,
        key: &str,
        ctrl: bool,
    ) -> bool {
        if !ctrl || state.borrow().engine.edit_target().is_some() {
            return false;
        }
        match key {
            "c" | "C" => {
                Self::dispatch(state, InputEvent::Copy);
                true
            }
            "v" | "V" => {
                Self::start_paste(state);
                true
            }
            _ => false,
        }
    }
}
