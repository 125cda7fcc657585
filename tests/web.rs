//! Browser tests for the `GridView` wasm bindings.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_possible_truncation
)]

use gridview::GridView;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    div.style().set_property("width", "600px").unwrap();
    div.style().set_property("height", "400px").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

#[wasm_bindgen_test]
fn builds_dom_and_tears_it_down() {
    let host = container();
    let mut view = GridView::new(host.clone(), JsValue::UNDEFINED).unwrap();
    assert_eq!(host.child_element_count(), 1);
    assert!(host.query_selector("canvas").unwrap().is_some());
    assert!(host.query_selector("input").unwrap().is_some());

    view.destroy();
    assert_eq!(host.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn cells_and_selection_round_trip() {
    let mut view = GridView::new(container(), JsValue::UNDEFINED).unwrap();
    view.set_cell(3, 4, "hello");
    assert_eq!(view.get_cell(3, 4), "hello");
    assert_eq!(view.get_cell(4, 3), "");

    assert_eq!(view.get_selection(), None);
    view.set_selection(2, 2, 0, 1);
    assert_eq!(view.get_selection(), Some(vec![0, 1, 2, 2]));
    view.clear_selection();
    assert_eq!(view.get_selection(), None);

    view.render().unwrap();
    view.destroy();
}

#[wasm_bindgen_test]
fn partial_config_is_accepted() {
    let config = js_sys::JSON::parse(r#"{"cellWidth": 80, "cellHeight": 20}"#).unwrap();
    let mut view = GridView::new(container(), config).unwrap();
    view.destroy();
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let config = js_sys::JSON::parse(r#"{"cellWidth": 0}"#).unwrap();
    assert!(GridView::new(container(), config).is_err());
}

/// Fire a bubbling mouse event at surface position `(x, y)` of `surface`.
fn fire(target: &EventTarget, kind: &str, surface: &HtmlElement, x: f64, y: f64) {
    let rect = surface.get_bounding_client_rect();
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_button(0);
    init.set_client_x((rect.left() + x) as i32);
    init.set_client_y((rect.top() + y) as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn release_outside_the_grid_ends_the_drag() {
    let host = container();
    let mut view = GridView::new(host.clone(), JsValue::UNDEFINED).unwrap();
    let surface: HtmlElement = host
        .query_selector("[data-gridview-scroll]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let document: EventTarget = web_sys::window().unwrap().document().unwrap().into();

    // Press on B2 and drag to D5.
    fire(&surface, "mousedown", &surface, 200.0, 55.0);
    fire(&surface, "mousemove", &surface, 400.0, 121.0);
    assert_eq!(view.get_selection(), Some(vec![1, 1, 3, 4]));

    // Wander off the grid and release there.
    fire(&document, "mousemove", &surface, 5000.0, 5000.0);
    fire(&document, "mouseup", &surface, 5000.0, 5000.0);
    assert_eq!(view.get_selection(), Some(vec![1, 1, 3, 4]));

    // Back over the grid with the button up: nothing follows the pointer.
    fire(&surface, "mousemove", &surface, 300.0, 99.0);
    assert_eq!(view.get_selection(), Some(vec![1, 1, 3, 4]));

    view.destroy();
}
