// In-browser tests for the trail emitter against a real document.
// Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use cursor_trail::config::TrailConfig;
use cursor_trail::dom::{self, RootStyle};
use cursor_trail::events::TrailEmitter;
use cursor_trail::store::ConfigStore;
use cursor_trail::SharedStore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    dom::window_document().expect("test page has a document")
}

fn store_with_frame(w: &str, h: &str) -> SharedStore {
    let document = document();
    let root = dom::root_element(&document).expect("root element");
    let (w, h) = (w.to_string(), h.to_string());
    let config = TrailConfig::seed(|name: &str| match name {
        "--w-frame" => w.clone(),
        "--h-frame" => h.clone(),
        _ => String::new(),
    });
    Rc::new(RefCell::new(ConfigStore::load(config, RootStyle::new(&root))))
}

/// Fresh container under `body` so tests do not see each other's trails.
fn container() -> web::HtmlElement {
    let document = document();
    let div = document
        .create_element("div")
        .expect("create div")
        .dyn_into::<web::HtmlElement>()
        .expect("div is an HtmlElement");
    document
        .body()
        .expect("test page has a body")
        .append_child(&div)
        .expect("append container");
    div
}

fn circles(parent: &web::HtmlElement) -> u32 {
    parent.query_selector_all(".circle").expect("valid selector").length()
}

fn end_animation(el: &web::Element) {
    let ev = web::AnimationEvent::new("animationend").expect("construct AnimationEvent");
    el.dispatch_event(&ev).expect("dispatch animationend");
}

#[wasm_bindgen_test]
fn emit_appends_one_centered_circle_removed_on_animation_end() {
    let parent = container();
    let emitter = TrailEmitter::new(document(), parent.clone(), store_with_frame("40", "40"));

    emitter.emit(100, 80).expect("emit");
    assert_eq!(circles(&parent), 1);

    let el = parent.last_element_child().expect("circle appended last");
    assert_eq!(el.get_attribute("class").as_deref(), Some("circle"));
    assert_eq!(
        el.get_attribute("style").as_deref(),
        Some("--x: 80px; --y: 60px")
    );

    end_animation(&el);
    assert_eq!(circles(&parent), 0);
    assert!(el.parent_node().is_none());
}

#[wasm_bindgen_test]
fn circle_stays_until_animation_end_fires() {
    let parent = container();
    let emitter = TrailEmitter::new(document(), parent.clone(), store_with_frame("40", "40"));

    emitter.emit(10, 10).expect("emit");
    let el = parent.last_element_child().expect("circle appended");
    assert_eq!(circles(&parent), 1);
    assert!(el.is_connected());

    end_animation(&el);
    assert_eq!(circles(&parent), 0);
}

#[wasm_bindgen_test]
fn each_circle_is_removed_by_its_own_signal() {
    let parent = container();
    let emitter = TrailEmitter::new(document(), parent.clone(), store_with_frame("20", "60"));

    emitter.emit(50, 50).expect("emit first");
    let first = parent.last_element_child().expect("first");
    emitter.emit(70, 90).expect("emit second");
    let second = parent.last_element_child().expect("second");
    assert_eq!(circles(&parent), 2);
    assert_eq!(
        second.get_attribute("style").as_deref(),
        Some("--x: 60px; --y: 60px")
    );

    end_animation(&second);
    assert_eq!(circles(&parent), 1);
    assert!(first.is_connected());

    // A second signal for an already removed circle is harmless
    end_animation(&second);
    assert_eq!(circles(&parent), 1);

    end_animation(&first);
    assert_eq!(circles(&parent), 0);
}

#[wasm_bindgen_test]
fn emit_uses_frame_size_current_at_call_time() {
    let parent = container();
    let store = store_with_frame("40", "40");
    let emitter = TrailEmitter::new(document(), parent.clone(), store.clone());

    store.borrow_mut().update(
        cursor_trail::config::ParamKey::WFrame,
        None,
        cursor_trail::config::ParamValue::Number(100.0),
    );
    emitter.emit(100, 80).expect("emit");
    let el = parent.last_element_child().expect("circle appended");
    assert_eq!(
        el.get_attribute("style").as_deref(),
        Some("--x: 50px; --y: 60px")
    );
    end_animation(&el);
}
