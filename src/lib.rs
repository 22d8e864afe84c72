#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod config;
pub mod constants;
pub mod controls;
pub mod dom;
pub mod events;
mod gui;
mod panel;
pub mod store;
pub mod trail;

use crate::config::TrailConfig;
use crate::constants::EVENT_DOM_CONTENT_LOADED;
use crate::store::ConfigStore;

pub type SharedStore = Rc<RefCell<ConfigStore<dom::RootStyle>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-trail starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let ready_state = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    if ready_state == "loading" {
        let on_ready = Closure::once_into_js(run);
        document.add_event_listener_with_callback(
            EVENT_DOM_CONTENT_LOADED,
            on_ready.unchecked_ref(),
        )?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let root = dom::root_element(&document)?;

    // Computed style seeds the config; the store then owns the inline baseline.
    let config = TrailConfig::seed(|name| dom::computed_property(&window, &root, name));
    log::info!(
        "[config] frame={}x{} radius={} blur={}..{} scale_end={}",
        config.w_frame,
        config.h_frame,
        config.radius,
        config.blur_start,
        config.blur_end,
        config.scale_end
    );
    let store: SharedStore = Rc::new(RefCell::new(ConfigStore::load(
        config,
        dom::RootStyle::new(&root),
    )));

    // The trail still runs without the panel.
    if let Err(e) = panel::build(store.clone()) {
        log::error!("[panel] {:?}", e);
    }

    let emitter = events::TrailEmitter::new(document.clone(), body, store);
    events::wire_mousemove(&document, emitter);
    Ok(())
}
