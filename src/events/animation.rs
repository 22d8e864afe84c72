use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `handler` on the first `event` dispatched at `target`, then detach.
///
/// The browser drops the listener after one call (`once`), and the closure
/// frees itself once invoked. If the event never fires the listener stays.
pub fn subscribe_once(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnOnce(web::Event) + 'static,
) -> anyhow::Result<()> {
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    opts.set_capture(true);
    let callback = Closure::once_into_js(move |ev: web::Event| handler(ev));
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!("subscribe {}: {:?}", event, e))
}
