use super::subscribe_once;
use crate::constants::{EVENT_ANIMATION_END, EVENT_MOUSEMOVE};
use crate::dom;
use crate::trail::{TrailId, TrailLedger, TrailSpot};
use crate::SharedStore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawns one trail element per pointer move.
#[derive(Clone)]
pub struct TrailEmitter {
    document: web::Document,
    body: web::HtmlElement,
    store: SharedStore,
    ledger: Rc<RefCell<TrailLedger<web::Element>>>,
}

impl TrailEmitter {
    pub fn new(document: web::Document, body: web::HtmlElement, store: SharedStore) -> Self {
        TrailEmitter {
            document,
            body,
            store,
            ledger: Rc::new(RefCell::new(TrailLedger::default())),
        }
    }

    /// Append a trail element centered on the frame at (`client_x`, `client_y`)
    /// and schedule its removal for when its animation ends.
    pub fn emit(&self, client_x: i32, client_y: i32) -> anyhow::Result<TrailId> {
        let frame = self.store.borrow().config().frame_size();
        let spot = TrailSpot::at(client_x, client_y, frame);
        let el = dom::create_trail_element(&self.document, &spot)?;
        self.body
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append trail: {:?}", e))?;

        let id = self.ledger.borrow_mut().spawn(el.clone());
        log::debug!(
            "[trail] {:?} at {:?}, live={}",
            id,
            spot.offset,
            self.ledger.borrow().live()
        );
        let ledger = self.ledger.clone();
        subscribe_once(&el, EVENT_ANIMATION_END, move |_ev| {
            let mut ledger = ledger.borrow_mut();
            if ledger.complete(id) {
                log::debug!("[trail] {:?} removed, live={}", id, ledger.live());
            }
        })?;
        Ok(id)
    }
}

pub fn wire_mousemove(document: &web::Document, emitter: TrailEmitter) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // client_x/client_y arrive as whole pixels
        if let Err(e) = emitter.emit(ev.client_x(), ev.client_y()) {
            log::error!("[trail] emit failed: {:?}", e);
        }
    }) as Box<dyn FnMut(_)>);

    _ = document
        .add_event_listener_with_callback(EVENT_MOUSEMOVE, closure.as_ref().unchecked_ref());

    closure.forget();
}
