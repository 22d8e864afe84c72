use crate::config::ParamValue;
use crate::constants::LINKED_PROP;
use crate::controls::{self, ControlKind, ControlSpec};
use crate::gui::{Controller, Gui};
use crate::SharedStore;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[inline]
fn to_js(value: &ParamValue) -> JsValue {
    match value {
        ParamValue::Number(n) => JsValue::from_f64(*n),
        other => JsValue::from_str(&other.to_css()),
    }
}

#[inline]
fn text_of(raw: &JsValue) -> String {
    raw.as_string().unwrap_or_default()
}

/// Forwards one control's changes to the store.
#[derive(Clone)]
struct ControlHandler {
    spec: ControlSpec,
    store: SharedStore,
    gui: Gui,
    mirror: js_sys::Object,
}

impl ControlHandler {
    fn apply(&self, raw: JsValue) {
        let value = if self.spec.key.is_numeric() {
            match raw.as_f64() {
                Some(n) => controls::value_from_number(n),
                None => controls::value_from_text(self.spec.kind, &text_of(&raw)),
            }
        } else {
            controls::value_from_text(self.spec.kind, &text_of(&raw))
        };
        let applied = self
            .store
            .borrow_mut()
            .update(self.spec.key, self.spec.link, value.clone());
        if let Some(partner) = applied.partner() {
            _ = js_sys::Reflect::set(&self.mirror, &partner.css_name().into(), &to_js(&value));
        }
        if applied.refresh_display {
            self.gui.update_display();
        }
    }
}

fn add_control(target: &Gui, mirror: &js_sys::Object, spec: &ControlSpec) -> Controller {
    let prop = spec.key.css_name();
    match spec.kind {
        ControlKind::Slider { min, max, step } => {
            let ctrl = target.add_range(mirror, prop, min, max);
            match step {
                Some(s) => ctrl.step(s),
                None => ctrl,
            }
        }
        ControlKind::Color => target.add_color(mirror, prop),
        ControlKind::Options(modes) => {
            let options: js_sys::Array = modes
                .iter()
                .map(|m| JsValue::from_str(m.as_str()))
                .collect();
            target.add_options(mirror, prop, &options)
        }
    }
}

fn wire_linked_toggle(gui: &Gui, mirror: &js_sys::Object, store: SharedStore) {
    let closure = Closure::wrap(Box::new(move |v: JsValue| {
        store.borrow_mut().set_linked(v.as_bool().unwrap_or(false));
    }) as Box<dyn FnMut(JsValue)>);
    gui.add_toggle(mirror, LINKED_PROP)
        .on_change(closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Build the dat.GUI panel over a JS mirror of the store's values.
pub fn build(store: SharedStore) -> anyhow::Result<()> {
    let gui = Gui::new().map_err(|e| anyhow::anyhow!("dat.GUI unavailable: {:?}", e))?;

    let mirror = js_sys::Object::new();
    for (key, value) in store.borrow().config().entries() {
        _ = js_sys::Reflect::set(&mirror, &key.css_name().into(), &to_js(&value));
    }
    let linked = store.borrow().is_linked();
    _ = js_sys::Reflect::set(&mirror, &LINKED_PROP.into(), &JsValue::from_bool(linked));

    wire_linked_toggle(&gui, &mirror, store.clone());

    let mut count = 0usize;
    for (group, specs) in controls::panel_layout() {
        let target = match group.folder_name() {
            Some(name) => gui.add_folder(name),
            None => gui.clone(),
        };
        for spec in specs {
            let handler = ControlHandler {
                spec: *spec,
                store: store.clone(),
                gui: gui.clone(),
                mirror: mirror.clone(),
            };
            let closure = Closure::wrap(
                Box::new(move |v: JsValue| handler.apply(v)) as Box<dyn FnMut(JsValue)>
            );
            add_control(&target, &mirror, spec).on_change(closure.as_ref().unchecked_ref());
            closure.forget();
            count += 1;
        }
    }
    log::info!("[panel] {} controls bound", count);
    Ok(())
}
