// Bindings to the page-provided dat.GUI library (`window.dat.GUI`).
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = dat, js_name = GUI)]
    pub type Gui;

    #[wasm_bindgen(constructor, js_namespace = dat, js_class = "GUI", catch)]
    pub fn new() -> Result<Gui, JsValue>;

    #[wasm_bindgen(method, js_name = addFolder)]
    pub fn add_folder(this: &Gui, name: &str) -> Gui;

    /// Numeric slider over `[min, max]`.
    #[wasm_bindgen(method, js_name = add)]
    pub fn add_range(
        this: &Gui,
        object: &JsValue,
        property: &str,
        min: f64,
        max: f64,
    ) -> Controller;

    /// Dropdown over a list of string options.
    #[wasm_bindgen(method, js_name = add)]
    pub fn add_options(
        this: &Gui,
        object: &JsValue,
        property: &str,
        options: &js_sys::Array,
    ) -> Controller;

    /// Checkbox for a boolean property.
    #[wasm_bindgen(method, js_name = add)]
    pub fn add_toggle(this: &Gui, object: &JsValue, property: &str) -> Controller;

    #[wasm_bindgen(method, js_name = addColor)]
    pub fn add_color(this: &Gui, object: &JsValue, property: &str) -> Controller;

    #[wasm_bindgen(method, js_name = updateDisplay)]
    pub fn update_display(this: &Gui);

    pub type Controller;

    #[wasm_bindgen(method, js_name = onChange)]
    pub fn on_change(this: &Controller, callback: &js_sys::Function) -> Controller;

    #[wasm_bindgen(method)]
    pub fn step(this: &Controller, step: f64) -> Controller;
}
