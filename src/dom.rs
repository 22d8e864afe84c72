use crate::constants::{TRAIL_CLASS, TRAIL_TAG};
use crate::store::StyleSink;
use crate::trail::{TrailNode, TrailSpot};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The document's root element (`<html>`).
pub fn root_element(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("root is not an HtmlElement: {:?}", e))
}

/// Computed value of a custom property on `el`; empty when unavailable.
pub fn computed_property(window: &web::Window, el: &web::Element, name: &str) -> String {
    match window.get_computed_style(el) {
        Ok(Some(style)) => style.get_property_value(name).unwrap_or_default(),
        _ => String::new(),
    }
}

/// Inline style of the root element.
pub struct RootStyle {
    style: web::CssStyleDeclaration,
}

impl RootStyle {
    pub fn new(root: &web::HtmlElement) -> Self {
        RootStyle {
            style: root.style(),
        }
    }
}

impl StyleSink for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(e) = self.style.set_property(name, value) {
            log::warn!("[dom] set {} failed: {:?}", name, e);
        }
    }
}

/// Build a trail `<span class="circle">` positioned at `spot`.
pub fn create_trail_element(
    document: &web::Document,
    spot: &TrailSpot,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(TRAIL_TAG)
        .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?;
    _ = el.set_attribute("class", TRAIL_CLASS);
    _ = el.set_attribute("style", &spot.style_attr());
    Ok(el)
}

impl TrailNode for web::Element {
    #[inline]
    fn detach(&self) {
        self.remove();
    }
}
