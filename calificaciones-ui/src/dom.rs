//! DOM helpers shared by the page behaviors.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// All elements matching `selector` under `root`, in document order
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    collect(root.query_selector_all(selector)?)
}

/// All elements matching `selector` in the document
pub fn query_document(selector: &str) -> Result<Vec<Element>, JsValue> {
    collect(document()?.query_selector_all(selector)?)
}

fn collect(list: web_sys::NodeList) -> Result<Vec<Element>, JsValue> {
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(elements)
}

/// Set one inline style property, ignoring non-HTML elements
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn get_style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|el| el.style().get_property_value(property).ok())
        .unwrap_or_default()
}

/// Attach an event listener that lives as long as the page
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
