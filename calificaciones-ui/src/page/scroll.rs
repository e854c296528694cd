//! Smooth scrolling for in-page anchor links.

use wasm_bindgen::JsValue;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

pub fn smooth_anchor_scroll() -> Result<(), JsValue> {
    for link in dom::query_document("a[href^=\"#\"]")? {
        let anchor = link.clone();
        dom::listen(&link, "click", move |event: MouseEvent| {
            let Some(target) = anchor_target(&anchor) else {
                return;
            };
            event.prevent_default();

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}

/// The element a `#fragment` link points at. A bare `#` has none.
fn anchor_target(link: &Element) -> Option<Element> {
    let href = link.get_attribute("href")?;
    if href.len() < 2 {
        return None;
    }
    dom::document().ok()?.query_selector(&href).ok().flatten()
}
