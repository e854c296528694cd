//! Entrance animation: cards and sections slide in the first time they
//! scroll into view.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

const REVEAL_SELECTOR: &str = ".stat-card, .action-card, .section";
const REVEAL_THRESHOLD: f64 = 0.1;

pub fn animate_on_scroll() -> Result<(), JsValue> {
    let elements = dom::query_document(REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_style(&target, "opacity", "1");
                    dom::set_style(&target, "transform", "translateY(0)");
                    // Each element animates once
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    // Hidden before observing so nothing flashes in its final position
    for element in &elements {
        dom::set_style(element, "opacity", "0");
        dom::set_style(element, "transform", "translateY(20px)");
        dom::set_style(element, "transition", "all 0.5s ease-out");
        observer.observe(element);
    }

    Ok(())
}
