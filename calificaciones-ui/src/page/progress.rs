//! Progress bars grow from zero to their rendered width on load.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::dom;

/// Delay before the bars return to their target width
const GROW_DELAY_MS: u32 = 500;

pub fn animate_progress_bars() -> Result<(), JsValue> {
    for bar in dom::query_document(".progress-bar")? {
        let target = dom::get_style(&bar, "width");
        dom::set_style(&bar, "width", "0");

        Timeout::new(GROW_DELAY_MS, move || {
            dom::set_style(&bar, "width", &target);
        })
        .forget();
    }
    Ok(())
}
