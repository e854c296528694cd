//! Glow on cards while the pointer is over them.

use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

use crate::dom;

const CARD_SELECTOR: &str = ".stat-card, .action-card, .login-card";
const GLOW_SHADOW: &str = "0 8px 32px rgba(0, 212, 255, 0.2)";

pub fn attach_card_glow() -> Result<(), JsValue> {
    for card in dom::query_document(CARD_SELECTOR)? {
        let entered = card.clone();
        dom::listen(&card, "mouseenter", move |_: MouseEvent| {
            dom::set_style(&entered, "box-shadow", GLOW_SHADOW);
        })?;

        let left = card.clone();
        dom::listen(&card, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&left, "box-shadow", "");
        })?;
    }
    Ok(())
}
