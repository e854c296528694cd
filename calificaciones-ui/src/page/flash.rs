//! Server-rendered flash messages.
//!
//! Banners present at load fade after [`DismissPolicy::FLASH`] and are then
//! removed. Their timers are kept so Escape can cancel them.

use gloo_timers::callback::Timeout;
use leptos::spawn_local;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::Element;

use calificaciones::DismissPolicy;

use crate::dom;

struct Banner {
    element: Element,
    timers: Option<(Timeout, Timeout)>,
}

/// Set on banners that already have a countdown
const SCHEDULED_ATTR: &str = "data-flash-scheduled";

/// Server banners only: page notifications carry `data-notification-id`
const SERVER_FLASH_SELECTOR: &str =
    ".flash-message:not([data-flash-scheduled]):not([data-notification-id])";

thread_local! {
    static BANNERS: RefCell<HashMap<usize, Banner>> = RefCell::new(HashMap::new());
    static NEXT_KEY: Cell<usize> = const { Cell::new(0) };
}

/// Start the fade-and-remove countdown for server banners not yet scheduled
pub fn schedule_server_flashes() -> Result<(), JsValue> {
    let policy = DismissPolicy::FLASH;

    for element in dom::query_document(SERVER_FLASH_SELECTOR)? {
        let key = NEXT_KEY.with(|next| next.replace(next.get() + 1));
        element.set_attribute(SCHEDULED_ATTR, "")?;

        let fade_target = element.clone();
        let fade = Timeout::new(policy.fade_at_ms(), move || {
            dom::set_style(&fade_target, "opacity", "0");
        });

        let remove = Timeout::new(policy.remove_at_ms(), move || {
            let banner = BANNERS.with(|banners| banners.borrow_mut().remove(&key));
            if let Some(banner) = banner {
                banner.element.remove();
                // Don't free this callback's own handle while it is running
                if let Some(timers) = banner.timers {
                    spawn_local(async move { drop(timers) });
                }
            }
        });

        BANNERS.with(|banners| {
            banners.borrow_mut().insert(
                key,
                Banner {
                    element,
                    timers: Some((fade, remove)),
                },
            )
        });
    }

    Ok(())
}

/// Server banners still waiting to be removed
pub fn pending_server_flashes() -> usize {
    BANNERS.with(|banners| banners.borrow().len())
}

/// Remove every tracked server banner now and cancel its timers
pub fn dismiss_server_flashes() {
    let banners: Vec<Banner> =
        BANNERS.with(|banners| banners.borrow_mut().drain().map(|(_, b)| b).collect());

    for banner in banners {
        banner.element.remove();
    }
}
