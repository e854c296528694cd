//! Global keyboard shortcuts: Ctrl/Cmd+K focuses search, Escape clears
//! notifications.

use leptos::{ev, window_event_listener};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use calificaciones::keyboard::{KeyChord, Shortcut, SEARCH_SELECTOR};

use crate::dom;
use crate::page::flash;
use crate::state::notifications;

pub fn install_shortcuts() {
    let handle = window_event_listener(ev::keydown, |event| {
        let chord = KeyChord {
            key: event.key(),
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
        };

        let Some(shortcut) = Shortcut::from_chord(&chord) else {
            return;
        };
        if shortcut.prevents_default() {
            event.prevent_default();
        }

        match shortcut {
            Shortcut::FocusSearch => focus_search(),
            Shortcut::DismissNotifications => dismiss_everything(),
        }
    });

    std::mem::forget(handle);
}

fn focus_search() {
    let search = dom::document()
        .ok()
        .and_then(|doc| doc.query_selector(SEARCH_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    if let Some(input) = search {
        let _ = input.focus();
    }
}

/// Remove server banners and page notifications at once, no fade
pub fn dismiss_everything() {
    flash::dismiss_server_flashes();
    notifications().dismiss_all();
}
