//! Starfield parallax driven by the pointer.

use leptos::{ev, window_event_listener};

use calificaciones::parallax::{ParallaxOffset, LAYER_CLASSES};

use crate::dom;

/// Shift the three star layers on every pointer move.
///
/// Does nothing on pages missing any of the layers.
pub fn follow_pointer() {
    let handle = window_event_listener(ev::mousemove, |event| {
        let Ok(document) = dom::document() else {
            return;
        };

        let mut layers = Vec::with_capacity(LAYER_CLASSES.len());
        for class in LAYER_CLASSES {
            match document.query_selector(&format!(".{}", class)) {
                Ok(Some(layer)) => layers.push(layer),
                _ => return,
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);

        let offset = ParallaxOffset::from_pointer(
            event.client_x() as f64,
            event.client_y() as f64,
            width,
            height,
        );

        for (layer, transform) in layers.iter().zip(offset.layer_transforms()) {
            dom::set_style(layer, "transform", &transform);
        }
    });

    // Page-lifetime listener
    std::mem::forget(handle);
}
