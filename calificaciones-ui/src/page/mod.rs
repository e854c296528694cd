//! Page Behaviors
//!
//! Enhancers attached to the server-rendered markup once the module loads.
//! Each one finds its elements by class name and wires its own listeners.

pub mod flash;
pub mod forms;
pub mod hover;
pub mod keyboard;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod sortable;
pub mod theme;

use wasm_bindgen::JsValue;

/// Wire every behavior into the current page
pub fn enhance() -> Result<(), JsValue> {
    // Theme first so a saved light preference never flashes dark
    theme::apply_saved_theme();

    flash::schedule_server_flashes()?;
    reveal::animate_on_scroll()?;
    hover::attach_card_glow()?;
    forms::guard_required_fields()?;
    sortable::make_tables_sortable()?;
    progress::animate_progress_bars()?;
    scroll::smooth_anchor_scroll()?;
    parallax::follow_pointer();
    keyboard::install_shortcuts();

    log_dev_banner();
    Ok(())
}

fn log_dev_banner() {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        web_sys::console::log_2(
            &"%c🚀 Sistema de Calificaciones".into(),
            &"color: #00d4ff; font-size: 20px; font-weight: bold;".into(),
        );
        web_sys::console::log_2(
            &"%cModo de desarrollo activado".into(),
            &"color: #ffa500; font-size: 12px;".into(),
        );
    }
}
