//! Functions exported to the page's inline handlers.
//!
//! These are module exports of the generated bindings; nothing is attached
//! to `window`.

use gloo_timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement};

use calificaciones::format;
use calificaciones::typewriter::{Typewriter, DEFAULT_SPEED_MS};
use calificaciones::{FormatError, NotificationKind};

use crate::api::{self, BrowserTransport};
use crate::page::{sortable, theme};
use crate::state::notifications;

const COPIED: &str = "Copiado al portapapeles";
const COPY_FAILED: &str = "No se pudo copiar";

/// Copy `text` to the clipboard and confirm with a notification
#[wasm_bindgen(js_name = copyText)]
pub async fn copy_text(text: String) {
    match write_clipboard(&text).await {
        Ok(()) => {
            notifications().show(COPIED, NotificationKind::Success);
        }
        Err(e) => {
            web_sys::console::error_2(&"Clipboard write failed:".into(), &e);
            notifications().show(COPY_FAILED, NotificationKind::Danger);
        }
    }
}

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }

    let write_text: Function = Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: Promise = write_text.call1(&clipboard, &text.into())?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Show a notification. `kind` is one of success, danger, warning, info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind
        .as_deref()
        .map(NotificationKind::parse_or_default)
        .unwrap_or_default();
    notifications().show(message, kind);
}

/// Fetch a student's grades.
///
/// Resolves to the parsed body (also passed to `callback`), or `null` when
/// the request failed.
#[wasm_bindgen(js_name = loadStudentGrades)]
pub async fn load_student_grades(student_id: String, callback: Option<Function>) -> JsValue {
    let transport = BrowserTransport::new();
    let service = notifications();

    let grades =
        match calificaciones::load_student_grades(&transport, &service, &student_id).await {
            Ok(grades) => grades,
            Err(e) => {
                web_sys::console::error_1(&format!("Error: {}", e).into());
                return JsValue::NULL;
            }
        };

    let value = match serde_json::to_string(&grades)
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|json| js_sys::JSON::parse(&json))
    {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::error_2(&"Grades conversion failed:".into(), &e);
            return JsValue::NULL;
        }
    };

    if let Some(callback) = callback {
        if let Err(e) = callback.call1(&JsValue::NULL, &value) {
            web_sys::console::error_2(&"Grades callback failed:".into(), &e);
        }
    }
    value
}

/// Run `callback` only if the user accepts the confirmation dialog
#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str, callback: &Function) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    if !window.confirm_with_message(message)? {
        return Ok(false);
    }
    callback.call0(&JsValue::NULL)?;
    Ok(true)
}

/// Type `text` into `element` one character at a time
#[wasm_bindgen(js_name = typeWriter)]
pub fn type_writer(element: HtmlElement, text: String, speed: Option<u32>) {
    element.set_text_content(None);
    type_next(element, Typewriter::new(text, speed.unwrap_or(DEFAULT_SPEED_MS)));
}

fn type_next(element: HtmlElement, mut frames: Typewriter) {
    let Some(frame) = frames.next() else {
        return;
    };
    element.set_text_content(Some(&frame));

    Timeout::new(frames.speed_ms(), move || type_next(element, frames)).forget();
}

/// es-MX long date, e.g. `15 de marzo de 2024`. Accepts a date string or
/// epoch milliseconds.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: JsValue) -> Result<String, JsValue> {
    format_value(&value, format::format_date, format::format_date_millis)
}

/// Two-digit 24-hour time, e.g. `09:05`
#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(value: JsValue) -> Result<String, JsValue> {
    format_value(&value, format::format_time, format::format_time_millis)
}

fn format_value(
    value: &JsValue,
    from_text: fn(&str) -> Result<String, FormatError>,
    from_millis: fn(i64) -> Result<String, FormatError>,
) -> Result<String, JsValue> {
    let formatted = if let Some(number) = value.as_f64() {
        format::millis_from_f64(number).and_then(from_millis)
    } else if let Some(text) = value.as_string() {
        from_text(&text)
    } else {
        Err(FormatError::InvalidDate(format!("{:?}", value)))
    };

    formatted.map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Flip between dark and light. Returns whether dark mode is now on.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> bool {
    theme::toggle_theme().is_dark()
}

#[wasm_bindgen(js_name = makeSortable)]
pub fn make_sortable(table: &Element) -> Result<(), JsValue> {
    sortable::make_sortable(table)
}

/// Point grade requests at another origin. Empty restores the page origin.
#[wasm_bindgen(js_name = setApiBase)]
pub fn set_api_base(url: &str) {
    api::set_api_base(url);
}
