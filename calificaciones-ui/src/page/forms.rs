//! Form submission gate: blocks submit while any required input is blank.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, SubmitEvent};

use calificaciones::validation::{validate_required, INVALID_CLASS, REQUIRED_SELECTOR};

use crate::dom;

pub fn guard_required_fields() -> Result<(), JsValue> {
    for form in dom::query_document("form")? {
        let form_ref = form.clone();
        dom::listen(&form, "submit", move |event: SubmitEvent| {
            if !check_form(&form_ref) {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Mark blank required inputs invalid and clear the rest.
///
/// Returns whether the form may be submitted.
pub fn check_form(form: &Element) -> bool {
    let inputs: Vec<HtmlInputElement> = dom::query_all(form, REQUIRED_SELECTOR)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect();

    let report = validate_required(inputs.iter().map(|input| input.value()));

    for (index, input) in inputs.iter().enumerate() {
        let classes = input.class_list();
        let _ = if report.is_invalid_at(index) {
            classes.add_1(INVALID_CLASS)
        } else {
            classes.remove_1(INVALID_CLASS)
        };
    }

    report.is_valid()
}
