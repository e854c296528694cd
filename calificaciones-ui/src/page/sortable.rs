//! Sortable data tables.
//!
//! Clicking a header re-orders the body rows by that column, ascending.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTableRowElement, MouseEvent};

use calificaciones::table::sort_rows_by_column;

use crate::dom;

pub fn make_tables_sortable() -> Result<(), JsValue> {
    for table in dom::query_document(".data-table.sortable")? {
        make_sortable(&table)?;
    }
    Ok(())
}

/// Attach click-to-sort to every header cell of `table`
pub fn make_sortable(table: &Element) -> Result<(), JsValue> {
    for (index, header) in dom::query_all(table, "th")?.into_iter().enumerate() {
        dom::set_style(&header, "cursor", "pointer");

        let table = table.clone();
        dom::listen(&header, "click", move |_: MouseEvent| {
            if let Err(e) = sort_by_column(&table, index) {
                web_sys::console::error_2(&"Table sort failed:".into(), &e);
            }
        })?;
    }
    Ok(())
}

/// Re-order the body rows of `table` by the text of `column`
pub fn sort_by_column(table: &Element, column: usize) -> Result<(), JsValue> {
    let Some(body) = table.query_selector("tbody")? else {
        return Ok(());
    };

    let mut rows = dom::query_all(&body, "tr")?;
    sort_rows_by_column(&mut rows, column, cell_text);

    // Appending an attached row moves it, so this rebuilds the order
    for row in &rows {
        body.append_child(row)?;
    }
    Ok(())
}

fn cell_text(row: &Element, column: usize) -> Option<String> {
    row.dyn_ref::<HtmlTableRowElement>()?
        .cells()
        .item(column as u32)?
        .text_content()
        .map(|text| text.trim().to_string())
}
