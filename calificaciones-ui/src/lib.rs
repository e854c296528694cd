//! Sistema de Calificaciones: page behavior
//!
//! Client-side rendered Leptos crate compiled to WebAssembly and loaded by
//! the server-rendered pages of the grades portal.
//!
//! # Features
//!
//! - Auto-dismissing flash messages and an in-memory notification list
//! - Scroll reveal, card glow, progress bars and starfield parallax
//! - Required-field form gate and sortable data tables
//! - Dark/light theme persisted in `localStorage`
//! - Keyboard shortcuts (Ctrl/Cmd+K, Escape)
//! - Exported helpers for inline handlers, see [`exports`]

use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod dom;
pub mod exports;
pub mod page;
pub mod state;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = page::enhance() {
        web_sys::console::error_2(&"Page setup failed:".into(), &e);
    }
}
