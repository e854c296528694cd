//! API Access

pub mod client;

pub use client::{get_api_base, set_api_base, BrowserTransport};
