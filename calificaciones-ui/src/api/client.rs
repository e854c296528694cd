//! HTTP API Client
//!
//! Browser transport for the grades API.

use async_trait::async_trait;
use gloo_net::http::Request;

use calificaciones::grades::{GradeTransport, HttpReply};
use calificaciones::{GradesError, GradesResult};

/// Storage key for an API origin other than the page's own
pub const API_BASE_KEY: &str = "calificaciones_api_url";

/// Get the API base URL from local storage; empty means same origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

/// `fetch`-backed transport
pub struct BrowserTransport {
    base: String,
}

impl BrowserTransport {
    pub fn new() -> Self {
        Self {
            base: get_api_base(),
        }
    }
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl GradeTransport for BrowserTransport {
    async fn get(&self, path: &str) -> GradesResult<HttpReply> {
        let response = Request::get(&format!("{}{}", self.base, path))
            .send()
            .await
            .map_err(|e| GradesError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GradesError::Network(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
