//! HTTP transport for the grades API, backed by reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{GradesError, GradesResult};
use crate::grades::{GradeTransport, HttpReply};

/// Grades API client for native builds
#[derive(Clone)]
pub struct HttpGradeClient {
    client: Client,
    base_url: String,
}

impl HttpGradeClient {
    pub fn new(config: &ApiConfig) -> GradesResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GradesError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl GradeTransport for HttpGradeClient {
    async fn get(&self, path: &str) -> GradesResult<HttpReply> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                GradesError::Network("Request timeout".to_string())
            } else {
                GradesError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GradesError::Network(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
