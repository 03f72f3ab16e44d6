//! HTTP transport seam
//!
//! The pager only ever sees `(status, body)` pairs. Non-2xx statuses are data,
//! not errors: only a request that never produced a response fails here.

use crate::config::TallyConfig;
use crate::error::{TallyError, TallyResult};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Raw response handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code as text, e.g. `"200"`
    pub status: String,
    /// Undecoded response body
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            body: body.into(),
        }
    }

    /// Exactly `200`; redirects and other 2xx codes do not count
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "200"
    }
}

/// Fetches a URL and returns whatever the server answered
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> TallyResult<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch(&self, url: &str) -> TallyResult<HttpResponse> {
        (**self).fetch(url).await
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client honouring the configured timeout and user agent
    pub fn new(config: &TallyConfig) -> TallyResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            // A 3xx is reported to the pager as-is
            .redirect(Policy::none())
            .build()
            .map_err(|e| TallyError::Config {
                reason: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> TallyResult<HttpResponse> {
        let transport_error = |e: reqwest::Error| TallyError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status().as_u16().to_string();
        let body = response.text().await.map_err(transport_error)?;

        debug!(url, %status, bytes = body.len(), "Received response");
        Ok(HttpResponse { status, body })
    }
}
