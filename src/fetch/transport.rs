//! Transport to the census data service.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{CensoError, Result};
use crate::query::Request;

/// Common interface for anything that can answer a [`Request`] with a JSON payload.
///
/// Implementations must collapse non-2xx statuses and transport errors into
/// [`CensoError::RequestFailed`] without parsing the failed body.
pub trait Transport: Send + Sync {
    fn get(&self, request: &Request) -> impl std::future::Future<Output = Result<Value>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get(&self, request: &Request) -> impl std::future::Future<Output = Result<Value>> + Send {
        (**self).get(request)
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport from configuration
    ///
    /// Uses the configured total timeout and a 10s connect timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_url())?;
        Self::new(base_url, Duration::from_secs(config.timeout))
    }

    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(CensoError::Config(format!(
                "api_url '{base_url}' cannot be used as a base URL"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CensoError::RequestFailed(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Resolve a request descriptor against the base URL, encoding each segment
    pub fn url_for(&self, request: &Request) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CensoError::Config(format!(
                    "api_url '{}' cannot be used as a base URL",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty();
            segments.extend(request.segments.iter());
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &Request) -> Result<Value> {
        let url = self.url_for(request)?;
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CensoError::RequestFailed(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {url} returned {status}");
            return Err(CensoError::RequestFailed(format!(
                "service returned HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CensoError::RequestFailed(format!("invalid JSON body: {e}")))
    }
}

fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("could not connect to the data service: {error}")
    } else {
        format!("HTTP error: {error}")
    }
}
