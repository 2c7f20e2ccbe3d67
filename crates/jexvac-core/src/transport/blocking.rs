//! Blocking `reqwest` transport. No async runtime is involved.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::transport::errors::TransportError;
use crate::transport::traits::HttpTransport;
use crate::transport::types::{HttpResponse, Method};

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            TransportError::ClientBuildFailed {
                message: e.to_string(),
            }
        })?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, method: Method, url: &str) -> Result<HttpResponse, TransportError> {
        let request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url).body(""),
            Method::Delete => self.client.delete(url),
        };

        let response = request
            .send()
            .map_err(|e| TransportError::RequestFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::BodyReadFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            event = "core.transport.response_received",
            method = %method,
            status = status,
            bytes = body.len()
        );

        Ok(HttpResponse { status, body })
    }
}
