//! HTTP transport for upload payloads
//!
//! [`Transport`] is the only place the uploader touches the network, so
//! tests can swap in a fake and callers can route requests elsewhere.

use crate::error::Result;
use crate::upload::types::UploadPayload;
use std::sync::Arc;
use std::time::Duration;

/// Status and body text of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends an upload payload as a JSON POST
pub trait Transport: Send + Sync {
    /// Issue exactly one request. Any failure to obtain a complete response
    /// (including reading the body) is an `Err`.
    fn post_json(
        &self,
        url: &str,
        payload: &UploadPayload,
        timeout: Duration,
    ) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn post_json(
        &self,
        url: &str,
        payload: &UploadPayload,
        timeout: Duration,
    ) -> Result<HttpResponse> {
        (**self).post_json(url, payload, timeout)
    }
}

/// Blocking `reqwest` transport with no extra headers
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl Transport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        payload: &UploadPayload,
        timeout: Duration,
    ) -> Result<HttpResponse> {
        log::debug!("Creating HTTP client (timeout {:?})", timeout);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        log::debug!(
            "Sending POST to {} ({} bytes of CSV)",
            url,
            payload.content.len()
        );
        let response = client.post(url).json(payload).send()?;
        let status = response.status().as_u16();
        log::debug!("Response received: {}", status);

        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}
