//! Buffered endpoint responses.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::Result;

/// Outcome of one endpoint invocation: a success indicator plus the raw body.
///
/// The body is fully buffered, so parsing is synchronous and repeatable.
#[derive(Debug, Clone)]
pub struct EndpointResponse {
    status: u16,
    body: Bytes,
}

impl EndpointResponse {
    /// Build a response from a status code and raw body bytes.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Read a full `reqwest` response into a buffered one.
    pub async fn from_http(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(Self { status, body })
    }

    /// Success indicator: true for statuses in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Parse the body as structured data. Parse failures propagate unchanged.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
