//! Blocking HTTP transport

use reqwest::blocking::Client;
use tracing::debug;

use super::{PutRequest, PutResponse, Transport};
use crate::Result;

/// Performs requests with `reqwest`'s blocking client
///
/// A fresh client is built for each request so the timeout of the request
/// applies and no connection outlives the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for HttpTransport {
    fn put(&self, request: &PutRequest) -> Result<PutResponse> {
        let client = Client::builder().timeout(request.timeout).build()?;

        let mut builder = client.put(&request.url).body(request.body.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send()?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %request.url, "received reply");

        // An unreadable error body only loses the payload, not the status.
        let body = if status.is_success() {
            String::new()
        } else {
            response.text().unwrap_or_default()
        };

        Ok(PutResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}
