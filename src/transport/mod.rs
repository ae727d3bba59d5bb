//! The seam between the feed client and the network
//!
//! The client turns a document into a [`PutRequest`] and hands it to a
//! [`Transport`]. [`http::HttpTransport`] performs the request with
//! `reqwest`; tests substitute a recording transport.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::Result;

pub mod http;

/// A fully prepared PUT
#[derive(Debug, Clone, PartialEq)]
pub struct PutRequest {
    /// Absolute URL, scheme included
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub timeout: Duration,
}

impl PutRequest {
    /// Value of header `name`, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status line and body of the reply
#[derive(Debug, Clone, PartialEq)]
pub struct PutResponse {
    pub status: u16,
    /// Reason phrase, when one is known for the status
    pub reason: Option<String>,
    /// Body text; left empty for successful replies
    pub body: String,
}

impl PutResponse {
    pub fn new<S: Into<String>>(status: u16, reason: Option<&str>, body: S) -> Self {
        Self {
            status,
            reason: reason.map(str::to_string),
            body: body.into(),
        }
    }

    /// Any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Best available explanation of a failed reply
    ///
    /// The service answers errors with
    /// `<errors><title>..</title><error>..</error></errors>`; when the body
    /// has that shape both messages are joined, otherwise the status reason
    /// is used.
    pub fn diagnostic(&self) -> String {
        match parse_error_payload(&self.body) {
            Some(message) => message,
            None => {
                warn!(status = self.status, "error reply has no readable payload");
                self.reason
                    .clone()
                    .unwrap_or_else(|| format!("HTTP status {}", self.status))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    title: String,
    error: String,
}

fn parse_error_payload(body: &str) -> Option<String> {
    match quick_xml::de::from_str::<ErrorPayload>(body) {
        Ok(payload) => Some(format!("{} {}", payload.title.trim(), payload.error.trim())),
        Err(e) => {
            debug!(error = %e, "could not parse error payload");
            None
        }
    }
}

/// Sends one PUT and reports what came back
///
/// Implementations make exactly one attempt. A reply with any status is
/// `Ok`; only failures to complete the exchange are errors.
pub trait Transport {
    fn put(&self, request: &PutRequest) -> Result<PutResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(PutResponse::new(200, Some("OK"), "").is_success());
        assert!(PutResponse::new(204, None, "").is_success());
        assert!(!PutResponse::new(199, None, "").is_success());
        assert!(!PutResponse::new(301, None, "").is_success());
        assert!(!PutResponse::new(401, None, "").is_success());
    }

    #[test]
    fn test_diagnostic_from_payload() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
            <errors>
              <title>Unauthorized</title>
              <error>You do not have permission to access this resource</error>
            </errors>"#;
        let response = PutResponse::new(401, Some("Unauthorized"), body);
        assert_eq!(
            response.diagnostic(),
            "Unauthorized You do not have permission to access this resource"
        );
    }

    #[test]
    fn test_diagnostic_falls_back_to_reason() {
        let response = PutResponse::new(404, Some("Not Found"), "<html>gone</html>");
        assert_eq!(response.diagnostic(), "Not Found");

        let response = PutResponse::new(599, None, "");
        assert_eq!(response.diagnostic(), "HTTP status 599");
    }

    #[test]
    fn test_header_lookup() {
        let request = PutRequest {
            url: "https://api.cosm.com/v2/feeds/1.xml".to_string(),
            headers: vec![("X-ApiKey".to_string(), "ASDF".to_string())],
            body: String::new(),
            timeout: Duration::from_secs(10),
        };
        assert_eq!(request.header("x-apikey"), Some("ASDF"));
        assert_eq!(request.header("Content-Type"), None);
    }
}
