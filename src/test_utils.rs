//! Test utilities for exercising the client without a network
//!
//! [`MockTransport`] records every request it is given and replays queued
//! replies. Clones share the same record, so a test can keep one handle and
//! give another to the client.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::{PutRequest, PutResponse, Transport};
use crate::{ClientError, Result};

#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<PutRequest>>>,
    replies: Arc<Mutex<VecDeque<Result<PutResponse>>>>,
}

impl MockTransport {
    /// A transport that answers `200 OK` until told otherwise
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply
    pub fn respond_with(&self, status: u16, reason: Option<&str>, body: &str) {
        self.queue(Ok(PutResponse::new(status, reason, body)));
    }

    /// Queue a failure to complete the exchange
    pub fn fail_with(&self, message: &str) {
        self.queue(Err(ClientError::transport(message)));
    }

    /// Every request seen so far
    pub fn requests(&self) -> Vec<PutRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn queue(&self, reply: Result<PutResponse>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }
}

impl Transport for MockTransport {
    fn put(&self, request: &PutRequest) -> Result<PutResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .unwrap_or_else(|| Ok(PutResponse::new(200, Some("OK"), "")))
    }
}
