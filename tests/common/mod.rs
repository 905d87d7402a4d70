// tests/common/mod.rs
//! Shared helpers for integration tests: a recording in-memory transport
//! and a ready client configuration.

#![allow(dead_code)]

use notionkit::{
    ApiKey, ClientConfig, HttpRequest, HttpResponse, NotionClient, Transport, TransportError,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

pub const TEST_API_KEY: &str = "secret_test_key_1234567890abcdef";

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(HttpResponse {
                status,
                body: body.into(),
            });
        self
    }

    pub fn respond_json(self, status: u16, body: &Value) -> Self {
        self.respond(status, body.to_string())
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// The decoded JSON body of the `index`-th request.
    pub fn request_body(&self, index: usize) -> Value {
        let requests = self.requests();
        let body = requests[index]
            .body
            .as_deref()
            .expect("request should carry a body");
        serde_json::from_str(body).expect("request body should be JSON")
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().expect("requests lock").push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .ok_or_else(|| {
                TransportError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "no canned response left",
                ))
            })
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::new(ApiKey::new(TEST_API_KEY).expect("Test API key should be valid"))
}

pub fn client(transport: &RecordingTransport) -> NotionClient<&RecordingTransport> {
    NotionClient::new(test_config(), transport)
}
