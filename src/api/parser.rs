// src/api/parser.rs
//! Two-pass response decoding.
//!
//! Every body is first checked against the generic envelope. Error
//! envelopes become [`NotionError::Remote`]; anything else is decoded again
//! into the shape the caller asked for.

use super::transport::HttpResponse;
use crate::error::{NotionError, Result};
use crate::model::ResponseEnvelope;
use serde::de::DeserializeOwned;

/// Decodes a response into `T`, surfacing error envelopes first.
pub fn parse_response<T: DeserializeOwned>(response: &HttpResponse, url: &str) -> Result<T> {
    let envelope = parse_envelope(response, url)?;

    if envelope.is_error() {
        let code = envelope.error_code();
        let message = envelope.error_message();
        log::warn!(
            "Notion returned error envelope for {}: {} {}: {}",
            url,
            response.status,
            code,
            message
        );
        return Err(NotionError::Remote {
            status: response.status,
            code,
            message,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| {
        log::error!("Failed to decode response from {}: {}", url, e);
        NotionError::decode(format!("unexpected response shape: {}", e), &response.body)
    })
}

fn parse_envelope(response: &HttpResponse, url: &str) -> Result<ResponseEnvelope> {
    serde_json::from_str(&response.body).map_err(|e| {
        log::error!(
            "Response from {} (status {}) is not a JSON envelope: {}",
            url,
            response.status,
            e
        );
        NotionError::decode(format!("response is not a JSON envelope: {}", e), &response.body)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BlockContent, User};

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn error_envelope_wins_over_other_fields() {
        let body = r#"{"object":"error","status":400,"code":"validation_error",
            "message":"body failed validation","id":"u-1","type":"person"}"#;
        let err = parse_response::<User>(&response(400, body), "users/u-1").unwrap_err();
        match &err {
            NotionError::Remote {
                status,
                code,
                message,
            } => {
                assert_eq!(*status, 400);
                assert_eq!(code, "validation_error");
                assert_eq!(message, "body failed validation");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
        assert_eq!(err.to_string(), "400: validation_error: body failed validation");
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = parse_response::<User>(&response(502, "<html>Bad gateway</html>"), "users")
            .unwrap_err();
        match err {
            NotionError::Decode { body, .. } => assert!(body.contains("Bad gateway")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn success_body_decodes_into_requested_shape() {
        let body = r#"{"object":"user","id":"u-1","type":"bot","bot":{}}"#;
        let user: User = parse_response(&response(200, body), "users/u-1").unwrap();
        assert_eq!(user.id.as_str(), "u-1");
    }

    #[test]
    fn code_block_decodes_past_the_envelope_check() {
        let body = r#"{"object":"block","id":"b-1","type":"code",
            "code":{"rich_text":[],"language":"rust"}}"#;
        let block: Block = parse_response(&response(200, body), "blocks/b-1").unwrap();
        match block.content {
            BlockContent::Code(code) => assert_eq!(code.language.as_deref(), Some("rust")),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let err = parse_response::<User>(&response(200, r#"{"object":"user"}"#), "users/x")
            .unwrap_err();
        assert!(matches!(err, NotionError::Decode { .. }));
    }
}
