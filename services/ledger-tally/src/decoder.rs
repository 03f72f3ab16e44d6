//! Body decoding seam

use serde_json::Value;
use thiserror::Error;

/// Decoder failure with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
}

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns a raw response body into a generic JSON document
pub trait PageDecoder: Send + Sync {
    fn decode(&self, body: &str) -> Result<Value, DecodeError>;
}

/// serde_json decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl PageDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Value, DecodeError> {
        serde_json::from_str(body).map_err(|e| DecodeError::new(e.to_string()))
    }
}
