use serde::{self, Deserialize, Serialize};
use serde_json::Value;

use crate::consts;
use crate::errors::RelayError;
use crate::models::timestamp;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub reply: String,
    pub success: bool,
    pub model: Value,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage: Option<Value>,
}

impl ChatResponse {
    pub fn new(reply: String, model: Value, usage: Option<Value>) -> Self {
        Self {
            reply,
            success: true,
            model,
            timestamp: timestamp(),
            usage,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            success: false,
            message: None,
        }
    }

    /// Envelope for `err`. The raw error text is attached only when
    /// `expose_details` is set and the error is unclassified.
    pub fn from_error(err: &RelayError, expose_details: bool) -> Self {
        Self {
            error: err.public_message().to_string(),
            success: false,
            message: (expose_details && err.is_unclassified()).then(|| err.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            message: consts::HEALTH_MESSAGE.to_string(),
            status: "healthy".to_string(),
            timestamp: timestamp(),
        }
    }
}
