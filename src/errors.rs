use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::response::ErrorResponse;

pub(crate) const MESSAGE_REQUIRED: &str = "Message is required and must be a non-empty string";
pub(crate) const API_KEY_MISSING: &str = "Perplexity API key not configured";

const INVALID_API_KEY: &str = "Invalid Perplexity API key";
const RATE_LIMITED: &str = "API rate limit exceeded. Please try again later.";
const INVALID_UPSTREAM_REQUEST: &str = "Invalid request to Perplexity API";
const INTERNAL_ERROR: &str = "Internal server error while processing your request";
const UNHANDLED_ERROR: &str = "Something went wrong!";

#[derive(Debug, Clone, Error)]
pub enum RelayError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Upstream error: status {status}, {message}")]
    UpstreamError { status: u16, message: String },
    #[error("No response content received from Perplexity API")]
    EmptyReply,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Body error: {0}")]
    BodyError(String),
}

impl RelayError {
    /// HTTP status of the envelope produced for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamError { status: 401, .. } => StatusCode::UNAUTHORIZED,
            RelayError::UpstreamError { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
            RelayError::UpstreamError { status: 400, .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing text for the `error` field. Never carries upstream text.
    pub fn public_message(&self) -> &str {
        match self {
            RelayError::ValidationError(msg) | RelayError::ConfigError(msg) => msg.as_str(),
            RelayError::UpstreamError { status: 401, .. } => INVALID_API_KEY,
            RelayError::UpstreamError { status: 429, .. } => RATE_LIMITED,
            RelayError::UpstreamError { status: 400, .. } => INVALID_UPSTREAM_REQUEST,
            RelayError::BodyError(_) => UNHANDLED_ERROR,
            _ => INTERNAL_ERROR,
        }
    }

    /// Whether this error lands on the generic 500 path, the only one that may
    /// echo the raw error text in development mode.
    pub fn is_unclassified(&self) -> bool {
        match self {
            RelayError::UpstreamError { status, .. } => !matches!(*status, 400 | 401 | 429),
            RelayError::EmptyReply | RelayError::NetworkError(_) | RelayError::ParseError(_) => {
                true
            }
            _ => false,
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorResponse::from_error(self, false))
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RelayError::ParseError(err.to_string())
        } else {
            RelayError::NetworkError(err.to_string())
        }
    }
}
