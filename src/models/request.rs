use serde::{self, Deserialize, Serialize};
use serde_json::Value;

use crate::consts;
use crate::errors::{MESSAGE_REQUIRED, RelayError};
use crate::models::Role;

/// Inbound body of `POST /api/chat`. Fields stay untyped so that a wrong
/// JSON type becomes a validation error instead of a body error.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<Value>,
}

/// `model` is forwarded as sent; a non-string value is left for the
/// upstream provider to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedChat {
    pub message: String,
    pub model: Value,
}

impl ChatRequest {
    pub fn validate(self) -> Result<ValidatedChat, RelayError> {
        let message = match self.message {
            Some(Value::String(text)) if !text.trim().is_empty() => text.trim().to_string(),
            _ => return Err(RelayError::ValidationError(MESSAGE_REQUIRED.to_string())),
        };

        let model = self
            .model
            .unwrap_or_else(|| Value::String(consts::DEFAULT_MODEL.to_string()));

        Ok(ValidatedChat { message, model })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Body sent to the upstream `/chat/completions` endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatCompletionCreate {
    pub model: Value,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub stream: bool,
}

impl ChatCompletionCreate {
    pub fn single_turn(chat: &ValidatedChat) -> Self {
        Self {
            model: chat.model.clone(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: consts::SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: Role::User,
                    content: chat.message.clone(),
                },
            ],
            max_tokens: consts::MAX_TOKENS,
            temperature: consts::TEMPERATURE,
            stream: false,
        }
    }
}
