use std::sync::Arc;

use crate::config::Config;
use crate::errors::{API_KEY_MISSING, RelayError};
use crate::llm_client::LLMClientTrait;
use crate::models::request::{ChatCompletionCreate, ChatRequest};
use crate::models::response::ChatResponse;

#[derive(Clone)]
pub struct ChatService {
    client: Arc<dyn LLMClientTrait>,
}

impl ChatService {
    pub fn new(client: Arc<dyn LLMClientTrait>) -> Self {
        Self { client }
    }

    /// Validates `request`, forwards it upstream as a single-turn exchange and
    /// wraps the first choice in a `ChatResponse`.
    pub async fn create_reply(
        &self,
        request: ChatRequest,
        config: &Config,
    ) -> Result<ChatResponse, RelayError> {
        let chat = request.validate()?;

        if !config.api_key_configured() {
            return Err(RelayError::ConfigError(API_KEY_MISSING.to_string()));
        }

        let completion = self
            .client
            .request_chat_completion(ChatCompletionCreate::single_turn(&chat))
            .await?;
        log::debug!("completion: {:?}", completion);

        let reply = completion.reply().ok_or(RelayError::EmptyReply)?.to_string();

        Ok(ChatResponse::new(reply, chat.model, completion.usage))
    }
}
