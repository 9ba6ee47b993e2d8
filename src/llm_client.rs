use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::consts;
use crate::errors::RelayError;
use crate::models::request::ChatCompletionCreate;
use crate::models::response_direct::ChatCompletion;

/// Upstream chat-completion provider.
#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    async fn request_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, RelayError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, RelayError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(consts::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RelayError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::new(
            http_client,
            &config.upstream_base_url,
            config.api_key.as_deref(),
        ))
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    async fn request_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, RelayError> {
        let mut builder = self
            .client
            .post(format!("{}{}", self.base_url, consts::CHAT_COMPLETIONS_PATH))
            .json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();

            return Err(RelayError::UpstreamError {
                status,
                message: upstream_error_message(&text),
            });
        }

        Ok(response.json::<ChatCompletion>().await?)
    }
}

fn upstream_error_message(text: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(text).ok();
    parsed
        .as_ref()
        .and_then(|body| body.get("error"))
        .and_then(|error| match error {
            Value::String(message) => Some(message.clone()),
            Value::Object(fields) => fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(|| text.to_string())
}
