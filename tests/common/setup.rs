use std::sync::Arc;

use perplexity_relay::config::{Config, Environment};
use perplexity_relay::llm_client::LLMClient;
use perplexity_relay::service::ChatService;

pub const TEST_API_KEY: &str = "test-key";

pub fn create_test_config(base_url: &str) -> Config {
    Config {
        api_key: Some(TEST_API_KEY.to_string()),
        environment: Environment::Production,
        upstream_base_url: base_url.to_string(),
        ..Config::default()
    }
}

pub fn create_test_app_components(config: Config) -> (Arc<ChatService>, Arc<Config>) {
    let llm_client = LLMClient::new(
        reqwest::Client::new(),
        &config.upstream_base_url,
        config.api_key.as_deref(),
    );
    let chat_service = Arc::new(ChatService::new(Arc::new(llm_client)));

    (chat_service, Arc::new(config))
}
