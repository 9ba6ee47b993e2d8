use std::sync::Arc;

use perplexity_relay::app::create_app;
use perplexity_relay::config;
use perplexity_relay::llm_client::LLMClient;
use perplexity_relay::service::ChatService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Perplexity relay service...");

    let config = config::load_config().map_err(std::io::Error::other)?;
    let llm_client = LLMClient::from_config(&config).map_err(std::io::Error::other)?;

    let port = config.port;
    let environment = config.environment.name().to_string();
    let api_key_configured = config.api_key_configured();

    let chat_service = Arc::new(ChatService::new(Arc::new(llm_client)));
    let config = Arc::new(config);

    let app_factory = move || create_app(chat_service.clone(), config.clone());

    let server = actix_web::HttpServer::new(app_factory).bind(("0.0.0.0", port))?;

    log::info!("Perplexity API Chatbot Backend running on port {}", port);
    log::info!("Environment: {}", environment);
    log::info!(
        "API Key configured: {}",
        if api_key_configured { "Yes" } else { "No" }
    );

    server.run().await
}
