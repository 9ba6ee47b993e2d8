pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

pub const DEFAULT_MODEL: &str = "llama-3.1-sonar-small-128k-online";

pub const AVAILABLE_MODELS: [&str; 7] = [
    "llama-3.1-sonar-small-128k-online",
    "llama-3.1-sonar-small-128k-chat",
    "llama-3.1-sonar-large-128k-online",
    "llama-3.1-sonar-large-128k-chat",
    "llama-3.1-8b-instruct",
    "llama-3.1-70b-instruct",
    "mixtral-8x7b-instruct",
];

pub(crate) const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Provide accurate, informative, and concise responses.";

pub const MAX_TOKENS: u32 = 2048;
pub const TEMPERATURE: f64 = 0.7;

pub(crate) const HEALTH_MESSAGE: &str = "Perplexity API Chatbot Backend is running!";

pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 600;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];
