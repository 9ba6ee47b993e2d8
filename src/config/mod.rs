use crate::consts;
use crate::errors::RelayError;

/// Deployment mode taken from `NODE_ENV`. Only an explicit `development`
/// exposes error details to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Unset,
    Development,
    Production,
    Other(String),
}

impl Environment {
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Environment::Unset,
            Some("development") => Environment::Development,
            Some("production") => Environment::Production,
            Some(other) => Environment::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Environment::Unset | Environment::Development => "development",
            Environment::Production => "production",
            Environment::Other(name) => name.as_str(),
        }
    }

    pub fn exposes_error_details(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub api_key: Option<String>,
    pub environment: Environment,
    pub upstream_base_url: String,
}

impl Config {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| RelayError::ConfigError(format!("invalid PORT {port:?}: {e}")))?,
            None => consts::DEFAULT_PORT,
        };

        let allowed_origins = match lookup("FRONTEND_URL") {
            Some(origins) if !origins.trim().is_empty() => origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            _ => consts::DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        let api_key = lookup("PERPLEXITY_API_KEY").filter(|key| !key.is_empty());
        let environment = Environment::from_node_env(lookup("NODE_ENV").as_deref());
        let upstream_base_url = lookup("PERPLEXITY_BASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| consts::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            port,
            allowed_origins,
            api_key,
            environment,
            upstream_base_url,
        })
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: consts::DEFAULT_PORT,
            allowed_origins: consts::DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            api_key: None,
            environment: Environment::Unset,
            upstream_base_url: consts::DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, RelayError>;
}

pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, RelayError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }
}

pub fn load_config() -> Result<Config, RelayError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
