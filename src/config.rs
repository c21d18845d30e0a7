use crate::error::{Result, StudioError};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_REFERER: &str = "http://localhost:8080";
pub const DEFAULT_APP_TITLE: &str = "AI Ad Studio";

pub const DEFAULT_TEXT_MODEL: &str = "anthropic/claude-3.5-sonnet";
pub const DEFAULT_VISION_MODEL: &str = "anthropic/claude-3.5-sonnet";
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-2.5-flash-image";
pub const DEFAULT_EDGE_IMAGE_MODEL: &str = "black-forest-labs/flux-1-schnell";

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub referer: String,
    pub app_title: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub text_model: String,
    pub vision_model: String,
    pub image_model: String,
    pub edge_image_model: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub openrouter: OpenRouterConfig,
    pub models: ModelConfig,
    pub server: ServerConfig,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        OpenRouterConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            timeout_secs: None,
        }
    }
}

impl OpenRouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url = env::var("OPENROUTER_BASE_URL").unwrap_or(defaults.base_url);
        let referer = env::var("OPENROUTER_REFERER").unwrap_or(defaults.referer);
        let app_title = env::var("OPENROUTER_APP_TITLE").unwrap_or(defaults.app_title);
        let timeout_secs = env::var("OPENROUTER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        OpenRouterConfig {
            api_key,
            base_url,
            referer,
            app_title,
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// The bearer token. Missing or blank keys are a configuration error.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                StudioError::ConfigError("OPENROUTER_API_KEY is not configured".into())
            })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            edge_image_model: DEFAULT_EDGE_IMAGE_MODEL.to_string(),
        }
    }
}

impl ModelConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        ModelConfig {
            text_model: env::var("OPENROUTER_TEXT_MODEL").unwrap_or(defaults.text_model),
            vision_model: env::var("OPENROUTER_VISION_MODEL").unwrap_or(defaults.vision_model),
            image_model: env::var("OPENROUTER_IMAGE_MODEL").unwrap_or(defaults.image_model),
            edge_image_model: env::var("OPENROUTER_EDGE_IMAGE_MODEL")
                .unwrap_or(defaults.edge_image_model),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port);

        ServerConfig { host, port }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Config {
            openrouter: OpenRouterConfig::from_env(),
            models: ModelConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }

    pub fn with_openrouter(mut self, config: OpenRouterConfig) -> Self {
        self.openrouter = config;
        self
    }

    pub fn with_models(mut self, models: ModelConfig) -> Self {
        self.models = models;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}
