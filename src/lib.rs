pub mod campaign;
pub mod config;
pub mod edge;
pub mod error;
pub mod logger;
pub mod models;
pub mod openrouter;

pub use campaign::CampaignPipeline;
pub use config::{Config, ModelConfig, OpenRouterConfig, ServerConfig};
pub use edge::AdImageGenerator;
pub use error::{Result, Step, StudioError};
pub use models::{AdImageRequest, CampaignRequest, CampaignResult};
pub use openrouter::OpenRouterClient;
