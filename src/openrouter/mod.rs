pub mod chat_client;
pub mod extract;
pub mod image_client;
pub mod transport;

use crate::{config::OpenRouterConfig, error::Result};
use std::sync::Arc;

pub use chat_client::{message_text, ChatClient};
pub use extract::{extract_image_url, ExtractedImageUrl, UrlSource};
pub use image_client::ImageClient;
pub use transport::{HttpTransport, RawResponse, Transport};

#[derive(Clone)]
pub struct OpenRouterClient {
    chat_client: ChatClient,
    image_client: ImageClient,
}

impl OpenRouterClient {
    /// Fails with a configuration error when no API key is set, before any
    /// request can be made.
    pub fn new(config: &OpenRouterConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        log::debug!("OpenRouter client ready for {}", config.base_url);
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            chat_client: ChatClient::new(transport.clone()),
            image_client: ImageClient::new(transport),
        }
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat_client
    }

    pub fn images(&self) -> &ImageClient {
        &self.image_client
    }
}
