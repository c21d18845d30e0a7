//! One-shot ad image generation.
//!
//! Builds a single descriptive prompt from the request and calls the
//! dedicated images endpoint once. Shares only the transport with the
//! campaign pipeline.

#[cfg(feature = "server")]
pub mod server;
pub mod style;

use crate::{
    config::Config,
    error::{Result, StudioError},
    models::{AdImageRequest, ImageGenerationRequest},
    openrouter::OpenRouterClient,
};

const IMAGE_COUNT: u32 = 1;
const IMAGE_SIZE: &str = "1024x1024";

#[derive(Clone)]
pub struct AdImageGenerator {
    client: OpenRouterClient,
    model: String,
}

impl AdImageGenerator {
    pub fn new(client: OpenRouterClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = OpenRouterClient::new(&config.openrouter)?;
        Ok(Self::new(client, config.models.edge_image_model.clone()))
    }

    /// Returns the URL of the generated image.
    pub async fn generate(&self, request: &AdImageRequest) -> Result<String> {
        let prompt = build_prompt(request);
        log::info!("Generating image with prompt: {}", prompt);

        let image_request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt,
            n: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
        };

        let response = self.client.images().generate(&image_request).await?;
        response
            .first_url()
            .map(String::from)
            .ok_or_else(|| StudioError::ResponseError("No image generated from API".into()))
    }
}

pub fn build_prompt(request: &AdImageRequest) -> String {
    let brand = request.brand_name.as_deref().unwrap_or_default();
    let mut prompt = format!(
        "A professional advertising image for brand \"{}\". {}. ",
        brand,
        style::style_prompt(request.style.as_deref())
    );
    if let Some(description) = present(&request.description) {
        prompt.push_str(&format!("Product description: {}. ", description));
    }
    if let Some(headline) = present(&request.headline) {
        prompt.push_str(&format!("Text overlay \"{}\" integrated naturally. ", headline));
    }
    prompt.push_str("High quality, commercial grade.");
    prompt
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openrouter::transport::testing::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn generator(transport: &Arc<ScriptedTransport>) -> AdImageGenerator {
        AdImageGenerator::new(
            OpenRouterClient::with_transport(transport.clone()),
            "black-forest-labs/flux-1-schnell",
        )
    }

    #[test]
    fn test_full_prompt() {
        let request = AdImageRequest {
            headline: Some("Buy 1 Get 1".into()),
            style: Some("pastel".into()),
            brand_name: Some("Bloom".into()),
            description: Some("a rose-scented candle".into()),
            ..Default::default()
        };
        assert_eq!(
            build_prompt(&request),
            "A professional advertising image for brand \"Bloom\". \
             minimalist pastel colors, soft lighting, clean composition, gentle aesthetic. \
             Product description: a rose-scented candle. \
             Text overlay \"Buy 1 Get 1\" integrated naturally. \
             High quality, commercial grade."
        );
    }

    #[test]
    fn test_optional_sections_are_skipped() {
        let request = AdImageRequest {
            brand_name: Some("Bloom".into()),
            description: Some(String::new()),
            style: Some("vaporwave".into()),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(!prompt.contains("Product description"));
        assert!(!prompt.contains("Text overlay"));
        assert!(prompt.contains("studio lighting, 8k resolution"));
        assert!(prompt.ends_with("High quality, commercial grade."));
    }

    #[tokio::test]
    async fn test_generate_sends_single_request() {
        let transport = Arc::new(
            ScriptedTransport::new().reply(200, json!({"data": [{"url": "https://img/ad.png"}]})),
        );

        let request = AdImageRequest {
            brand_name: Some("Bloom".into()),
            ..Default::default()
        };
        let url = generator(&transport).generate(&request).await.unwrap();
        assert_eq!(url, "https://img/ad.png");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "/images/generations");
        assert_eq!(requests[0].1["model"], "black-forest-labs/flux-1-schnell");
        assert_eq!(requests[0].1["n"], 1);
        assert_eq!(requests[0].1["size"], "1024x1024");
    }

    #[tokio::test]
    async fn test_missing_url_is_an_error() {
        let transport = Arc::new(ScriptedTransport::new().reply(200, json!({"data": [{}]})));

        let err = generator(&transport)
            .generate(&AdImageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No image generated from API");
    }
}
