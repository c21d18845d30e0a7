use crate::{
    error::{Result, Step, StudioError},
    models::{ImageGenerationRequest, ImageGenerationResponse},
    openrouter::transport::Transport,
};
use std::sync::Arc;

pub const IMAGE_GENERATIONS_PATH: &str = "/images/generations";

#[derive(Clone)]
pub struct ImageClient {
    transport: Arc<dyn Transport>,
}

impl ImageClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn generate(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        let payload = serde_json::to_value(request)?;

        log::info!("Generating image with model: {}", request.model);

        let response = self
            .transport
            .post_json(IMAGE_GENERATIONS_PATH, &payload)
            .await?;

        if !response.is_success() {
            log::error!("OpenRouter error ({}): {}", response.status, response.body);
            return Err(StudioError::Remote {
                step: Step::AdImage,
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| StudioError::ResponseError(format!("Invalid image response: {}", e)))
    }
}
