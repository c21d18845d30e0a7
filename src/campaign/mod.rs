pub mod prompts;
pub mod style;

use crate::{
    config::{Config, ModelConfig},
    error::{Result, Step, StudioError},
    logger,
    models::{CampaignRequest, CampaignResult, ChatRequest, ChatMessage, Modality},
    openrouter::{extract_image_url, message_text, ExtractedImageUrl, OpenRouterClient},
};

const VISION_MAX_TOKENS: u32 = 500;
const PROMPT_MAX_TOKENS: u32 = 500;
const CAPTION_MAX_TOKENS: u32 = 300;

/// Four sequential OpenRouter calls: optional vision analysis, prompt
/// engineering, image generation and a best-effort caption. Vision and
/// caption failures degrade to empty strings; prompt and image failures
/// abort the run.
#[derive(Clone)]
pub struct CampaignPipeline {
    client: OpenRouterClient,
    models: ModelConfig,
}

impl CampaignPipeline {
    pub fn new(client: OpenRouterClient, models: ModelConfig) -> Self {
        Self { client, models }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = OpenRouterClient::new(&config.openrouter)?;
        Ok(Self::new(client, config.models.clone()))
    }

    pub async fn generate(&self, request: &CampaignRequest) -> Result<CampaignResult> {
        let _timer = logger::timer("Campaign generation");

        let product_context = match request.product_image_data_uri() {
            Some(data_uri) => self.analyze_product(&data_uri).await,
            None => {
                log::debug!("No product image supplied, skipping vision analysis");
                String::new()
            }
        };

        let prompt = self.engineer_prompt(request, &product_context).await?;
        let image = self.generate_image(&prompt).await?;
        let caption = self.write_caption(request).await;

        Ok(CampaignResult {
            image_url: image.url,
            caption,
            prompt,
        })
    }

    async fn analyze_product(&self, data_uri: &str) -> String {
        let _timer = logger::timer("Step 1: vision analysis");

        let request = ChatRequest::new(
            self.models.vision_model.clone(),
            prompts::vision_messages(data_uri),
        )
        .with_max_tokens(VISION_MAX_TOKENS);

        match self.client.chat().complete(Step::Vision, &request).await {
            Ok(reply) => message_text(&reply).unwrap_or_else(|| {
                log::warn!("Vision reply carried no description");
                String::new()
            }),
            Err(e) => {
                log::error!("Vision failed, continuing without product context: {}", e);
                String::new()
            }
        }
    }

    async fn engineer_prompt(
        &self,
        request: &CampaignRequest,
        product_context: &str,
    ) -> Result<String> {
        let _timer = logger::timer("Step 2: prompt engineering");

        let chat = ChatRequest::new(
            self.models.text_model.clone(),
            prompts::prompt_engineer_messages(request, product_context),
        )
        .with_max_tokens(PROMPT_MAX_TOKENS);

        let reply = self
            .client
            .chat()
            .complete(Step::PromptEngineering, &chat)
            .await?;

        let prompt = message_text(&reply)
            .ok_or_else(|| StudioError::ResponseError("Failed to generate prompt".into()))?;

        log::info!("Generated prompt: {}", prompt);
        Ok(prompt)
    }

    async fn generate_image(&self, prompt: &str) -> Result<ExtractedImageUrl> {
        let _timer = logger::timer("Step 3: image generation");

        let chat = ChatRequest::new(
            self.models.image_model.clone(),
            vec![ChatMessage::user(prompt)],
        )
        .with_modalities(vec![Modality::Image]);

        let reply = self
            .client
            .chat()
            .complete(Step::ImageGeneration, &chat)
            .await?;

        log::debug!("Image reply: {}", reply);

        match extract_image_url(&reply) {
            Some(image) => {
                log::info!(
                    "Extracted image URL ({:?} path): {}",
                    image.source,
                    preview(&image.url)
                );
                Ok(image)
            }
            None => {
                log::error!("No image URL found in response: {}", reply);
                Err(StudioError::ImageUrlNotExtracted)
            }
        }
    }

    async fn write_caption(&self, request: &CampaignRequest) -> String {
        let _timer = logger::timer("Step 4: caption generation");

        let chat = ChatRequest::new(
            self.models.text_model.clone(),
            prompts::caption_messages(request),
        )
        .with_max_tokens(CAPTION_MAX_TOKENS);

        match self.client.chat().complete(Step::Caption, &chat).await {
            Ok(reply) => message_text(&reply).unwrap_or_default(),
            Err(e) => {
                log::error!("Caption generation error: {}", e);
                String::new()
            }
        }
    }
}

// Data URIs are long; log only their head.
fn preview(url: &str) -> &str {
    match url.char_indices().nth(96) {
        Some((end, _)) => &url[..end],
        None => url,
    }
}
