use crate::campaign::style::style_description;
use crate::models::{CampaignRequest, ChatMessage, ContentPart, ImageUrl};

pub const VISION_INSTRUCTION: &str = "You are an expert product analyst. Analyze this product image in detail. \
Describe the product, its colors, textures, materials, shape, and any notable features. \
Be specific and vivid so a text-to-image AI can recreate this product accurately in a new scene. \
Keep your description to 3-4 sentences.";

const CAPTION_SYSTEM: &str = "You are an expert social media copywriter. Generate a compelling social media caption for a marketing post.

The caption should:
1. Be engaging, on-brand, and conversion-focused
2. Include 2-3 relevant hashtags at the end
3. Be between 50-150 words
4. Match the tone of the campaign theme
5. Include a clear, actionable call to action
6. Create urgency or excitement

Output ONLY the caption text, nothing else.";

pub fn vision_messages(image_data_uri: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user_parts(vec![
        ContentPart::Text {
            text: VISION_INSTRUCTION.to_string(),
        },
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: image_data_uri.to_string(),
            },
        },
    ])]
}

/// What the prompt engineer is told about the product: the vision
/// description when there is one, otherwise a generic industry placeholder.
pub fn product_details(industry: &str, product_context: &str) -> String {
    if product_context.is_empty() {
        format!("General {} product", industry)
    } else {
        format!(
            "\n\nIMPORTANT PRODUCT CONTEXT (from analyzing the uploaded product photo):\n{}\nYou MUST incorporate this exact product into the scene naturally.",
            product_context
        )
    }
}

pub fn prompt_engineer_messages(
    request: &CampaignRequest,
    product_context: &str,
) -> Vec<ChatMessage> {
    let headline = &request.headline_text;
    let style = style_description(&request.visual_style);

    let system = format!(
        r#"You are a world-class Advertising Creative Director and Expert Prompt Engineer.

Your primary mission is to take the "Main Offer/Headline" provided and design a visual composition where this offer is the absolute HERO.

CRITICAL FOCUS: The text "{headline}" MUST be integrated into the image with peak legibility and stunning typography. It should not look like an afterthought; it should be part of the scene (e.g., floating 3D text, neon sign, elegant overlay, or integrated into the set design).

The image MUST include:
1. The EXACT text "{headline}" (NO typos, NO variations)
2. Visual style: {style} (Premium and high-end)
3. Brand color {color} used strategically to make the offer pop
4. A scene optimized for a {theme}-themed {industry} campaign for "{brand}"

RULES for the generated prompt:
- Describe the TYPOGRAPHY specifically (font style, weight, material, lighting on the letters).
- Describe the PLACEMENT (center, top-third, or dynamic perspective).
- Describe the LIGHTING that makes the text readable (rim lighting, shadows for depth).
- Output ONLY the final image generation prompt. No conversational text."#,
        headline = headline,
        style = style,
        color = request.brand_color,
        theme = request.theme,
        industry = request.industry,
        brand = request.brand_name,
    );

    let user = format!(
        r#"Analyze this offer: "{headline}"
Product details: {details}
Brand: {brand}
Style goal: {style_name}

Create a prompt that makes the offer "{headline}" look like a professional, high-budget advertisement."#,
        headline = headline,
        details = product_details(&request.industry, product_context),
        brand = request.brand_name,
        style_name = request.visual_style,
    );

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

pub fn caption_messages(request: &CampaignRequest) -> Vec<ChatMessage> {
    let user = format!(
        r#"Brand: {}
Industry: {}
Theme/Occasion: {}
Main Headline: "{}"
Visual Style: {}

Write a matching social media caption that will drive engagement."#,
        request.brand_name,
        request.industry,
        request.theme,
        request.headline_text,
        request.visual_style,
    );

    vec![ChatMessage::system(CAPTION_SYSTEM), ChatMessage::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageContent;

    fn acme() -> CampaignRequest {
        CampaignRequest {
            brand_name: "Acme".into(),
            industry: "Coffee".into(),
            theme: "Autumn".into(),
            headline_text: "50% OFF".into(),
            visual_style: "Pastel".into(),
            brand_color: "#8B4513".into(),
            ..Default::default()
        }
    }

    fn text(message: &ChatMessage) -> &str {
        match &message.content {
            MessageContent::Text(text) => text,
            MessageContent::Parts(_) => panic!("expected text content"),
        }
    }

    #[test]
    fn test_prompt_engineer_embeds_campaign() {
        let messages = prompt_engineer_messages(&acme(), "");
        let system = text(&messages[0]);
        assert!(system.contains(r#"The EXACT text "50% OFF""#));
        assert!(system.contains("Visual style: soft pastel colors"));
        assert!(system.contains("Brand color #8B4513"));
        assert!(system.contains(r#"Autumn-themed Coffee campaign for "Acme""#));

        let user = text(&messages[1]);
        assert!(user.contains("Product details: General Coffee product\n"));
        assert!(user.contains("Style goal: Pastel"));
    }

    #[test]
    fn test_product_context_replaces_placeholder() {
        let messages = prompt_engineer_messages(&acme(), "A matte black ceramic mug.");
        let user = text(&messages[1]);
        assert!(user.contains("IMPORTANT PRODUCT CONTEXT"));
        assert!(user.contains("A matte black ceramic mug."));
        assert!(!user.contains("General Coffee product"));
    }

    #[test]
    fn test_vision_message_carries_image() {
        let messages = vision_messages("data:image/jpeg;base64,/9j/");
        match &messages[0].content {
            MessageContent::Parts(parts) => {
                assert_eq!(parts.len(), 2);
                assert_eq!(
                    parts[1],
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/jpeg;base64,/9j/".into()
                        }
                    }
                );
            }
            MessageContent::Text(_) => panic!("expected multimodal parts"),
        }
    }

    #[test]
    fn test_caption_brief() {
        let messages = caption_messages(&acme());
        assert!(text(&messages[0]).contains("2-3 relevant hashtags"));
        assert!(text(&messages[1]).contains(r#"Main Headline: "50% OFF""#));
    }
}
