use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub brand_name: String,
    pub industry: String,
    pub theme: String,
    pub headline_text: String,
    pub visual_style: String,
    pub brand_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image_mime_type: Option<String>,
}

impl CampaignRequest {
    /// The uploaded photo as a data URI, only when both halves are present.
    pub fn product_image_data_uri(&self) -> Option<String> {
        match (
            self.product_image_base64.as_deref(),
            self.product_image_mime_type.as_deref(),
        ) {
            (Some(data), Some(mime)) if !data.is_empty() && !mime.is_empty() => {
                Some(format!("data:{};base64,{}", mime, data))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    pub image_url: String,
    pub caption: String,
    pub prompt: String,
}
