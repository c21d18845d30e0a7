use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body for the dedicated `/images/generations` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

impl ImageGenerationResponse {
    pub fn first_url(&self) -> Option<&str> {
        self.data
            .first()
            .and_then(|d| d.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Body accepted by the one-shot ad image endpoint. Every field is optional,
/// and scalar values of any JSON type are taken as their text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdImageRequest {
    #[serde(default, deserialize_with = "loose_text")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub brand_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub product_image_url: Option<String>,
}

/// Strings pass through, numbers and booleans are stringified, `null` is
/// absent, and arrays or objects keep their JSON text.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdImageResponse {
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ad_image_request_takes_scalars_as_text() {
        let request: AdImageRequest =
            serde_json::from_value(json!({"brandName": 42, "headline": true})).unwrap();
        assert_eq!(request.brand_name.as_deref(), Some("42"));
        assert_eq!(request.headline.as_deref(), Some("true"));
        assert_eq!(request.style, None);
    }

    #[test]
    fn test_ad_image_request_null_and_nested_values() {
        let request: AdImageRequest = serde_json::from_value(json!({
            "style": null,
            "description": ["bold", "red"],
            "logoUrl": "https://cdn.example/logo.svg"
        }))
        .unwrap();
        assert_eq!(request.style, None);
        assert_eq!(request.description.as_deref(), Some(r#"["bold","red"]"#));
        assert_eq!(request.logo_url.as_deref(), Some("https://cdn.example/logo.svg"));
    }

    #[test]
    fn test_first_url_skips_empty() {
        let response: ImageGenerationResponse =
            serde_json::from_value(json!({"data": [{"url": ""}]})).unwrap();
        assert_eq!(response.first_url(), None);
    }
}
