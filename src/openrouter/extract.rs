//! Image URL extraction from chat-completion replies.
//!
//! Image-capable models return the picture in different places: an array of
//! typed content parts, a bare URL string as the content, or somewhere else in
//! the reply entirely. The structured path is always tried first. The tree
//! search is a loose compatibility fallback for replies whose shape is not
//! fixed by any contract, and callers can see which path produced the URL.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    /// Found in `choices[0].message.content`.
    Structured,
    /// Found by searching the whole reply.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImageUrl {
    pub url: String,
    pub source: UrlSource,
}

pub fn extract_image_url(response: &Value) -> Option<ExtractedImageUrl> {
    if let Some(url) = structured_image_url(response) {
        return Some(ExtractedImageUrl {
            url,
            source: UrlSource::Structured,
        });
    }
    search_image_url(response).map(|url| ExtractedImageUrl {
        url,
        source: UrlSource::Fallback,
    })
}

/// Reads the image from `choices[0].message.content` only.
pub fn structured_image_url(response: &Value) -> Option<String> {
    match response.pointer("/choices/0/message/content")? {
        Value::Array(parts) => {
            let part = parts.iter().find(|part| is_image_part(part))?;
            part.pointer("/image_url/url")
                .and_then(Value::as_str)
                .or_else(|| part.get("url").and_then(Value::as_str))
                .filter(|url| !url.is_empty())
                .map(String::from)
        }
        Value::String(content) if looks_like_image_url(content) => Some(content.clone()),
        _ => None,
    }
}

fn is_image_part(part: &Value) -> bool {
    part.get("type").and_then(Value::as_str) == Some("image")
        || part.get("image_url").map_or(false, |v| !v.is_null())
}

/// Depth-first search of the whole tree in document order. Within an object,
/// a `url` field and then an `image_url.url` field are preferred over the
/// remaining children.
pub fn search_image_url(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            if let Some(url) = map
                .get("url")
                .and_then(Value::as_str)
                .filter(|url| looks_like_image_url(url))
            {
                return Some(url.to_string());
            }
            if let Some(url) = map
                .get("image_url")
                .and_then(|image| image.get("url"))
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty())
            {
                return Some(url.to_string());
            }
            map.values().find_map(search_child)
        }
        Value::Array(items) => items.iter().find_map(search_child),
        _ => None,
    }
}

fn search_child(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if looks_like_image_url(s) => Some(s.clone()),
        _ => search_image_url(value),
    }
}

pub fn looks_like_image_url(s: &str) -> bool {
    s.starts_with("http") || s.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_part_wins_over_deeper_urls() {
        let reply = json!({
            "choices": [{
                "message": {
                    "content": [
                        { "type": "image_url", "image_url": { "url": "https://cdn.example/hero.png" } }
                    ],
                    "annotations": [{ "url": "https://a.example/other.png" }]
                }
            }],
            "provider": { "url": "https://a.example/provider" }
        });

        let found = extract_image_url(&reply).unwrap();
        assert_eq!(found.url, "https://cdn.example/hero.png");
        assert_eq!(found.source, UrlSource::Structured);
    }

    #[test]
    fn test_image_tagged_part_with_plain_url() {
        let reply = json!({
            "choices": [{ "message": { "content": [
                { "type": "text", "text": "Here you go" },
                { "type": "image", "url": "data:image/png;base64,iVBOR" }
            ]}}]
        });
        assert_eq!(
            structured_image_url(&reply).as_deref(),
            Some("data:image/png;base64,iVBOR")
        );
    }

    #[test]
    fn test_string_content_that_is_a_url() {
        let reply = json!({"choices": [{"message": {"content": "https://img.example/x.webp"}}]});
        let found = extract_image_url(&reply).unwrap();
        assert_eq!(found.url, "https://img.example/x.webp");
        assert_eq!(found.source, UrlSource::Structured);

        let prose = json!({"choices": [{"message": {"content": "I made an image for you"}}]});
        assert_eq!(structured_image_url(&prose), None);
    }

    #[test]
    fn test_fallback_finds_images_array() {
        let reply = json!({
            "id": "gen-123",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "",
                    "images": [
                        { "type": "image_url", "image_url": { "url": "data:image/png;base64,AAAA" } }
                    ]
                }
            }]
        });
        assert_eq!(structured_image_url(&reply), None);

        let found = extract_image_url(&reply).unwrap();
        assert_eq!(found.url, "data:image/png;base64,AAAA");
        assert_eq!(found.source, UrlSource::Fallback);
    }

    #[test]
    fn test_fallback_walks_fields_in_document_order() {
        let reply: Value = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"","images":[{"image_url":{"url":"data:image/png;base64,GEN"}}]}}],
                "annotations":[{"url":"https://docs.example/policy"}]}"#,
        )
        .unwrap();

        let found = extract_image_url(&reply).unwrap();
        assert_eq!(found.url, "data:image/png;base64,GEN");
        assert_eq!(found.source, UrlSource::Fallback);
    }

    #[test]
    fn test_fallback_accepts_any_url_like_string_field() {
        let reply = json!({ "result": { "output": ["not a url", "https://files.example/out.jpg"] } });
        assert_eq!(
            search_image_url(&reply).as_deref(),
            Some("https://files.example/out.jpg")
        );
    }

    #[test]
    fn test_nothing_found() {
        let reply = json!({
            "choices": [{ "message": { "content": "Sorry, I can't draw that." } }],
            "usage": { "total_tokens": 12 }
        });
        assert_eq!(extract_image_url(&reply), None);
        assert_eq!(search_image_url(&json!("https://bare-root-string")), None);
    }
}
