use crate::{
    error::{Result, Step, StudioError},
    models::ChatRequest,
    openrouter::transport::Transport,
};
use serde_json::Value;
use std::sync::Arc;

pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Clone)]
pub struct ChatClient {
    transport: Arc<dyn Transport>,
}

impl ChatClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends one chat completion and returns the decoded reply as a generic
    /// JSON tree. Callers pick the fields they need since reply shapes vary
    /// between models.
    pub async fn complete(&self, step: Step, request: &ChatRequest) -> Result<Value> {
        let payload = serde_json::to_value(request)?;

        log::info!("Invoking model: {} ({})", request.model, step);
        log::debug!("Chat request payload: {}", summarize_payload(&payload));

        let response = self
            .transport
            .post_json(CHAT_COMPLETIONS_PATH, &payload)
            .await?;

        if !response.is_success() {
            log::error!("{} error ({}): {}", step, response.status, response.body);
            return Err(StudioError::Remote {
                step,
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("{} returned undecodable body: {}", step, response.body);
            StudioError::ResponseError(format!("{} returned invalid JSON: {}", step, e))
        })
    }
}

/// The assistant's text, trimmed. `None` when missing, not a string, or blank.
pub fn message_text(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

// Inline images are base64 and can run to megabytes; keep debug lines readable.
fn summarize_payload(payload: &Value) -> String {
    let text = payload.to_string();
    if text.len() <= 2048 {
        return text;
    }
    let mut end = 2048;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes)", &text[..end], text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatMessage;
    use crate::openrouter::transport::testing::ScriptedTransport;
    use serde_json::json;

    fn request() -> ChatRequest {
        ChatRequest::new("anthropic/claude-3.5-sonnet", vec![ChatMessage::user("hi")])
            .with_max_tokens(500)
    }

    #[test]
    fn test_message_text_trims_and_rejects_blank() {
        let reply = json!({"choices": [{"message": {"content": "  a prompt \n"}}]});
        assert_eq!(message_text(&reply).as_deref(), Some("a prompt"));

        let blank = json!({"choices": [{"message": {"content": "   "}}]});
        assert_eq!(message_text(&blank), None);

        let missing = json!({"choices": []});
        assert_eq!(message_text(&missing), None);

        let parts = json!({"choices": [{"message": {"content": [{"type": "text"}]}}]});
        assert_eq!(message_text(&parts), None);
    }

    #[tokio::test]
    async fn test_complete_posts_to_chat_endpoint() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, json!({"choices": [{"message": {"content": "ok"}}]})),
        );
        let client = ChatClient::new(transport.clone());

        let reply = client
            .complete(Step::PromptEngineering, &request())
            .await
            .unwrap();
        assert_eq!(message_text(&reply).as_deref(), Some("ok"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, CHAT_COMPLETIONS_PATH);
        assert_eq!(requests[0].1["model"], "anthropic/claude-3.5-sonnet");
        assert_eq!(requests[0].1["max_tokens"], 500);
    }

    #[tokio::test]
    async fn test_non_success_keeps_status_and_body() {
        let transport = Arc::new(ScriptedTransport::new().reply_text(402, "insufficient credits"));
        let client = ChatClient::new(transport);

        match client.complete(Step::ImageGeneration, &request()).await {
            Err(StudioError::Remote { step, status, body }) => {
                assert_eq!(step, Step::ImageGeneration);
                assert_eq!(status, 402);
                assert_eq!(body, "insufficient credits");
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_response_error() {
        let transport = Arc::new(ScriptedTransport::new().reply_text(200, "<html>"));
        let client = ChatClient::new(transport);

        let err = client
            .complete(Step::Caption, &request())
            .await
            .unwrap_err();
        assert!(matches!(err, StudioError::ResponseError(_)));
    }

    #[test]
    fn test_summarize_payload_truncates() {
        let big = json!({"data": "x".repeat(5000)});
        let summary = summarize_payload(&big);
        assert!(summary.len() < 2200);
        assert!(summary.ends_with("bytes)"));
    }
}
