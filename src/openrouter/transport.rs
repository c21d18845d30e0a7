use crate::{
    config::OpenRouterConfig,
    error::{Result, StudioError},
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

/// Status and raw body of an OpenRouter reply. The body is kept as text so
/// failures can be logged verbatim before anything tries to decode it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body to `path`, relative to the API base URL.
    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(config: &OpenRouterConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;
        let headers = Self::build_headers(api_key, &config.referer, &config.app_title)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StudioError::ConfigError(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    fn build_headers(api_key: &str, referer: &str, title: &str) -> Result<HeaderMap> {
        let header = |name: &str, value: &str| {
            HeaderValue::from_str(value)
                .map_err(|e| StudioError::ConfigError(format!("Invalid {} header: {}", name, e)))
        };

        let mut auth = header("Authorization", &format!("Bearer {}", api_key))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("http-referer", header("HTTP-Referer", referer)?);
        headers.insert("x-title", header("X-Title", title)?);
        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| StudioError::RequestError(format!("OpenRouter request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| StudioError::RequestError(format!("Failed to read response: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned replies in order and records every request it sees.
    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<RawResponse>>>,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, status: u16, body: Value) -> Self {
            self.push(Ok(RawResponse {
                status,
                body: body.to_string(),
            }))
        }

        pub fn reply_text(self, status: u16, body: &str) -> Self {
            self.push(Ok(RawResponse {
                status,
                body: body.to_string(),
            }))
        }

        pub fn fail(self, message: &str) -> Self {
            self.push(Err(StudioError::RequestError(message.to_string())))
        }

        fn push(self, reply: Result<RawResponse>) -> Self {
            self.replies.lock().unwrap().push_back(reply);
            self
        }

        pub fn requests(&self) -> Vec<(String, Value)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse> {
            self.requests
                .lock()
                .unwrap()
                .push((path.to_string(), body.clone()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(StudioError::RequestError("no scripted reply".into())))
        }
    }
}
