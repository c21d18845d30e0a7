use std::fmt;
use thiserror::Error;

/// The remote call a [`StudioError::Remote`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Vision,
    PromptEngineering,
    ImageGeneration,
    Caption,
    AdImage,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Vision => "Vision analysis",
            Step::PromptEngineering => "Prompt engineering",
            Step::ImageGeneration => "Image generation",
            Step::Caption => "Caption generation",
            Step::AdImage => "Ad image generation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    /// Non-success HTTP status from OpenRouter. The wording matches what the
    /// end user sees for each step.
    #[error("{}", remote_message(.step, .status, .body))]
    Remote {
        step: Step,
        status: u16,
        body: String,
    },

    #[error("{0}")]
    ResponseError(String),

    #[error("The image was generated but the URL could not be extracted")]
    ImageUrlNotExtracted,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

fn remote_message(step: &Step, status: &u16, body: &str) -> String {
    match step {
        Step::ImageGeneration => format!("{} failed: {} - {}", step, status, body),
        Step::AdImage => format!("OpenRouter API error: {}", status),
        _ => format!("{} failed: {}", step, status),
    }
}

impl StudioError {
    /// HTTP status reported by OpenRouter, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StudioError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StudioError {
    fn from(e: reqwest::Error) -> Self {
        StudioError::RequestError(e.to_string())
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        StudioError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
