use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when requesting a generation.
#[derive(Error, Debug)]
pub enum GenAiError {
    #[error("GOOGLE_API_KEY is not set; configure it in the environment or a .env file")]
    MissingApiKey,
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("HTTP request failed")]
    Http(#[source] reqwest::Error),
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("prompt blocked by the service: {0}")]
    Blocked(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// The request URL is dropped so the query string never reaches error output.
impl From<reqwest::Error> for GenAiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl GenAiError {
    /// Configuration problems detected before any request is sent.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// Single user turn holding `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(text.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Only text parts are produced or read; other part kinds deserialize with `text: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    pub fn into_text(self) -> Result<String, GenAiError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => GenAiError::Blocked(reason),
                None => GenAiError::MalformedResponse("response has no candidates".into()),
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".into());
            return Err(GenAiError::MalformedResponse(format!(
                "candidate has no text (finish reason {reason})"
            )));
        }
        Ok(text)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}
