use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::{
    types::{GenAiError, GenerateRequest, GenerateResponse},
    GenerationResult, TextGenerator,
};
use crate::{
    config::{Settings, DEFAULT_API_BASE, DEFAULT_MODEL},
    prompts::Prompt,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Generative Language `generateContent` endpoint.
///
/// Built once at startup and handed to the pipelines by reference.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client for the default model. A missing key is reported on first use.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: http_client(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api_key.clone())
            .with_model(&settings.model)
            .with_base_url(&settings.api_base)
    }

    /// Set the model to use for generation.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point the client at another API root.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one request and decode the response body.
    pub async fn generate_content(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenAiError> {
        let key = self.api_key.as_deref().ok_or(GenAiError::MissingApiKey)?;
        let url = self.endpoint();
        debug!(%url, model = %self.model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!(status = status.as_u16(), "generateContent failed");
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| GenAiError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<GenerationResult, GenAiError> {
        if prompt.is_empty() {
            return Err(GenAiError::EmptyPrompt);
        }
        let request = GenerateRequest::from_text(prompt.as_str());
        let response = self.generate_content(&request).await?;
        if let Some(usage) = &response.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                total_tokens = usage.total_token_count,
                "generation usage"
            );
        }
        response.into_text().map(GenerationResult::new)
    }
}

fn http_client() -> Client {
    Client::builder()
        .user_agent(concat!("review-tagger/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .brotli(true)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Prefer the `error.message` field of a JSON error body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
