//! Generative-text service access.

pub mod client;
pub mod types;

use std::fmt;

use async_trait::async_trait;

pub use client::GeminiClient;
pub use types::GenAiError;

use crate::prompts::Prompt;

/// Raw text returned for one prompt, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult(String);

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One service call. No retries are attempted.
    async fn generate(&self, prompt: &Prompt) -> Result<GenerationResult, GenAiError>;
}

