//! Fixed-article summarisation.

use tracing::info;

use crate::{
    genai::{GenAiError, GenerationResult, TextGenerator},
    prompts::{summary_prompt, SUMMARY_SOURCE_TEXT},
};

/// Summarise the built-in article with one service call.
pub async fn summarize<G>(generator: &G) -> Result<GenerationResult, GenAiError>
where
    G: TextGenerator + ?Sized,
{
    let prompt = summary_prompt(SUMMARY_SOURCE_TEXT);
    info!(prompt_len = prompt.len(), "requesting summary");
    generator.generate(&prompt).await
}
