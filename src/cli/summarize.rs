//! CLI entry-point for the article summary.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::{genai::TextGenerator, summarize};

#[instrument(skip(generator))]
pub async fn run<G: TextGenerator>(generator: &G) -> Result<()> {
    let summary = summarize::summarize(generator)
        .await
        .context("generating article summary")?;
    info!(chars = summary.as_str().chars().count(), "generated summary");
    println!("Response from Gemini: {summary}");
    Ok(())
}
