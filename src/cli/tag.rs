//! CLI entry-point for review tagging.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, genai::TextGenerator, tagging};

/// Args for the `tag` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Review CSV with a `review_text` column.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Destination CSV with the added `tags` column.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[instrument(skip(generator, settings))]
pub async fn run<G: TextGenerator>(args: Args, generator: &G, settings: Settings) -> Result<()> {
    let input = args.input.unwrap_or(settings.input_path);
    let output = args.output.unwrap_or(settings.output_path);

    let tagged = tagging::run_tagging(generator, &input, &output)
        .await
        .with_context(|| format!("tagging reviews from {}", input.display()))?;
    info!(rows = tagged.len(), output = %output.display(), "tagging complete");
    println!("{}", tagged.preview(settings.preview_rows));
    Ok(())
}
