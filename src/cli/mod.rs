//! Command-line interface wiring for review-tagger.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{config::Settings, genai::GeminiClient};

pub mod summarize;
pub mod tag;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Gemini article summarizer and review tagger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the service client once and dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        let client = GeminiClient::from_settings(&settings);
        match self.command {
            Commands::Summarize => summarize::run(&client).await,
            Commands::Tag(args) => tag::run(args, &client, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarise the built-in article and print the result.
    Summarize,
    /// Generate three hashtags for every review in a CSV file.
    Tag(tag::Args),
}
