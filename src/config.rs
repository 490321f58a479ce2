//! Runtime configuration utilities for review-tagger.

use std::{env, path::PathBuf};

/// Environment variable holding the Generative Language API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
/// Public Generative Language REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_INPUT: &str = "data/ulasan.csv";
pub const DEFAULT_OUTPUT: &str = "data/ulasan_with_tags.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Application configuration resolved from `.env` and defaults.
#[derive(Clone)]
pub struct Settings {
    /// API key; absence is only reported when the first request is attempted.
    pub api_key: Option<String>,
    /// Model identifier appended to the `models/` path.
    pub model: String,
    /// Base URL of the REST API, without a trailing slash.
    pub api_base: String,
    /// Review table read by the `tag` command.
    pub input_path: PathBuf,
    /// Destination of the tagged review table.
    pub output_path: PathBuf,
    /// Number of rows echoed after tagging.
    pub preview_rows: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let model = lookup("GEMINI_MODEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = lookup("GEMINI_API_BASE")
            .map(|v| v.trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let input_path = lookup("REVIEWS_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
        let output_path = lookup("REVIEWS_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let preview_rows = lookup("PREVIEW_ROWS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PREVIEW_ROWS);

        Self {
            api_key,
            model,
            api_base,
            input_path,
            output_path,
            preview_rows,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("input_path", &self.input_path)
            .field("output_path", &self.output_path)
            .field("preview_rows", &self.preview_rows)
            .finish()
    }
}
