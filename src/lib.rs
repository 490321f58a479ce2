//! Summarise a fixed article and tag reviews with the Gemini generative-language API.

pub mod cli;
pub mod config;
pub mod genai;
pub mod logging;
pub mod prompts;
pub mod summarize;
pub mod table;
pub mod tagging;
