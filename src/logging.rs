//! Structured logging bootstrap using `tracing`.
//!
//! Events go to stderr; stdout carries only the summary line or the table preview.

use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid. HTTP internals stay quiet.
pub const DEFAULT_FILTER: &str = "review_tagger=info,hyper=warn,reqwest=warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;

    tracing::debug!(filter = DEFAULT_FILTER, "tracing initialised");
    Ok(())
}
