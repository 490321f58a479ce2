//! Row-by-row hashtag generation over a review table.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{
    genai::{GenAiError, TextGenerator},
    prompts::tagging_prompt,
    table::{ReviewTable, TableError, TAGS_COLUMN},
};

#[derive(Error, Debug)]
pub enum TaggingError {
    /// `row` is 1-indexed.
    #[error("tag generation failed on row {row}: {source}")]
    Generate {
        row: usize,
        #[source]
        source: GenAiError,
    },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Ask the model for tags for every review, strictly one row at a time.
///
/// Returns a new table with a `tags` column, or the first failure. Responses are
/// stored verbatim.
pub async fn tag_reviews<G>(
    generator: &G,
    table: &ReviewTable,
) -> Result<ReviewTable, TaggingError>
where
    G: TextGenerator + ?Sized,
{
    let mut tags = Vec::with_capacity(table.len());
    for (idx, review) in table.review_texts()?.into_iter().enumerate() {
        let prompt = tagging_prompt(review);
        debug!(row = idx + 1, prompt_len = prompt.len(), "requesting tags");
        let result = generator
            .generate(&prompt)
            .await
            .map_err(|source| TaggingError::Generate {
                row: idx + 1,
                source,
            })?;
        tags.push(result.into_inner());
    }
    Ok(table.with_column(TAGS_COLUMN, tags)?)
}

/// Read `input`, tag every row, then write `output` once.
///
/// Nothing is written when any row fails.
#[instrument(skip(generator))]
pub async fn run_tagging<G>(
    generator: &G,
    input: &Path,
    output: &Path,
) -> Result<ReviewTable, TaggingError>
where
    G: TextGenerator + ?Sized,
{
    let table = ReviewTable::read(input)?;
    info!(rows = table.len(), "tagging reviews");
    let tagged = tag_reviews(generator, &table).await?;
    tagged.write(output)?;
    Ok(tagged)
}
