//! Token-estimate splitter.

use serde_json::json;
use tracing::debug;

use super::base::{context_builder, JobSplitter};
use super::text_chunker::chunk_text;
use crate::types::{merge_metadata, Chunk, JobRecord, Metadata, SplitterConfig};
use crate::CHARS_PER_TOKEN;

/// Rough token count of a text, rounding up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

/// Splits the full job text by estimated token count.
///
/// `max_chunk_size` and `chunk_overlap` are read as tokens and converted to
/// characters at a fixed ratio before windowing.
#[derive(Debug, Default)]
pub struct TokenSplitter;

impl TokenSplitter {
    /// Create a new token splitter.
    pub fn new() -> Self {
        Self
    }
}

impl JobSplitter for TokenSplitter {
    fn name(&self) -> &'static str {
        "byToken"
    }

    fn description(&self) -> &'static str {
        "Split based on estimated token count for embeddings"
    }

    fn split(&self, job: &JobRecord, metadata: &Metadata, config: &SplitterConfig) -> Vec<Chunk> {
        let max_chars = config.max_chunk_size.saturating_mul(CHARS_PER_TOKEN);
        let overlap_chars = config.chunk_overlap.saturating_mul(CHARS_PER_TOKEN);

        let content = context_builder(config).full_content(job, config.preserve_context);
        let estimated_tokens = estimate_tokens(&content);
        debug!(estimated_tokens, max_chars, "Splitting job by token estimate");

        let metadata = merge_metadata(metadata, [("estimated_tokens", json!(estimated_tokens))]);
        chunk_text(&content, max_chars, overlap_chars, &metadata)
    }
}
