//! Character splitter over the job's full text.

use tracing::debug;

use super::base::{context_builder, JobSplitter};
use super::text_chunker::chunk_text;
use crate::types::{Chunk, JobRecord, Metadata, SplitterConfig};

/// Splits the full job text into fixed-size character windows.
#[derive(Debug, Default)]
pub struct CharacterSplitter;

impl CharacterSplitter {
    /// Create a new character splitter.
    pub fn new() -> Self {
        Self
    }
}

impl JobSplitter for CharacterSplitter {
    fn name(&self) -> &'static str {
        "byCharacter"
    }

    fn description(&self) -> &'static str {
        "Split job content into chunks of specified character count"
    }

    fn split(&self, job: &JobRecord, metadata: &Metadata, config: &SplitterConfig) -> Vec<Chunk> {
        let content = context_builder(config).full_content(job, config.preserve_context);
        debug!(
            content_len = content.chars().count(),
            max_chunk_size = config.max_chunk_size,
            "Splitting job by character count"
        );
        chunk_text(&content, config.max_chunk_size, config.chunk_overlap, metadata)
    }
}
