//! Hybrid splitter: sections first, oversized sections windowed.

use tracing::debug;

use super::base::JobSplitter;
use super::section_splitter::SectionSplitter;
use super::text_chunker::chunk_text;
use crate::types::{Chunk, JobRecord, Metadata, SplitterConfig};

/// Splits a job by section, then re-splits any section chunk longer than
/// `max_chunk_size` with the fixed-size chunker, in place.
#[derive(Debug, Default)]
pub struct HybridSplitter {
    sections: SectionSplitter,
}

impl HybridSplitter {
    /// Create a new hybrid splitter.
    pub fn new() -> Self {
        Self {
            sections: SectionSplitter::new(),
        }
    }
}

impl JobSplitter for HybridSplitter {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn description(&self) -> &'static str {
        "Combine section-based splitting with character limits"
    }

    fn split(&self, job: &JobRecord, metadata: &Metadata, config: &SplitterConfig) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for chunk in self.sections.split(job, metadata, config) {
            if chunk.len() <= config.max_chunk_size {
                chunks.push(chunk);
                continue;
            }

            debug!(
                section = ?chunk.metadata.get("section"),
                len = chunk.len(),
                "Section exceeds max chunk size, splitting"
            );
            chunks.extend(chunk_text(
                &chunk.content,
                config.max_chunk_size,
                config.chunk_overlap,
                &chunk.metadata,
            ));
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_small_sections_untouched() {
        let job = JobRecord::from_value(&json!({"title": "A", "description": "B"}));
        let config = SplitterConfig::default().with_context(false);
        let chunks = HybridSplitter::new().split(&job, &Metadata::new(), &config);

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].metadata.get("sub_chunk_index").is_none());
    }

    #[test]
    fn test_oversized_section_spliced_in_order() {
        let job = JobRecord::from_value(&json!({
            "title": "Data Scientist",
            "description": "Build models for analysts. ".repeat(10),
            "benefits": "Health and dental.",
        }));
        let config = SplitterConfig::default()
            .with_context(false)
            .with_size(80, 10);
        let chunks = HybridSplitter::new().split(&job, &Metadata::new(), &config);

        assert!(chunks.len() > 3);
        assert_eq!(chunks[0].metadata["section"], json!("title"));
        assert_eq!(chunks.last().unwrap().metadata["section"], json!("benefits"));

        let description: Vec<&Chunk> = chunks
            .iter()
            .filter(|c| c.metadata["section"] == json!("description"))
            .collect();
        assert!(description.len() > 1);
        assert!(description[0].content.starts_with("Job Description: "));
        for (i, chunk) in description.iter().enumerate() {
            assert_eq!(chunk.metadata["section_label"], json!("Job Description"));
            assert_eq!(chunk.metadata["section_priority"], json!(2));
            assert_eq!(chunk.metadata["sub_chunk_index"], json!(i));
            assert_eq!(chunk.metadata["chunk_size"], json!(chunk.len()));
            assert!(chunk.len() <= 80);
        }
    }
}
