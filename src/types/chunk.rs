//! Chunk type definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SOURCE_TAG;

/// Flat metadata mapping attached to every chunk.
pub type Metadata = Map<String, Value>;

/// Merge `overrides` over `base`, returning a new mapping.
///
/// Keys present in both take the value from `overrides`.
pub fn merge_metadata<I, K>(base: &Metadata, overrides: I) -> Metadata
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.into(), value);
    }
    merged
}

/// A unit of output text plus its metadata, sized for embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// The text to embed
    pub content: String,

    /// Extracted job fields merged with strategy and post-processing keys
    pub metadata: Metadata,
}

impl Chunk {
    /// Create a new chunk.
    pub fn new(content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Length of the content in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Check if the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge keys into this chunk's metadata, overriding existing ones.
    pub fn annotate<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in entries {
            self.metadata.insert(key.into(), value);
        }
    }
}

/// A chunk as emitted to the downstream consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub content: String,
    pub metadata: Metadata,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_job_id: Option<Value>,
}

impl SplitRecord {
    /// Wrap a finished chunk for output.
    pub fn from_chunk(chunk: Chunk, original_job_id: Option<Value>) -> Self {
        Self {
            content: chunk.content,
            metadata: chunk.metadata,
            source: SOURCE_TAG.to_string(),
            original_job_id,
        }
    }
}
