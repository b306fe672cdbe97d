//! Enrichment of job records and chunks for embedding.
//!
//! This module provides:
//! - Metadata extraction from job records
//! - Context prefix and full-text generation
//! - Chunk index annotation over a finished chunk sequence

pub mod chunk_index;
pub mod context_builder;
pub mod metadata;

pub use chunk_index::annotate_chunk_indices;
pub use context_builder::{section_text, ContextBuilder};
pub use metadata::extract_metadata;
