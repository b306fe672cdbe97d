//! Base trait for all job splitters.

use crate::enrichment::ContextBuilder;
use crate::types::{Chunk, JobRecord, Metadata, SplitterConfig};

/// The core trait that all splitting strategies implement.
///
/// A splitter takes one job record and turns it into an ordered sequence of
/// chunks suitable for embedding and retrieval.
pub trait JobSplitter: Send + Sync {
    /// Get the external name of this splitter.
    fn name(&self) -> &'static str;

    /// Split the job into chunks.
    ///
    /// # Arguments
    /// * `job` - The job record to split
    /// * `metadata` - Base metadata every chunk starts from
    /// * `config` - Sizes, overlap and context settings
    fn split(&self, job: &JobRecord, metadata: &Metadata, config: &SplitterConfig) -> Vec<Chunk>;

    /// Get the description of this splitter.
    fn description(&self) -> &'static str {
        "A job splitter"
    }
}

/// Context builder for the organization named in `config`.
pub(crate) fn context_builder(config: &SplitterConfig) -> ContextBuilder {
    ContextBuilder::new().with_organization(config.organization.as_str())
}

/// Context prefix for the job, or an empty string when context is disabled.
pub(crate) fn context_prefix(job: &JobRecord, config: &SplitterConfig) -> String {
    if config.preserve_context {
        context_builder(config).context_prefix(job)
    } else {
        String::new()
    }
}
