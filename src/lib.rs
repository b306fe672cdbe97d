//! Job Text Splitter Library
//!
//! Splits semi-structured job-posting records into chunks sized and
//! annotated for vector embedding and semantic search.

pub mod api;
pub mod batch;
pub mod chunkers;
pub mod enrichment;
pub mod error;
pub mod router;
pub mod types;

pub use batch::{BatchOutput, BatchProcessor, BatchStats};
pub use chunkers::{chunk_text, JobSplitter};
pub use error::SplitterError;
pub use router::SplitterRouter;
pub use types::{Chunk, JobRecord, Metadata, SplitRecord, SplitterConfig, Strategy};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::batch::*;
    pub use crate::chunkers::*;
    pub use crate::enrichment::*;
    pub use crate::error::SplitterError;
    pub use crate::router::SplitterRouter;
    pub use crate::types::*;
}

/// Default maximum chunk size (characters, or tokens for `byToken`)
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// Default overlap between consecutive chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Characters per token used for token estimates
pub const CHARS_PER_TOKEN: usize = 4;

/// Organization named in the context prefix unless configured otherwise
pub const DEFAULT_ORGANIZATION: &str = "Booz Allen Hamilton";

/// `source` tag on every emitted record
pub const SOURCE_TAG: &str = "job_text_splitter";
