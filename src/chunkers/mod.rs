//! Splitting strategies for job records.

mod base;
mod character_splitter;
mod hybrid_splitter;
mod section_splitter;
mod text_chunker;
mod token_splitter;

pub use base::JobSplitter;
pub use character_splitter::CharacterSplitter;
pub use hybrid_splitter::HybridSplitter;
pub use section_splitter::{JobSection, SectionSplitter, JOB_SECTIONS};
pub use text_chunker::chunk_text;
pub use token_splitter::{estimate_tokens, TokenSplitter};
