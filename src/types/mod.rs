//! Core types for the splitting service.

mod chunk;
mod config;
mod job;

pub use chunk::{merge_metadata, Chunk, Metadata, SplitRecord};
pub use config::{SplitterConfig, Strategy};
pub use job::{FieldValue, JobRecord};
