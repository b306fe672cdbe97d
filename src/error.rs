//! Error types for the splitting service.

use thiserror::Error;

/// Errors raised while turning job records into chunks.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The requested strategy name is not one of the recognized strategies.
    #[error("Unknown splitting strategy: {0}")]
    UnsupportedStrategy(String),

    /// A failure while processing one input item, tagged with its position.
    #[error("Error processing item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<SplitterError>,
    },
}

impl SplitterError {
    /// Wrap this error with the index of the input item that produced it.
    pub fn at_item(self, index: usize) -> Self {
        Self::Item {
            index,
            source: Box::new(self),
        }
    }

    /// Index of the failing input item, if known.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Self::Item { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitterError>;
