//! Configuration types for splitting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SplitterError;
use crate::{DEFAULT_CHUNK_OVERLAP, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_ORGANIZATION};

/// The named algorithms for turning one job record into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// One chunk per semantic section (title, description, ...)
    BySection,
    /// Fixed-size character windows over the full job text
    ByCharacter,
    /// Fixed-size windows sized by estimated token count
    ByToken,
    /// Section chunks, with oversized sections split further
    Hybrid,
}

impl Strategy {
    /// All strategies in presentation order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BySection,
        Strategy::ByCharacter,
        Strategy::ByToken,
        Strategy::Hybrid,
    ];

    /// The external name of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BySection => "bySection",
            Strategy::ByCharacter => "byCharacter",
            Strategy::ByToken => "byToken",
            Strategy::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SplitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| SplitterError::UnsupportedStrategy(s.to_string()))
    }
}

/// Invocation options for the splitter.
///
/// Keys are camelCase on the wire and all optional; missing ones take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitterConfig {
    /// Strategy name, resolved per item so failures carry the item index
    pub strategy: String,

    /// Chunk-size ceiling (characters, or tokens for `byToken`)
    pub max_chunk_size: usize,

    /// Overlap in the same unit as `max_chunk_size`
    pub chunk_overlap: usize,

    /// Whether to copy job fields into chunk metadata
    pub include_metadata: bool,

    /// Job fields copied into metadata when `include_metadata` is set
    pub metadata_fields: Vec<String>,

    /// Whether to prefix chunks with the context sentence
    pub preserve_context: bool,

    /// Whether to annotate `chunk_index` / `total_chunks`
    pub add_chunk_index: bool,

    /// Organization named in the context prefix
    pub organization: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Hybrid.to_string(),
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            include_metadata: true,
            metadata_fields: default_metadata_fields(),
            preserve_context: true,
            add_chunk_index: true,
            organization: DEFAULT_ORGANIZATION.to_string(),
        }
    }
}

fn default_metadata_fields() -> Vec<String> {
    ["job_id", "title", "location", "job_type"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl SplitterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            strategy: std::env::var("SPLITTER_STRATEGY").unwrap_or(defaults.strategy),
            max_chunk_size: env_parse("MAX_CHUNK_SIZE").unwrap_or(defaults.max_chunk_size),
            chunk_overlap: env_parse("CHUNK_OVERLAP").unwrap_or(defaults.chunk_overlap),
            include_metadata: env_parse("INCLUDE_METADATA").unwrap_or(defaults.include_metadata),
            metadata_fields: std::env::var("METADATA_FIELDS")
                .map(|s| {
                    s.split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(defaults.metadata_fields),
            preserve_context: env_parse("PRESERVE_CONTEXT").unwrap_or(defaults.preserve_context),
            add_chunk_index: env_parse("ADD_CHUNK_INDEX").unwrap_or(defaults.add_chunk_index),
            organization: std::env::var("ORGANIZATION_NAME").unwrap_or(defaults.organization),
        }
    }

    /// Resolve the configured strategy name.
    pub fn strategy(&self) -> Result<Strategy, SplitterError> {
        self.strategy.parse()
    }

    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy.to_string();
        self
    }

    /// Set the max chunk size and overlap.
    pub fn with_size(mut self, max_chunk_size: usize, chunk_overlap: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Set whether metadata is extracted.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Set whether the context prefix is added.
    pub fn with_context(mut self, preserve: bool) -> Self {
        self.preserve_context = preserve;
        self
    }

    /// Set whether chunk indices are annotated.
    pub fn with_chunk_index(mut self, add: bool) -> Self {
        self.add_chunk_index = add;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>().unwrap(), strategy);
        }
        assert!(matches!(
            "bySentence".parse::<Strategy>(),
            Err(SplitterError::UnsupportedStrategy(name)) if name == "bySentence"
        ));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SplitterConfig =
            serde_json::from_str(r#"{"strategy": "byToken", "maxChunkSize": 100}"#).unwrap();
        assert_eq!(config.strategy().unwrap(), Strategy::ByToken);
        assert_eq!(config.max_chunk_size, 100);
        assert_eq!(config.chunk_overlap, DEFAULT_CHUNK_OVERLAP);
        assert_eq!(config.metadata_fields, vec!["job_id", "title", "location", "job_type"]);
        assert!(config.add_chunk_index);
    }

    #[test]
    fn test_default_strategy_is_hybrid() {
        assert_eq!(SplitterConfig::default().strategy().unwrap(), Strategy::Hybrid);
    }
}
