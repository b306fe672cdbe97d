//! Splitting strategy router.

use std::sync::Arc;

use crate::chunkers::{CharacterSplitter, HybridSplitter, JobSplitter, SectionSplitter, TokenSplitter};
use crate::error::SplitterError;
use crate::types::Strategy;

/// Router that resolves a strategy to its splitter.
pub struct SplitterRouter {
    /// One chunk per job section
    section_splitter: Arc<SectionSplitter>,
    /// Fixed-size character windows
    character_splitter: Arc<CharacterSplitter>,
    /// Fixed-size windows sized in estimated tokens
    token_splitter: Arc<TokenSplitter>,
    /// Sections with oversized ones windowed
    hybrid_splitter: Arc<HybridSplitter>,
}

impl SplitterRouter {
    /// Create a new router with one instance of every splitter.
    pub fn new() -> Self {
        Self {
            section_splitter: Arc::new(SectionSplitter::new()),
            character_splitter: Arc::new(CharacterSplitter::new()),
            token_splitter: Arc::new(TokenSplitter::new()),
            hybrid_splitter: Arc::new(HybridSplitter::new()),
        }
    }

    /// Get the splitter for the given strategy.
    pub fn get_splitter(&self, strategy: Strategy) -> Arc<dyn JobSplitter> {
        match strategy {
            Strategy::BySection => Arc::clone(&self.section_splitter) as Arc<dyn JobSplitter>,
            Strategy::ByCharacter => Arc::clone(&self.character_splitter) as Arc<dyn JobSplitter>,
            Strategy::ByToken => Arc::clone(&self.token_splitter) as Arc<dyn JobSplitter>,
            Strategy::Hybrid => Arc::clone(&self.hybrid_splitter) as Arc<dyn JobSplitter>,
        }
    }

    /// Get a splitter by its external name.
    pub fn get_splitter_by_name(&self, name: &str) -> Result<Arc<dyn JobSplitter>, SplitterError> {
        name.parse::<Strategy>()
            .map(|strategy| self.get_splitter(strategy))
    }

    /// List all available splitters.
    pub fn list_splitters(&self) -> Vec<(&'static str, &'static str)> {
        Strategy::ALL
            .into_iter()
            .map(|strategy| {
                let splitter = self.get_splitter(strategy);
                (splitter.name(), splitter.description())
            })
            .collect()
    }
}

impl Default for SplitterRouter {
    fn default() -> Self {
        Self::new()
    }
}
