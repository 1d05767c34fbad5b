//! Options controlling corpus augmentation.

use serde::{Deserialize, Serialize};

/// Phrases expanding to more variants than this trigger a warning by default.
pub const DEFAULT_EXPANSION_WARN_THRESHOLD: u128 = 4096;

/// How a phrase is cut into words before synonym substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenMode {
    /// Split on every single space.
    ///
    /// Consecutive spaces produce empty words, which have no synonyms and are
    /// rejoined as-is, so `"red  top"` expands to itself with both spaces kept.
    #[default]
    Literal,
    /// Split on whitespace runs; empty words never occur.
    CollapseWhitespace,
}

/// Options for [`CorpusBuilder`](crate::CorpusBuilder) and [`RowAssembler`](crate::RowAssembler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentOptions {
    /// Word splitting rule for phrases.
    pub token_mode: TokenMode,

    /// Log a warning when one phrase expands to more variants than this.
    /// `None` disables the check. Output is never truncated.
    pub expansion_warn_threshold: Option<u128>,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            token_mode: TokenMode::Literal,
            expansion_warn_threshold: Some(DEFAULT_EXPANSION_WARN_THRESHOLD),
        }
    }
}

impl AugmentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token_mode(mut self, mode: TokenMode) -> Self {
        self.token_mode = mode;
        self
    }

    #[must_use]
    pub fn with_expansion_warn_threshold(mut self, threshold: Option<u128>) -> Self {
        self.expansion_warn_threshold = threshold;
        self
    }
}
