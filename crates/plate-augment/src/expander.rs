//! Word-level synonym expansion of a single phrase.

use plate_model::SynonymTable;

use crate::options::TokenMode;
use crate::product::CartesianProduct;

/// Expands a phrase into every combination of per-word variants.
#[derive(Debug, Clone, Copy)]
pub struct VariantExpander<'a> {
    table: &'a SynonymTable,
    mode: TokenMode,
}

impl<'a> VariantExpander<'a> {
    pub fn new(table: &'a SynonymTable) -> Self {
        Self {
            table,
            mode: TokenMode::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: TokenMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn tokens<'p>(&self, phrase: &'p str) -> Vec<&'p str> {
        match self.mode {
            TokenMode::Literal => phrase.split(' ').collect(),
            TokenMode::CollapseWhitespace => phrase.split_whitespace().collect(),
        }
    }

    /// All substitution variants of `phrase`, words rejoined with single spaces.
    ///
    /// Enumeration follows [`CartesianProduct`] order, so the phrase exactly as
    /// written comes first. Variants that render identically are all kept.
    pub fn expand(&self, phrase: &str) -> Vec<String> {
        let choices = self.choices(phrase);
        CartesianProduct::new(&choices)
            .map(|words| join_words(&words))
            .collect()
    }

    /// Number of entries [`expand`](Self::expand) would return, without expanding.
    pub fn expansion_count(&self, phrase: &str) -> u128 {
        CartesianProduct::count_combinations(&self.choices(phrase))
    }

    fn choices<'p>(&self, phrase: &'p str) -> Vec<Vec<&'p str>>
    where
        'a: 'p,
    {
        self.tokens(phrase)
            .into_iter()
            .map(|token| self.table.variants(token))
            .collect()
    }
}

fn join_words(words: &[&&str]) -> String {
    let capacity = words.iter().map(|word| word.len() + 1).sum();
    let mut joined = String::with_capacity(capacity);
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            joined.push(' ');
        }
        joined.push_str(word);
    }
    joined
}
