//! Read-only synonym lookup used to widen the training vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

/// Built-in alternates for words that appear in plate descriptions.
const PLATE_SYNONYMS: &[(&str, &[&str])] = &[
    ("middle", &["center"]),
    ("line", &["strip", "banner", "stripe"]),
    ("lines", &["strips", "banners", "stripes"]),
    ("solid", &["all"]),
    ("plate", &["background"]),
];

/// Immutable mapping from a term to its ordered alternates.
///
/// Lookups are exact and case-sensitive. A term without an entry has no
/// alternates. Alternates are kept exactly as configured, duplicates included,
/// but none may be empty or whitespace-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    /// A table with no entries; every term is its own only variant.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Result<Self> {
        if entries.contains_key("") {
            return Err(ModelError::EmptySynonymTerm);
        }
        let blank = entries
            .iter()
            .find(|(_, alternates)| alternates.iter().any(|alt| alt.trim().is_empty()));
        if let Some((term, _)) = blank {
            return Err(ModelError::BlankSynonymAlternate { term: term.clone() });
        }
        Ok(Self { entries })
    }

    /// Builds a table from `(term, alternates)` pairs, rejecting repeated terms.
    pub fn from_pairs<I, K, A, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (term, alternates) in pairs {
            let term = term.into();
            if entries.contains_key(&term) {
                return Err(ModelError::DuplicateSynonymTerm { term });
            }
            entries.insert(term, alternates.into_iter().map(Into::into).collect());
        }
        Self::new(entries)
    }

    /// The license-plate vocabulary shipped with the trainer.
    pub fn plate_defaults() -> Self {
        let entries: BTreeMap<String, Vec<String>> = PLATE_SYNONYMS
            .iter()
            .map(|(term, alternates)| {
                (
                    (*term).to_string(),
                    alternates
                        .iter()
                        .map(|alt| (*alt).to_string())
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn alternates(&self, term: &str) -> &[String] {
        self.entries
            .get(term)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The term itself followed by its alternates, in configured order.
    pub fn variants<'a>(&'a self, term: &'a str) -> Vec<&'a str> {
        let alternates = self.alternates(term);
        let mut variants = Vec::with_capacity(alternates.len() + 1);
        variants.push(term);
        variants.extend(alternates.iter().map(String::as_str));
        variants
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by term.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(term, alternates)| (term.as_str(), alternates.as_slice()))
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for SynonymTable {
    type Error = ModelError;

    fn try_from(entries: BTreeMap<String, Vec<String>>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<SynonymTable> for BTreeMap<String, Vec<String>> {
    fn from(table: SynonymTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_term_is_its_own_variant() {
        let table = SynonymTable::plate_defaults();
        assert_eq!(table.variants("red"), vec!["red"]);
        assert!(table.alternates("red").is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = SynonymTable::plate_defaults();
        assert_eq!(table.variants("Middle"), vec!["Middle"]);
        assert_eq!(table.variants("middle"), vec!["middle", "center"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let table = SynonymTable::from_pairs([("red", ["red", "crimson", "crimson"])]).unwrap();
        assert_eq!(table.variants("red"), vec!["red", "red", "crimson", "crimson"]);
    }

    #[test]
    fn rejects_empty_term() {
        let err = SynonymTable::from_pairs([("", ["blank"])]).unwrap_err();
        assert_eq!(err, ModelError::EmptySynonymTerm);
    }

    #[test]
    fn rejects_blank_alternate() {
        let err = SynonymTable::from_pairs([("solid", vec!["all"]), ("plate", vec![" "])])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::BlankSynonymAlternate {
                term: "plate".to_string()
            }
        );
        assert!(SynonymTable::from_pairs([("solid", [""])]).is_err());
    }

    #[test]
    fn rejects_repeated_term() {
        let err = SynonymTable::from_pairs([("red", ["crimson"]), ("red", ["scarlet"])])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateSynonymTerm {
                term: "red".to_string()
            }
        );
    }
}
