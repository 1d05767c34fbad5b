#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// A single `(label, text)` training example.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingRow {
    pub label: String,
    pub text: String,
}

impl TrainingRow {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Ordered sequence of training rows.
///
/// Row order is part of the contract: seeded train/test splits downstream
/// are only reproducible when the same input yields the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    rows: Vec<TrainingRow>,
}

impl Corpus {
    pub fn new(rows: Vec<TrainingRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingRow> {
        self.rows.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.label.as_str())
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.text.as_str())
    }

    /// Splits the corpus into parallel `labels` and `texts` columns.
    pub fn into_columns(self) -> (Vec<String>, Vec<String>) {
        self.rows
            .into_iter()
            .map(|row| (row.label, row.text))
            .unzip()
    }

    /// Row count per label, in order of first appearance.
    pub fn label_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in &self.rows {
            // Rows of one label are usually contiguous.
            match counts.iter_mut().rev().find(|(label, _)| *label == row.label) {
                Some(entry) => entry.1 += 1,
                None => counts.push((row.label.clone(), 1)),
            }
        }
        counts
    }
}

impl From<Vec<TrainingRow>> for Corpus {
    fn from(rows: Vec<TrainingRow>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<TrainingRow> for Corpus {
    fn from_iter<I: IntoIterator<Item = TrainingRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a TrainingRow;
    type IntoIter = std::slice::Iter<'a, TrainingRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for Corpus {
    type Item = TrainingRow;
    type IntoIter = std::vec::IntoIter<TrainingRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
