//! Row assembly for a single attribute value.

use plate_model::{SynonymTable, TrainingRow};
use tracing::warn;

use crate::expander::VariantExpander;
use crate::options::AugmentOptions;
use crate::splitter::split_phrases;

/// Produces the training rows for one `(attribute, value)` pair of a record.
///
/// For every phrase of the value and every expansion of that phrase, the rows
/// are emitted as:
///
/// 1. the expansion on its own,
/// 2. then, for each variant of the attribute name in order, the variant
///    followed by the expansion and the expansion followed by the variant.
#[derive(Debug, Clone, Copy)]
pub struct RowAssembler<'a> {
    table: &'a SynonymTable,
    expander: VariantExpander<'a>,
    warn_threshold: Option<u128>,
}

impl<'a> RowAssembler<'a> {
    pub fn new(table: &'a SynonymTable, options: &AugmentOptions) -> Self {
        Self {
            table,
            expander: VariantExpander::new(table).with_mode(options.token_mode),
            warn_threshold: options.expansion_warn_threshold,
        }
    }

    pub fn expander(&self) -> &VariantExpander<'a> {
        &self.expander
    }

    pub fn assemble(&self, label: &str, attribute: &str, raw_value: &str) -> Vec<TrainingRow> {
        let mut rows = Vec::new();
        self.assemble_into(&mut rows, label, attribute, raw_value);
        rows
    }

    /// Appends the rows for `raw_value` to `rows` and returns the number of phrases expanded.
    pub fn assemble_into(
        &self,
        rows: &mut Vec<TrainingRow>,
        label: &str,
        attribute: &str,
        raw_value: &str,
    ) -> usize {
        let phrases = split_phrases(raw_value);
        let attribute_variants = self.table.variants(attribute);

        for phrase in &phrases {
            self.check_expansion(label, attribute, phrase);
            for expanded in self.expander.expand(phrase) {
                rows.push(TrainingRow::new(label, expanded.as_str()));
                for variant in &attribute_variants {
                    rows.push(TrainingRow::new(label, format!("{variant} {expanded}")));
                    rows.push(TrainingRow::new(label, format!("{expanded} {variant}")));
                }
            }
        }
        phrases.len()
    }

    /// Exact number of rows [`assemble`](Self::assemble) would emit.
    pub fn row_count(&self, attribute: &str, raw_value: &str) -> u128 {
        let per_expansion = 1 + 2 * (self.table.alternates(attribute).len() as u128 + 1);
        split_phrases(raw_value)
            .into_iter()
            .map(|phrase| {
                self.expander
                    .expansion_count(phrase)
                    .saturating_mul(per_expansion)
            })
            .fold(0u128, u128::saturating_add)
    }

    fn check_expansion(&self, label: &str, attribute: &str, phrase: &str) {
        let Some(threshold) = self.warn_threshold else {
            return;
        };
        let expansions = self.expander.expansion_count(phrase);
        if expansions > threshold {
            warn!(
                label,
                attribute,
                phrase,
                expansions = %expansions,
                threshold = %threshold,
                "phrase expansion exceeds threshold"
            );
        }
    }
}
