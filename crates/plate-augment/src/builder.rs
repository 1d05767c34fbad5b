//! Corpus construction from raw plate records.

use plate_model::{Corpus, DescriptionValue, RawRecord, SynonymTable};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::assembler::RowAssembler;
use crate::options::AugmentOptions;
use crate::splitter::split_phrases;

/// Counters collected while building a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub records_seen: usize,
    pub sample_records_skipped: usize,
    pub attributes_expanded: usize,
    pub attributes_skipped: usize,
    pub phrases_expanded: usize,
    pub rows_emitted: usize,
}

/// Size of a corpus computed from the records without materializing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusEstimate {
    /// Exact number of rows [`CorpusBuilder::build`] will produce.
    pub rows: u128,
    /// Expansion count of the single most prolific phrase.
    pub largest_phrase_expansions: u128,
}

/// Builds the ordered training corpus from raw records.
///
/// Records keyed `"sample"` are skipped entirely. Attributes whose value is
/// not text contribute nothing and do not affect their siblings. Everything
/// else is expanded by [`RowAssembler`] and appended in encounter order.
#[derive(Debug, Clone)]
pub struct CorpusBuilder<'a> {
    table: &'a SynonymTable,
    options: AugmentOptions,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(table: &'a SynonymTable) -> Self {
        Self {
            table,
            options: AugmentOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: AugmentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AugmentOptions {
        &self.options
    }

    pub fn build(&self, records: &[RawRecord]) -> Corpus {
        self.build_with_report(records).0
    }

    pub fn build_with_report(&self, records: &[RawRecord]) -> (Corpus, BuildReport) {
        let span = info_span!("build_corpus", record_count = records.len());
        let _guard = span.enter();

        let assembler = RowAssembler::new(self.table, &self.options);
        let mut report = BuildReport::default();
        let mut rows = Vec::new();

        for record in records {
            report.records_seen += 1;
            if record.is_sample() {
                report.sample_records_skipped += 1;
                debug!(version = %record.version, "skipping sample record");
                continue;
            }

            let start = rows.len();
            for (attribute, value) in record.description.iter() {
                match value {
                    DescriptionValue::Text(raw) => {
                        report.phrases_expanded +=
                            assembler.assemble_into(&mut rows, &record.key, attribute, raw);
                        report.attributes_expanded += 1;
                    }
                    DescriptionValue::Other => {
                        report.attributes_skipped += 1;
                        debug!(
                            label = %record.key,
                            attribute,
                            "skipping non-text attribute"
                        );
                    }
                }
            }
            debug!(
                label = %record.key,
                row_count = rows.len() - start,
                "record expanded"
            );
        }

        report.rows_emitted = rows.len();
        info!(
            records_seen = report.records_seen,
            sample_records_skipped = report.sample_records_skipped,
            attributes_expanded = report.attributes_expanded,
            attributes_skipped = report.attributes_skipped,
            row_count = report.rows_emitted,
            "corpus built"
        );
        (Corpus::new(rows), report)
    }

    /// Computes the corpus size that [`build`](Self::build) would produce.
    pub fn estimate(&self, records: &[RawRecord]) -> CorpusEstimate {
        let assembler = RowAssembler::new(self.table, &self.options);
        let mut estimate = CorpusEstimate::default();

        let text_attributes = records
            .iter()
            .filter(|record| !record.is_sample())
            .flat_map(|record| record.description.iter())
            .filter_map(|(attribute, value)| value.as_text().map(|raw| (attribute, raw)));

        for (attribute, raw) in text_attributes {
            estimate.rows = estimate
                .rows
                .saturating_add(assembler.row_count(attribute, raw));
            for phrase in split_phrases(raw) {
                let expansions = assembler.expander().expansion_count(phrase);
                estimate.largest_phrase_expansions =
                    estimate.largest_phrase_expansions.max(expansions);
            }
        }
        estimate
    }
}
