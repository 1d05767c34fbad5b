use std::path::PathBuf;

use plate_augment::BuildReport;
use plate_cli::output::CorpusFormat;

/// Outcome of an `augment` run, reported once the corpus is written.
#[derive(Debug, Clone)]
pub struct AugmentResult {
    pub records_path: PathBuf,
    pub synonym_source: String,
    /// `None` when the corpus went to stdout.
    pub output: Option<PathBuf>,
    pub format: CorpusFormat,
    pub report: BuildReport,
    pub fingerprint: String,
    pub label_counts: Vec<(String, usize)>,
}
