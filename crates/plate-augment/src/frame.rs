//! Hand-off of the corpus to DataFrame-based training code.

use plate_model::Corpus;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

pub const LABEL_COLUMN: &str = "label";
pub const TEXT_COLUMN: &str = "text";

/// Two-column (`label`, `text`) frame holding the corpus rows in order.
pub fn corpus_frame(corpus: &Corpus) -> PolarsResult<DataFrame> {
    let labels: Vec<&str> = corpus.labels().collect();
    let texts: Vec<&str> = corpus.texts().collect();
    DataFrame::new(vec![
        Series::new(LABEL_COLUMN.into(), labels).into_column(),
        Series::new(TEXT_COLUMN.into(), texts).into_column(),
    ])
}
