//! Training corpus augmentation for the plate description classifier.
//!
//! This crate turns a small set of hand-authored [`RawRecord`](plate_model::RawRecord)s
//! into a much larger ordered [`Corpus`](plate_model::Corpus):
//!
//! - **splitter**: comma-separated attribute values to trimmed phrases
//! - **product**: ordered Cartesian product over per-position choices
//! - **expander**: per-word synonym substitution for a single phrase
//! - **assembler**: bare, prefixed, and suffixed rows for one attribute value
//! - **builder**: record and attribute iteration into the final corpus
//! - **fingerprint**: stable digest of a corpus for reproducibility checks
//! - **frame**: hand-off of the corpus as a `label`/`text` DataFrame
//!
//! Output order is deterministic: records, then attributes in document order,
//! then phrases, then expansions, then attribute-name variants.

pub mod assembler;
pub mod builder;
pub mod expander;
pub mod fingerprint;
pub mod frame;
pub mod options;
pub mod product;
pub mod splitter;

pub use assembler::RowAssembler;
pub use builder::{BuildReport, CorpusBuilder, CorpusEstimate};
pub use expander::VariantExpander;
pub use fingerprint::corpus_fingerprint;
pub use frame::{LABEL_COLUMN, TEXT_COLUMN, corpus_frame};
pub use options::{AugmentOptions, DEFAULT_EXPANSION_WARN_THRESHOLD, TokenMode};
pub use product::CartesianProduct;
pub use splitter::split_phrases;
