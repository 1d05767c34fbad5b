//! Data model for the plate description classifier.
//!
//! - **record**: hand-authored [`RawRecord`]s keyed by plate label
//! - **corpus**: flat [`TrainingRow`]s and the ordered [`Corpus`]
//! - **synonyms**: the read-only [`SynonymTable`] used for augmentation

pub mod corpus;
pub mod error;
pub mod record;
pub mod synonyms;

pub use corpus::{Corpus, TrainingRow};
pub use error::{ModelError, Result};
pub use record::{Description, DescriptionValue, RawRecord, SAMPLE_KEY};
pub use synonyms::SynonymTable;
