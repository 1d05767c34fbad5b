pub mod error;
pub mod records;
pub mod synonyms;

pub use error::IngestError;
pub use records::{load_raw_records, parse_raw_records};
pub use synonyms::{SynonymFormat, load_synonym_table, parse_synonym_table};
