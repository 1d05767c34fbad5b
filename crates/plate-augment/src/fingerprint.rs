use plate_model::Corpus;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 over the ordered rows of `corpus`.
///
/// Each row contributes `label \0 text \n`, so two corpora share a fingerprint
/// only when they hold the same rows in the same order.
pub fn corpus_fingerprint(corpus: &Corpus) -> String {
    let mut hasher = Sha256::new();
    for row in corpus {
        hasher.update(row.label.as_bytes());
        hasher.update([0u8]);
        hasher.update(row.text.as_bytes());
        hasher.update([b'\n']);
    }
    hex::encode(hasher.finalize())
}
