use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("synonym term must not be empty")]
    EmptySynonymTerm,
    #[error("blank alternate for synonym term: {term}")]
    BlankSynonymAlternate { term: String },
    #[error("duplicate synonym term: {term}")]
    DuplicateSynonymTerm { term: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
