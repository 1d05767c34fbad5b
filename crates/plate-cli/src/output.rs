//! Corpus writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use plate_model::Corpus;
use thiserror::Error;
use tracing::info;

/// Serialization used when writing a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorpusFormat {
    /// `label,text` header followed by one row per training example.
    #[default]
    Csv,
    /// A single JSON array of `{"label", "text"}` objects.
    Json,
    /// One `{"label", "text"}` object per line.
    Jsonl,
}

impl CorpusFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode CSV for {target}: {source}")]
    Csv {
        target: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to encode JSON for {target}: {source}")]
    Json {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WriteError {
    fn io(target: &str, source: io::Error) -> Self {
        Self::Io {
            target: target.to_string(),
            source,
        }
    }
}

/// Writes `corpus` to `path`, replacing any existing file.
pub fn write_corpus_file(
    corpus: &Corpus,
    format: CorpusFormat,
    path: &Path,
) -> Result<(), WriteError> {
    let target = path.display().to_string();
    let file = File::create(path).map_err(|source| WriteError::io(&target, source))?;
    write_corpus(corpus, format, BufWriter::new(file), &target)?;
    info!(
        path = %path.display(),
        format = format.as_str(),
        row_count = corpus.len(),
        "corpus written"
    );
    Ok(())
}

/// Writes `corpus` in row order. `target` names the destination in errors.
pub fn write_corpus<W: Write>(
    corpus: &Corpus,
    format: CorpusFormat,
    mut writer: W,
    target: &str,
) -> Result<(), WriteError> {
    match format {
        CorpusFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer
                .write_record(["label", "text"])
                .map_err(|source| csv_error(target, source))?;
            for row in corpus {
                csv_writer
                    .write_record([row.label.as_str(), row.text.as_str()])
                    .map_err(|source| csv_error(target, source))?;
            }
            csv_writer
                .flush()
                .map_err(|source| WriteError::io(target, source))?;
        }
        CorpusFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, corpus)
                .map_err(|source| json_error(target, source))?;
            writer
                .write_all(b"\n")
                .map_err(|source| WriteError::io(target, source))?;
            writer
                .flush()
                .map_err(|source| WriteError::io(target, source))?;
        }
        CorpusFormat::Jsonl => {
            for row in corpus {
                serde_json::to_writer(&mut writer, row)
                    .map_err(|source| json_error(target, source))?;
                writer
                    .write_all(b"\n")
                    .map_err(|source| WriteError::io(target, source))?;
            }
            writer
                .flush()
                .map_err(|source| WriteError::io(target, source))?;
        }
    }
    Ok(())
}

fn csv_error(target: &str, source: csv::Error) -> WriteError {
    WriteError::Csv {
        target: target.to_string(),
        source,
    }
}

fn json_error(target: &str, source: serde_json::Error) -> WriteError {
    WriteError::Json {
        target: target.to_string(),
        source,
    }
}
