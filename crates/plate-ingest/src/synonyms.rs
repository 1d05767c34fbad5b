#![deny(unsafe_code)]

use std::fmt;
use std::fs;
use std::path::Path;

use plate_model::SynonymTable;
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use tracing::info;

use crate::IngestError;

/// On-disk encodings accepted for synonym tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynonymFormat {
    /// A `[synonyms]` table of `term = ["alternate", ...]`.
    Toml,
    /// A top-level object of `"term": ["alternate", ...]`.
    Json,
}

impl SynonymFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SynonymDocument {
    synonyms: SynonymEntries,
}

/// Term entries in document order, repeated terms included.
#[derive(Debug, Default)]
struct SynonymEntries(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for SynonymEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SynonymEntriesVisitor)
    }
}

struct SynonymEntriesVisitor;

impl<'de> Visitor<'de> for SynonymEntriesVisitor {
    type Value = SynonymEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of terms to lists of alternates")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
            entries.push(entry);
        }
        Ok(SynonymEntries(entries))
    }
}

/// Load a synonym table, choosing the format from the file extension.
pub fn load_synonym_table(path: &Path) -> Result<SynonymTable, IngestError> {
    let format = SynonymFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let table = parse_synonyms_from(path, &content, format)?;
    info!(
        path = %path.display(),
        term_count = table.len(),
        "synonym table loaded"
    );
    Ok(table)
}

/// Parse a synonym table from an in-memory document.
pub fn parse_synonym_table(
    content: &str,
    format: SynonymFormat,
) -> Result<SynonymTable, IngestError> {
    parse_synonyms_from(Path::new("<inline>"), content, format)
}

fn parse_synonyms_from(
    path: &Path,
    content: &str,
    format: SynonymFormat,
) -> Result<SynonymTable, IngestError> {
    let SynonymEntries(entries) = match format {
        SynonymFormat::Toml => parse_toml_entries(path, content)?,
        SynonymFormat::Json => serde_json::from_str::<SynonymEntries>(content)
            .map_err(|error| IngestError::from_json(path, &error))?,
    };
    SynonymTable::from_pairs(entries).map_err(|source| IngestError::Synonyms {
        path: path.to_path_buf(),
        source,
    })
}

/// Malformed TOML is a syntax error; valid TOML of the wrong shape is a schema error.
fn parse_toml_entries(path: &Path, content: &str) -> Result<SynonymEntries, IngestError> {
    let table: toml::Table = toml::from_str(content).map_err(|error| IngestError::Syntax {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let document = toml::Value::Table(table)
        .try_into::<SynonymDocument>()
        .map_err(|error| IngestError::Schema {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    Ok(document.synonyms)
}
