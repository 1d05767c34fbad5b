use std::io;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use plate_augment::{
    AugmentOptions, CorpusBuilder, DEFAULT_EXPANSION_WARN_THRESHOLD, RowAssembler, TokenMode,
    corpus_fingerprint, split_phrases,
};
use plate_cli::output::{CorpusFormat, write_corpus, write_corpus_file};
use plate_ingest::{load_raw_records, load_synonym_table};
use plate_model::SynonymTable;

use crate::cli::{AugmentArgs, CorpusFormatArg, ExpandArgs, SynonymArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::AugmentResult;

/// Label shown for rows previewed outside of a record.
const PREVIEW_LABEL: &str = "-";

pub fn run_augment(args: &AugmentArgs) -> Result<AugmentResult> {
    let span = info_span!("augment", records = %args.records.display());
    let _guard = span.enter();

    let records = load_raw_records(&args.records).context("load plate records")?;
    let (table, synonym_source) = resolve_synonyms(&args.synonyms)?;
    let options = augment_options(args.collapse_whitespace, args.warn_expansions);
    let builder = CorpusBuilder::new(&table).with_options(options);

    if let Some(max_rows) = args.max_rows {
        let estimate = builder.estimate(&records);
        debug!(
            estimated_rows = %estimate.rows,
            largest_phrase_expansions = %estimate.largest_phrase_expansions,
            "corpus size estimated"
        );
        if estimate.rows > max_rows {
            bail!(
                "corpus would contain {} rows, above the --max-rows limit of {max_rows}",
                estimate.rows
            );
        }
    }

    let (corpus, report) = builder.build_with_report(&records);
    let format = corpus_format(args.format);
    match &args.output {
        Some(path) => write_corpus_file(&corpus, format, path).context("write corpus")?,
        None => {
            write_corpus(&corpus, format, io::stdout().lock(), "<stdout>").context("write corpus")?;
        }
    }

    let fingerprint = corpus_fingerprint(&corpus);
    info!(row_count = corpus.len(), fingerprint = %fingerprint, "augment complete");
    Ok(AugmentResult {
        records_path: args.records.clone(),
        synonym_source,
        output: args.output.clone(),
        format,
        report,
        fingerprint,
        label_counts: corpus.label_counts(),
    })
}

pub fn run_expand(args: &ExpandArgs) -> Result<()> {
    let (table, _) = resolve_synonyms(&args.synonyms)?;
    let options = augment_options(args.collapse_whitespace, None);

    let texts: Vec<String> = match &args.attribute {
        Some(attribute) => RowAssembler::new(&table, &options)
            .assemble(PREVIEW_LABEL, attribute, &args.phrase)
            .into_iter()
            .map(|row| row.text)
            .collect(),
        None => {
            let assembler = RowAssembler::new(&table, &options);
            split_phrases(&args.phrase)
                .into_iter()
                .flat_map(|phrase| assembler.expander().expand(phrase))
                .collect()
        }
    };

    let mut output = Table::new();
    output.set_header(vec![header_cell("#"), header_cell("Label"), header_cell("Text")]);
    apply_table_style(&mut output);
    for (index, text) in texts.iter().enumerate() {
        output.add_row(vec![(index + 1).to_string(), PREVIEW_LABEL.to_string(), text.clone()]);
    }
    println!("{output}");
    Ok(())
}

pub fn run_synonyms(args: &SynonymArgs) -> Result<()> {
    let (table, source) = resolve_synonyms(args)?;
    let mut output = Table::new();
    output.set_header(vec![header_cell("Term"), header_cell("Alternates")]);
    apply_table_style(&mut output);
    for (term, alternates) in table.iter() {
        output.add_row(vec![term.to_string(), alternates.join(", ")]);
    }
    println!("Synonyms: {source}");
    println!("{output}");
    Ok(())
}

/// Picks the synonym table: a file replaces the built-in table outright.
fn resolve_synonyms(args: &SynonymArgs) -> Result<(SynonymTable, String)> {
    if let Some(path) = &args.synonyms {
        let table = load_synonym_table(path).context("load synonym table")?;
        return Ok((table, path.display().to_string()));
    }
    if args.no_default_synonyms {
        return Ok((SynonymTable::empty(), "none".to_string()));
    }
    Ok((SynonymTable::plate_defaults(), "built-in".to_string()))
}

fn augment_options(collapse_whitespace: bool, warn_expansions: Option<u128>) -> AugmentOptions {
    let token_mode = if collapse_whitespace {
        TokenMode::CollapseWhitespace
    } else {
        TokenMode::Literal
    };
    let threshold = match warn_expansions {
        Some(0) => None,
        Some(limit) => Some(limit),
        None => Some(DEFAULT_EXPANSION_WARN_THRESHOLD),
    };
    AugmentOptions::new()
        .with_token_mode(token_mode)
        .with_expansion_warn_threshold(threshold)
}

fn corpus_format(format: CorpusFormatArg) -> CorpusFormat {
    match format {
        CorpusFormatArg::Csv => CorpusFormat::Csv,
        CorpusFormatArg::Json => CorpusFormat::Json,
        CorpusFormatArg::Jsonl => CorpusFormat::Jsonl,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn zero_threshold_disables_warning() {
        assert_eq!(augment_options(false, Some(0)).expansion_warn_threshold, None);
        assert_eq!(
            augment_options(false, None).expansion_warn_threshold,
            Some(DEFAULT_EXPANSION_WARN_THRESHOLD)
        );
        assert_eq!(
            augment_options(true, Some(12)),
            AugmentOptions::default()
                .with_token_mode(TokenMode::CollapseWhitespace)
                .with_expansion_warn_threshold(Some(12))
        );
    }

    #[test]
    fn synonym_file_replaces_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synonyms.toml");
        fs::write(&path, "[synonyms]\nred = [\"crimson\"]\n").unwrap();

        let args = SynonymArgs {
            synonyms: Some(path),
            no_default_synonyms: false,
        };
        let (table, _) = resolve_synonyms(&args).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.variants("solid"), vec!["solid"]);
        assert_eq!(table.variants("red"), vec!["red", "crimson"]);
    }

    #[test]
    fn no_default_synonyms_gives_empty_table() {
        let args = SynonymArgs {
            synonyms: None,
            no_default_synonyms: true,
        };
        let (table, source) = resolve_synonyms(&args).unwrap();
        assert!(table.is_empty());
        assert_eq!(source, "none");

        let (table, source) = resolve_synonyms(&SynonymArgs::default()).unwrap();
        assert_eq!(table, SynonymTable::plate_defaults());
        assert_eq!(source, "built-in");
    }

    #[test]
    fn max_rows_refuses_oversized_corpus() {
        let dir = TempDir::new().unwrap();
        let records = dir.path().join("plates.json");
        let output = dir.path().join("corpus.csv");
        fs::write(
            &records,
            r#"[{ "key": "us-ca", "version": "1", "weight": 1, "description": { "plate": "solid white" } }]"#,
        )
        .unwrap();

        let args = AugmentArgs {
            records: records.clone(),
            synonyms: SynonymArgs::default(),
            output: Some(output.clone()),
            format: CorpusFormatArg::Csv,
            collapse_whitespace: false,
            warn_expansions: None,
            max_rows: Some(9),
        };
        let err = run_augment(&args).unwrap_err();
        assert!(err.to_string().contains("--max-rows"));
        assert!(!output.exists());

        let args = AugmentArgs {
            max_rows: Some(10),
            ..args
        };
        let result = run_augment(&args).unwrap();
        assert_eq!(result.report.rows_emitted, 10);
        assert_eq!(result.label_counts, vec![("us-ca".to_string(), 10)]);
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 11);
        assert!(written.starts_with("label,text\nus-ca,solid white\n"));
    }
}
