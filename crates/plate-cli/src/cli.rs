//! CLI argument definitions for the plate trainer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "plate-trainer",
    version,
    about = "Build the training corpus for the license plate description classifier",
    long_about = "Expand hand-authored plate descriptions into an ordered (label, text) corpus.\n\n\
                  Each attribute value is split into phrases, every word is substituted with its\n\
                  synonyms, and each expansion is emitted bare, prefixed, and suffixed with the\n\
                  attribute name and its synonyms."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the augmented corpus from a plate description file.
    Augment(AugmentArgs),

    /// Preview the rows produced for a single attribute value.
    Expand(ExpandArgs),

    /// Print the effective synonym table.
    Synonyms(SynonymArgs),
}

/// Where the synonym table comes from.
#[derive(Args, Clone, Default)]
pub struct SynonymArgs {
    /// Synonym file (.toml or .json). Replaces the built-in plate table.
    #[arg(long = "synonyms", value_name = "FILE")]
    pub synonyms: Option<PathBuf>,

    /// Start from an empty table instead of the built-in plate table.
    #[arg(long = "no-default-synonyms", conflicts_with = "synonyms")]
    pub no_default_synonyms: bool,
}

#[derive(Parser)]
pub struct AugmentArgs {
    /// JSON array of plate description records.
    #[arg(long = "records", value_name = "JSON")]
    pub records: PathBuf,

    #[command(flatten)]
    pub synonyms: SynonymArgs,

    /// Output file for the corpus (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Corpus output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: CorpusFormatArg,

    /// Split phrases on whitespace runs instead of single spaces.
    #[arg(long = "collapse-whitespace")]
    pub collapse_whitespace: bool,

    /// Warn when one phrase expands to more than N variants (0 disables).
    #[arg(long = "warn-expansions", value_name = "N")]
    pub warn_expansions: Option<u128>,

    /// Refuse to build when the corpus would exceed N rows.
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<u128>,
}

#[derive(Parser)]
pub struct ExpandArgs {
    /// Attribute value to expand; commas separate phrases.
    #[arg(value_name = "PHRASE")]
    pub phrase: String,

    /// Attribute name used for prefixed and suffixed rows.
    ///
    /// Without it only the bare phrase expansions are listed.
    #[arg(long = "attribute", value_name = "NAME")]
    pub attribute: Option<String>,

    #[command(flatten)]
    pub synonyms: SynonymArgs,

    /// Split phrases on whitespace runs instead of single spaces.
    #[arg(long = "collapse-whitespace")]
    pub collapse_whitespace: bool,
}

/// Corpus output format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CorpusFormatArg {
    Csv,
    Json,
    Jsonl,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("plate-trainer").chain(args.iter().copied()))
            .expect("parse args")
    }

    #[test]
    fn augment_defaults() {
        let cli = parse(&["augment", "--records", "plates.json"]);
        let Command::Augment(args) = cli.command else {
            panic!("expected augment");
        };
        assert_eq!(args.records, PathBuf::from("plates.json"));
        assert_eq!(args.format, CorpusFormatArg::Csv);
        assert!(args.output.is_none());
        assert!(args.synonyms.synonyms.is_none());
        assert!(!args.synonyms.no_default_synonyms);
        assert!(!args.collapse_whitespace);
        assert!(args.warn_expansions.is_none());
        assert!(args.max_rows.is_none());
    }

    #[test]
    fn augment_with_all_options() {
        let cli = parse(&[
            "augment",
            "--records",
            "plates.json",
            "--synonyms",
            "syn.toml",
            "--output",
            "corpus.jsonl",
            "--format",
            "jsonl",
            "--collapse-whitespace",
            "--warn-expansions",
            "100",
            "--max-rows",
            "5000",
            "--log-format",
            "json",
        ]);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        let Command::Augment(args) = cli.command else {
            panic!("expected augment");
        };
        assert_eq!(args.synonyms.synonyms, Some(PathBuf::from("syn.toml")));
        assert_eq!(args.format, CorpusFormatArg::Jsonl);
        assert!(args.collapse_whitespace);
        assert_eq!(args.warn_expansions, Some(100));
        assert_eq!(args.max_rows, Some(5000));
    }

    #[test]
    fn synonym_file_conflicts_with_no_defaults() {
        let result = Cli::try_parse_from([
            "plate-trainer",
            "synonyms",
            "--synonyms",
            "syn.toml",
            "--no-default-synonyms",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn expand_takes_phrase_and_attribute() {
        let cli = parse(&["expand", "solid white, red", "--attribute", "plate"]);
        let Command::Expand(args) = cli.command else {
            panic!("expected expand");
        };
        assert_eq!(args.phrase, "solid white, red");
        assert_eq!(args.attribute.as_deref(), Some("plate"));
    }

    #[test]
    fn records_are_required() {
        assert!(Cli::try_parse_from(["plate-trainer", "augment"]).is_err());
    }
}
