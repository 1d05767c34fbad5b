use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::AugmentResult;

/// Prints the run summary to stderr so stdout can carry the corpus.
pub fn print_summary(result: &AugmentResult) {
    for line in summary_lines(result) {
        eprintln!("{line}");
    }
    eprintln!("{}", label_table(&result.label_counts));
}

fn summary_lines(result: &AugmentResult) -> Vec<String> {
    let report = &result.report;
    let output = result
        .output
        .as_ref()
        .map_or_else(|| "<stdout>".to_string(), |path| path.display().to_string());
    vec![
        format!("Records: {}", result.records_path.display()),
        format!("Synonyms: {}", result.synonym_source),
        format!("Output: {output} ({})", result.format.as_str()),
        format!(
            "Records seen: {} ({} sample skipped)",
            report.records_seen, report.sample_records_skipped
        ),
        format!(
            "Attributes expanded: {} ({} non-text skipped)",
            report.attributes_expanded, report.attributes_skipped
        ),
        format!("Phrases expanded: {}", report.phrases_expanded),
        format!("Rows: {}", report.rows_emitted),
        format!("Fingerprint: {}", result.fingerprint),
    ]
}

fn label_table(label_counts: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total = 0usize;
    for (label, rows) in label_counts {
        total += rows;
        table.add_row(vec![
            Cell::new(label).fg(Color::Blue).add_attribute(Attribute::Bold),
            count_cell(*rows),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(total).add_attribute(Attribute::Bold),
    ]);
    table
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use plate_augment::BuildReport;
    use plate_cli::output::CorpusFormat;

    use super::*;

    fn result() -> AugmentResult {
        AugmentResult {
            records_path: PathBuf::from("plates.json"),
            synonym_source: "built-in".to_string(),
            output: None,
            format: CorpusFormat::Jsonl,
            report: BuildReport {
                records_seen: 3,
                sample_records_skipped: 1,
                attributes_expanded: 4,
                attributes_skipped: 1,
                phrases_expanded: 5,
                rows_emitted: 13,
            },
            fingerprint: "abc123".to_string(),
            label_counts: vec![("us-ca".to_string(), 10), ("us-tx".to_string(), 3)],
        }
    }

    #[test]
    fn summary_lines_report_counts() {
        insta::assert_snapshot!(summary_lines(&result()).join("\n"), @r"
        Records: plates.json
        Synonyms: built-in
        Output: <stdout> (jsonl)
        Records seen: 3 (1 sample skipped)
        Attributes expanded: 4 (1 non-text skipped)
        Phrases expanded: 5
        Rows: 13
        Fingerprint: abc123
        ");
    }

    #[test]
    fn label_table_lists_labels_and_total() {
        let mut table = label_table(&result().label_counts);
        table.force_no_tty();
        let rendered = table.to_string();

        assert!(rendered.contains("us-ca"));
        assert!(rendered.contains("us-tx"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("13"));
    }
}
