//! Tests for plate-model types.

use plate_model::{
    Corpus, Description, DescriptionValue, RawRecord, SynonymTable, TrainingRow,
};

#[test]
fn record_parses_text_and_other_values() {
    let json = r#"{
        "key": "us-ca",
        "version": "1",
        "weight": 1,
        "description": {
            "plate": "solid white",
            "year": 1998,
            "colors": ["red", "blue"],
            "nested": { "top": "red" },
            "missing": null,
            "flag": true
        }
    }"#;

    let record: RawRecord = serde_json::from_str(json).expect("parse record");

    assert_eq!(record.key, "us-ca");
    assert_eq!(record.weight, 1.0);
    let names: Vec<&str> = record.description.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["plate", "year", "colors", "nested", "missing", "flag"]);
    assert_eq!(
        record.description.get("plate"),
        Some(&DescriptionValue::Text("solid white".to_string()))
    );
    for name in ["year", "colors", "nested", "missing", "flag"] {
        assert_eq!(record.description.get(name), Some(&DescriptionValue::Other));
    }
}

#[test]
fn description_keeps_document_order() {
    let json = r#"{ "zeta": "a", "alpha": "b", "mid": "c" }"#;
    let description: Description = serde_json::from_str(json).expect("parse description");
    let names: Vec<&str> = description.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn record_rejects_missing_key() {
    let json = r#"{ "version": "1", "weight": 0, "description": {} }"#;
    let err = serde_json::from_str::<RawRecord>(json).unwrap_err();
    assert!(err.to_string().contains("missing field `key`"));
}

#[test]
fn record_rejects_unknown_field() {
    let json = r#"{ "key": "k", "version": "1", "weight": 0, "description": {}, "extra": 1 }"#;
    let err = serde_json::from_str::<RawRecord>(json).unwrap_err();
    assert!(err.to_string().contains("unknown field `extra`"));
}

#[test]
fn record_serializes_in_order() {
    let description: Description = [("top", "red".into()), ("count", DescriptionValue::Other)]
        .into_iter()
        .collect();
    let record = RawRecord::new("us-ca", "2", 0.5, description);
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(
        json,
        r#"{"key":"us-ca","version":"2","weight":0.5,"description":{"top":"red","count":null}}"#
    );
}

#[test]
fn corpus_columns_are_parallel() {
    let corpus = Corpus::new(vec![
        TrainingRow::new("a", "red top"),
        TrainingRow::new("a", "top red"),
        TrainingRow::new("b", "blue"),
    ]);

    assert_eq!(corpus.label_counts(), vec![("a".to_string(), 2), ("b".to_string(), 1)]);

    let (labels, texts) = corpus.into_columns();
    assert_eq!(labels, vec!["a", "a", "b"]);
    assert_eq!(texts, vec!["red top", "top red", "blue"]);
}

#[test]
fn corpus_serializes_as_row_array() {
    let corpus = Corpus::new(vec![TrainingRow::new("k", "a b")]);
    let json = serde_json::to_string(&corpus).expect("serialize corpus");
    assert_eq!(json, r#"[{"label":"k","text":"a b"}]"#);
}

#[test]
fn synonym_table_deserializes_from_json() {
    let json = r#"{ "line": ["strip", "banner"], "solid": [] }"#;
    let table: SynonymTable = serde_json::from_str(json).expect("parse synonyms");
    assert_eq!(table.variants("line"), vec!["line", "strip", "banner"]);
    assert_eq!(table.variants("solid"), vec!["solid"]);
}

#[test]
fn synonym_table_rejects_empty_term_on_deserialize() {
    let json = r#"{ "": ["blank"] }"#;
    let err = serde_json::from_str::<SynonymTable>(json).unwrap_err();
    assert!(err.to_string().contains("synonym term must not be empty"));
}

#[test]
fn plate_defaults_cover_shipped_vocabulary() {
    let table = SynonymTable::plate_defaults();
    assert_eq!(table.len(), 5);
    assert_eq!(table.variants("line"), vec!["line", "strip", "banner", "stripe"]);
    assert_eq!(
        table.variants("lines"),
        vec!["lines", "strips", "banners", "stripes"]
    );
    assert_eq!(table.variants("plate"), vec!["plate", "background"]);
    assert_eq!(table.variants("solid"), vec!["solid", "all"]);
}

#[test]
fn synonym_table_rejects_blank_alternate_on_deserialize() {
    let json = r#"{ "solid": ["all", ""], "plate": ["background"] }"#;
    let err = serde_json::from_str::<SynonymTable>(json).unwrap_err();
    assert!(err.to_string().contains("blank alternate for synonym term: solid"));
}
