use diarygrid_core::{load_entries_from_path, load_entries_from_str, DatasetError};
use serde_json::json;
use std::io::Write;

#[test]
fn sparse_entries_decode_with_defaults() {
    let json = json!([
        { "date": "2022-10-01", "entry_summary": "first" },
        { "date": "2022-10-02" }
    ])
    .to_string();

    let entries = load_entries_from_str(&json).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].entry_summary, "first");
    assert!(entries[1].entities.is_empty());
    assert!(entries[1].thoughts.is_empty());
    assert_eq!(entries[1].content, None);
    assert_eq!(entries[1].sentiment.sentiment_score, 0.0);
}

#[test]
fn media_reference_type_maps_to_kind() {
    let json = json!([{
        "date": "2022-10-01",
        "media_references": [{ "name": "Dune", "type": "book", "description": "sci-fi" }]
    }])
    .to_string();

    let entries = load_entries_from_str(&json).unwrap();
    assert_eq!(entries[0].media_references[0].kind, "book");
}

#[test]
fn file_order_is_preserved() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = json!([
        { "date": "2022-10-03" },
        { "date": "2022-10-01" },
        { "date": "2022-10-02" }
    ])
    .to_string();
    file.write_all(json.as_bytes()).unwrap();

    let entries = load_entries_from_path(file.path()).unwrap();
    let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2022-10-03", "2022-10-01", "2022-10-02"]);
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_entries_from_path(&path).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_reports_decode_error() {
    let err = load_entries_from_str(r#"[{ "summary": "no date" }]"#).unwrap_err();
    assert!(matches!(err, DatasetError::Decode(_)));
}
