use std::fs;
use std::path::PathBuf;

use docsmith_generate::Document;
use docsmith_generate::output::{self, csv::write_csv};
use serde_json::json;

fn temp_path(label: &str, ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "docsmith_export_{label}_{}.{ext}",
        uuid::Uuid::new_v4()
    ));
    path
}

fn document(value: serde_json::Value) -> Document {
    serde_json::from_value(value).expect("document object")
}

#[test]
fn json_export_round_trips() {
    let documents = vec![
        document(json!({"id": "a1", "views": 10})),
        document(json!({"id": "a2", "views": 20})),
    ];
    let path = temp_path("roundtrip", "json");
    output::write_json(&path, &documents).expect("write json");

    let text = fs::read_to_string(&path).expect("read json");
    assert!(text.starts_with('['), "output should be a JSON array");
    assert!(text.contains('\n'), "output should be pretty-printed");
    let parsed: Vec<Document> = serde_json::from_str(&text).expect("parse exported json");
    assert_eq!(parsed, documents);
}

#[test]
fn csv_flattens_nested_objects() {
    let documents = vec![document(json!({
        "id": "a1",
        "author": {"first_name": "Ada", "city": "London"},
        "tags": ["x", "y"]
    }))];
    let path = temp_path("flatten", "csv");
    write_csv(&path, &documents).expect("write csv");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let headers = reader.headers().expect("headers").clone();
    let header_fields: Vec<&str> = headers.iter().collect();
    assert_eq!(header_fields, ["id", "author.first_name", "author.city", "tags"]);

    let records: Vec<csv::StringRecord> =
        reader.records().collect::<Result<_, _>>().expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get(0), Some("a1"));
    assert_eq!(records[0].get(1), Some("Ada"));
    assert_eq!(records[0].get(3), Some(r#"["x","y"]"#));
}

#[test]
fn csv_keeps_arrays_as_json() {
    let documents = vec![document(json!({
        "comments": [{"author": "ada"}, {"author": "kay"}]
    }))];
    let path = temp_path("arrays", "csv");
    write_csv(&path, &documents).expect("write csv");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let records: Vec<csv::StringRecord> =
        reader.records().collect::<Result<_, _>>().expect("records");
    assert_eq!(
        records[0].get(0),
        Some(r#"[{"author":"ada"},{"author":"kay"}]"#)
    );
}

#[test]
fn csv_header_is_first_seen_union() {
    let documents = vec![
        document(json!({"a": 1, "b": 2})),
        document(json!({"a": 3, "c": 4})),
    ];
    let path = temp_path("union", "csv");
    write_csv(&path, &documents).expect("write csv");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let headers = reader.headers().expect("headers").clone();
    let header_fields: Vec<&str> = headers.iter().collect();
    assert_eq!(header_fields, ["a", "b", "c"]);

    let records: Vec<csv::StringRecord> =
        reader.records().collect::<Result<_, _>>().expect("records");
    assert_eq!(records[0].get(2), Some(""), "absent column should be blank");
    assert_eq!(records[1].get(1), Some(""), "absent column should be blank");
    assert_eq!(records[1].get(2), Some("4"));
}

#[test]
fn csv_renders_scalars_plainly() {
    let documents = vec![document(json!({
        "note": null,
        "ok": true,
        "ratio": 1.5,
        "text": "hello, world"
    }))];
    let path = temp_path("scalars", "csv");
    write_csv(&path, &documents).expect("write csv");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let records: Vec<csv::StringRecord> =
        reader.records().collect::<Result<_, _>>().expect("records");
    assert_eq!(records[0].get(0), Some(""));
    assert_eq!(records[0].get(1), Some("true"));
    assert_eq!(records[0].get(2), Some("1.5"));
    assert_eq!(records[0].get(3), Some("hello, world"));
}

#[test]
fn empty_batch_writes_empty_outputs() {
    let json_path = temp_path("empty", "json");
    output::write_json(&json_path, &[]).expect("write empty json");
    assert_eq!(fs::read_to_string(&json_path).expect("read json"), "[]");

    let csv_path = temp_path("empty", "csv");
    write_csv(&csv_path, &[]).expect("write empty csv");
    assert_eq!(fs::read_to_string(&csv_path).expect("read csv"), "");
}
