use std::fs::File;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::errors::GenerationError;
use crate::synth::Document;

/// Write documents as CSV with one column per flattened field.
///
/// Nested objects flatten into dot-joined column names. Arrays do not flatten;
/// the whole array lands in one cell as a JSON string. The header is the union
/// of all columns in first-seen order.
pub fn write_csv(path: &Path, documents: &[Document]) -> Result<(), GenerationError> {
    let mut columns: IndexSet<String> = IndexSet::new();
    let mut rows: Vec<IndexMap<String, String>> = Vec::with_capacity(documents.len());
    for document in documents {
        let mut row = IndexMap::new();
        flatten_into(None, document, &mut row);
        for column in row.keys() {
            columns.insert(column.clone());
        }
        rows.push(row);
    }

    if columns.is_empty() {
        File::create(path)?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&columns)?;
    for row in &rows {
        let record: Vec<&str> = columns
            .iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn flatten_into(
    prefix: Option<&str>,
    object: &serde_json::Map<String, Value>,
    row: &mut IndexMap<String, String>,
) {
    for (name, value) in object {
        let column = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            Value::Object(children) => flatten_into(Some(&column), children, row),
            Value::Array(_) => {
                row.insert(column, serde_json::to_string(value).unwrap_or_default());
            }
            Value::Null => {
                row.insert(column, String::new());
            }
            Value::String(text) => {
                row.insert(column, text.clone());
            }
            other => {
                row.insert(column, other.to_string());
            }
        }
    }
}
