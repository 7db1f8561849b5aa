// ============================================================
// JSON PROBE
// ============================================================
// Strict parse of hierarchical key-value documents, flattened
// one level into tabular form. Handles the classic case of a
// package.json uploaded with a .csv extension.

use crate::domain::extension::FileExtension;
use crate::domain::table::{
    CellValue, IssueKind, IssueSeverity, StructuralIssue, TabularDataset,
};
use serde_json::{Map, Value};

/// Values longer than this are truncated when inlined into a cell
const MAX_INLINE_VALUE_LEN: usize = 200;

/// Nested objects with more children than this are summarized by
/// key names instead of being flattened
const MAX_FLATTEN_CHILDREN: usize = 10;

/// Try to coerce the content as a structured JSON document.
/// Returns `None` when the content is not parseable JSON or
/// yields no usable rows; issues are only recorded on success.
pub(super) fn probe(
    text: &str,
    declared: FileExtension,
    issues: &mut Vec<StructuralIssue>,
) -> Option<TabularDataset> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        return None;
    }

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "content starts like JSON but failed strict parsing");
            return None;
        }
    };

    let (dataset, config_object) = coerce_value(value)?;
    if dataset.row_count() == 0 || dataset.column_count() == 0 {
        return None;
    }

    if declared != FileExtension::Json {
        // The mismatch issue alone carries the penalty for this file;
        // config detection is only recorded separately for declared JSON
        issues.push(StructuralIssue::new(
            IssueKind::ExtensionMismatch,
            IssueSeverity::Medium,
            format!("File contains JSON but has {} extension", declared),
            "Consider renaming to .json",
        ));
    } else if config_object {
        issues.push(StructuralIssue::new(
            IssueKind::ConfigObjectDetected,
            IssueSeverity::Info,
            "Configuration file (package.json style) detected",
            "Data will be flattened for analysis",
        ));
    }

    Some(dataset)
}

/// Turn a parsed JSON value into a table:
/// object -> one row, array of objects -> row per object,
/// array of scalars -> single `items` column, scalar -> `value` column.
fn coerce_value(value: Value) -> Option<(TabularDataset, bool)> {
    match value {
        Value::Object(map) => {
            let config_object = map.contains_key("name") && map.contains_key("version");
            let record = flatten_object(&map);
            Some((dataset_from_records(vec![record]), config_object))
        }
        Value::Array(items) if !items.is_empty() => {
            if items.iter().all(Value::is_object) {
                let records = items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(flatten_object)
                    .collect();
                Some((dataset_from_records(records), false))
            } else {
                let mut dataset = TabularDataset::new(vec!["items".to_string()]);
                for item in items {
                    dataset.push_row(vec![scalar_cell(&item)]);
                }
                Some((dataset, false))
            }
        }
        Value::Array(_) => None,
        scalar => {
            let mut dataset = TabularDataset::new(vec!["value".to_string()]);
            dataset.push_row(vec![scalar_cell(&scalar)]);
            Some((dataset, false))
        }
    }
}

/// Flatten one object into named cells, expanding nested structures
/// one level deep and summarizing anything larger.
fn flatten_object(map: &Map<String, Value>) -> Vec<(String, CellValue)> {
    let mut record = Vec::new();

    for (key, value) in map {
        match value {
            Value::Object(nested) => {
                record.push((
                    format!("{}_count", key),
                    CellValue::Number(nested.len() as f64),
                ));
                if nested.len() <= MAX_FLATTEN_CHILDREN {
                    for (sub_key, sub_value) in nested {
                        let column = format!("{}_{}", key, sub_key);
                        match sub_value {
                            Value::Object(inner) => record.push((
                                format!("{}_count", column),
                                CellValue::Number(inner.len() as f64),
                            )),
                            Value::Array(inner) => record.push((
                                format!("{}_count", column),
                                CellValue::Number(inner.len() as f64),
                            )),
                            scalar => record.push((column, scalar_cell(scalar))),
                        }
                    }
                } else {
                    let keys: Vec<&str> =
                        nested.keys().take(5).map(String::as_str).collect();
                    record.push((format!("{}_keys", key), CellValue::Text(keys.join(", "))));
                }
            }
            Value::Array(items) => {
                record.push((
                    format!("{}_count", key),
                    CellValue::Number(items.len() as f64),
                ));
                if !items.is_empty() && items.len() <= 5 {
                    let samples: Vec<String> = items
                        .iter()
                        .take(3)
                        .map(|item| scalar_cell(item).display_string())
                        .collect();
                    record.push((
                        format!("{}_items", key),
                        CellValue::Text(samples.join(", ")),
                    ));
                }
            }
            scalar => record.push((key.clone(), scalar_cell(scalar))),
        }
    }

    record
}

/// Map a JSON leaf to a typed cell; composite values are inlined
/// as their compact JSON text, truncated
fn scalar_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => n
            .as_f64()
            .map(CellValue::Number)
            .unwrap_or(CellValue::Null),
        Value::String(s) => CellValue::Text(truncate(s)),
        composite => CellValue::Text(truncate(&composite.to_string())),
    }
}

fn truncate(value: &str) -> String {
    if value.len() > MAX_INLINE_VALUE_LEN {
        value.chars().take(MAX_INLINE_VALUE_LEN).collect()
    } else {
        value.to_string()
    }
}

/// Build a table from records, unioning column names in
/// first-seen order; missing values become nulls
fn dataset_from_records(records: Vec<Vec<(String, CellValue)>>) -> TabularDataset {
    let mut columns: Vec<String> = Vec::new();
    for record in &records {
        for (name, _) in record {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
    }

    let mut dataset = TabularDataset::new(columns.clone());
    for record in records {
        let row = columns
            .iter()
            .map(|column| {
                record
                    .iter()
                    .find(|(name, _)| name == column)
                    .map(|(_, cell)| cell.clone())
                    .unwrap_or(CellValue::Null)
            })
            .collect();
        dataset.push_row(row);
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_object_becomes_one_row() {
        let mut issues = Vec::new();
        let dataset = probe(
            r#"{"name":"test","version":"1.0.0"}"#,
            FileExtension::Json,
            &mut issues,
        )
        .unwrap();

        assert_eq!(dataset.row_count(), 1);
        assert_eq!(dataset.columns(), &["name", "version"]);
        // config object detected, but no extension mismatch
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::ConfigObjectDetected);
    }

    #[test]
    fn test_mismatch_issue_for_json_declared_as_csv() {
        let mut issues = Vec::new();
        probe(
            r#"{"name":"test","version":"1.0.0"}"#,
            FileExtension::Csv,
            &mut issues,
        )
        .unwrap();

        // Exactly one issue: the mismatch. Config detection does not
        // stack a second penalty on top of it.
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::ExtensionMismatch);
        assert_eq!(issues[0].severity, IssueSeverity::Medium);
    }

    #[test]
    fn test_array_of_objects() {
        let mut issues = Vec::new();
        let dataset = probe(
            r#"[{"a":1,"b":"x"},{"a":2,"c":true}]"#,
            FileExtension::Json,
            &mut issues,
        )
        .unwrap();

        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.columns(), &["a", "b", "c"]);
        assert!(dataset.rows()[1][1].is_null());
    }

    #[test]
    fn test_array_of_scalars() {
        let mut issues = Vec::new();
        let dataset = probe("[1, 2, 3]", FileExtension::Json, &mut issues).unwrap();
        assert_eq!(dataset.columns(), &["items"]);
        assert_eq!(dataset.row_count(), 3);
    }

    #[test]
    fn test_nested_structures_flattened() {
        let mut issues = Vec::new();
        let dataset = probe(
            r#"{"name":"pkg","version":"1.0","scripts":{"build":"make","test":"check"},"keywords":["a","b"]}"#,
            FileExtension::Json,
            &mut issues,
        )
        .unwrap();

        let columns = dataset.columns();
        assert!(columns.contains(&"scripts_count".to_string()));
        assert!(columns.contains(&"scripts_build".to_string()));
        assert!(columns.contains(&"keywords_count".to_string()));
        assert!(columns.contains(&"keywords_items".to_string()));
    }

    #[test]
    fn test_rejects_non_json() {
        let mut issues = Vec::new();
        assert!(probe("a,b,c\n1,2,3", FileExtension::Csv, &mut issues).is_none());
        assert!(probe("{not json", FileExtension::Json, &mut issues).is_none());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_empty_array_falls_through() {
        let mut issues = Vec::new();
        assert!(probe("[]", FileExtension::Json, &mut issues).is_none());
    }
}
