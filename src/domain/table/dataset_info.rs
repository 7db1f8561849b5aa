// ============================================================
// DATASET INFO
// ============================================================
// Metadata snapshot taken once, immediately after coercion

use super::{ContentKind, TabularDataset};
use crate::domain::extension::FileExtension;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata about a coerced dataset. Computed once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub rows: usize,
    pub columns: usize,
    pub size_bytes: usize,

    /// Declared extension, without the dot
    pub file_type: String,

    /// Content type actually detected in the bytes
    pub actual_content_type: ContentKind,

    /// True when the detected content does not match the declared extension
    pub extension_mismatch: bool,

    pub column_names: Vec<String>,

    /// Dominant value type per column
    pub column_types: BTreeMap<String, String>,

    pub memory_usage_mb: f64,
    pub has_missing_values: bool,

    /// Missing cells as a percentage of all cells, rounded to 2 decimals
    pub missing_percentage: f64,
}

impl DatasetInfo {
    /// Snapshot metadata from a freshly coerced dataset
    pub fn collect(
        dataset: &TabularDataset,
        size_bytes: usize,
        declared: FileExtension,
        detected: ContentKind,
    ) -> Self {
        let missing = dataset.missing_cell_count();
        let cells = dataset.cell_count();
        let missing_percentage = if cells > 0 {
            round2(missing as f64 / cells as f64 * 100.0)
        } else {
            0.0
        };

        let column_types = dataset
            .columns()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                (
                    name.clone(),
                    dataset.column_kind(index).type_name().to_string(),
                )
            })
            .collect();

        Self {
            rows: dataset.row_count(),
            columns: dataset.column_count(),
            size_bytes,
            file_type: declared.as_str().to_string(),
            actual_content_type: detected,
            extension_mismatch: detected != declared.expected_kind(),
            column_names: dataset.columns().to_vec(),
            column_types,
            memory_usage_mb: round2(dataset.memory_estimate() as f64 / (1024.0 * 1024.0)),
            has_missing_values: missing > 0,
            missing_percentage,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
