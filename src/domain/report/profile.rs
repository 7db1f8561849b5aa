// ============================================================
// DATASET PROFILE
// ============================================================
// Descriptive statistics computed from the coerced table

use serde::{Deserialize, Serialize};

/// Summary statistics for a numeric column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Summary statistics for a categorical/text column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub most_common: Option<String>,

    /// Up to five most frequent values with their counts, descending
    pub top_values: Vec<(String, usize)>,

    /// Average value length in characters
    pub avg_length: f64,
}

/// Per-column profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,

    /// Dominant value type ("number", "text", "boolean", "null")
    pub data_type: String,

    pub null_count: usize,
    pub distinct_count: usize,

    pub numeric: Option<NumericSummary>,
    pub categorical: Option<CategoricalSummary>,
}

/// Dataset-level profile with optional per-column detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub total_rows: usize,
    pub total_columns: usize,
    pub numeric_columns: usize,
    pub text_columns: usize,
    pub missing_cells: usize,
    pub duplicate_rows: usize,

    /// Column-level detail, populated for full-depth runs
    pub columns: Vec<ColumnProfile>,
}
