// ============================================================
// TABULAR DATASET
// ============================================================
// Uniform row/column structure produced by the content sniffer.
// Read-only to all downstream analysis stages.

use super::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dominant value type of a column, decided by consensus of its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Text,
    /// Column with no non-null values
    Empty,
}

impl ColumnKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "number",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Text => "text",
            ColumnKind::Empty => "null",
        }
    }
}

/// Ordered named columns with ordered rows of typed cells.
/// Invariant: every row holds exactly one cell per declared column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl TabularDataset {
    /// Create an empty dataset with the given column names.
    /// Duplicate or blank names are uniquified to keep lookups unambiguous.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns: Self::uniquify(columns),
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with nulls, long rows truncated,
    /// so the one-cell-per-column invariant always holds.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Null);
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Total number of cells (rows x columns)
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    /// Number of null cells across the whole table
    pub fn missing_cell_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_null()).count())
            .sum()
    }

    /// Decide the dominant kind of a column by majority vote over non-null
    /// cells. Ties resolve numeric first, then boolean, then text.
    pub fn column_kind(&self, index: usize) -> ColumnKind {
        let mut numeric = 0usize;
        let mut boolean = 0usize;
        let mut text = 0usize;

        for cell in self.column_values(index) {
            match cell {
                CellValue::Number(_) => numeric += 1,
                CellValue::Bool(_) => boolean += 1,
                CellValue::Text(_) => text += 1,
                CellValue::Null => {}
            }
        }

        if numeric + boolean + text == 0 {
            ColumnKind::Empty
        } else if numeric >= boolean && numeric >= text {
            ColumnKind::Numeric
        } else if boolean >= text {
            ColumnKind::Boolean
        } else {
            ColumnKind::Text
        }
    }

    /// Indices of columns whose dominant kind is numeric
    pub fn numeric_column_indices(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&i| self.column_kind(i) == ColumnKind::Numeric)
            .collect()
    }

    /// Count of rows that are exact duplicates of an earlier row,
    /// independent of row order
    pub fn duplicate_row_count(&self) -> usize {
        let mut seen: HashMap<Vec<String>, usize> = HashMap::new();
        for row in &self.rows {
            let key: Vec<String> = row.iter().map(|cell| cell.display_string()).collect();
            *seen.entry(key).or_insert(0) += 1;
        }
        self.rows.len() - seen.len()
    }

    /// Rough in-memory footprint of the table, in bytes
    pub fn memory_estimate(&self) -> usize {
        let header: usize = self.columns.iter().map(|c| c.len()).sum();
        let cells: usize = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.memory_estimate()).sum::<usize>())
            .sum();
        header + cells
    }

    fn uniquify(columns: Vec<String>) -> Vec<String> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut out = Vec::with_capacity(columns.len());

        for (index, raw) in columns.into_iter().enumerate() {
            let trimmed = raw.trim();
            let base = if trimmed.is_empty() {
                format!("unnamed_{}", index)
            } else {
                trimmed.to_string()
            };

            let count = seen.entry(base.clone()).or_insert(0);
            if *count == 0 {
                *count = 1;
                out.push(base);
            } else {
                let renamed = format!("{}_{}", base, *count);
                *count += 1;
                out.push(renamed);
            }
        }

        out
    }
}
