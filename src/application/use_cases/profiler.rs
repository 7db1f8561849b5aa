// ============================================================
// DESCRIPTIVE PROFILER USE CASE
// ============================================================
// Column-level and dataset-level statistics over the coerced table

use std::collections::HashMap;

use crate::domain::config::AnalysisDepth;
use crate::domain::report::{CategoricalSummary, ColumnProfile, DatasetProfile, NumericSummary};
use crate::domain::table::{CellValue, ColumnKind, TabularDataset};

/// Number of top value frequencies reported per categorical column
const TOP_VALUE_LIMIT: usize = 5;

/// Descriptive profiler
pub struct DescriptiveProfiler;

impl DescriptiveProfiler {
    /// Profile the dataset. Column-level detail is computed only for
    /// full-depth runs; the dataset-level aggregates are always present.
    pub fn profile(dataset: &TabularDataset, depth: AnalysisDepth) -> DatasetProfile {
        let numeric_indices = dataset.numeric_column_indices();

        let columns = if depth == AnalysisDepth::Full {
            (0..dataset.column_count())
                .map(|index| Self::profile_column(dataset, index))
                .collect()
        } else {
            Vec::new()
        };

        DatasetProfile {
            total_rows: dataset.row_count(),
            total_columns: dataset.column_count(),
            numeric_columns: numeric_indices.len(),
            text_columns: dataset.column_count() - numeric_indices.len(),
            missing_cells: dataset.missing_cell_count(),
            duplicate_rows: dataset.duplicate_row_count(),
            columns,
        }
    }

    fn profile_column(dataset: &TabularDataset, index: usize) -> ColumnProfile {
        let kind = dataset.column_kind(index);
        let null_count = dataset
            .column_values(index)
            .filter(|cell| cell.is_null())
            .count();

        let mut distinct: HashMap<String, usize> = HashMap::new();
        for cell in dataset.column_values(index) {
            if !cell.is_null() {
                *distinct.entry(cell.display_string()).or_insert(0) += 1;
            }
        }

        let numeric = if kind == ColumnKind::Numeric {
            Self::numeric_summary(dataset, index)
        } else {
            None
        };

        let categorical = if kind == ColumnKind::Text || kind == ColumnKind::Boolean {
            Some(Self::categorical_summary(&distinct))
        } else {
            None
        };

        ColumnProfile {
            name: dataset.columns()[index].clone(),
            data_type: kind.type_name().to_string(),
            null_count,
            distinct_count: distinct.len(),
            numeric,
            categorical,
        }
    }

    fn numeric_summary(dataset: &TabularDataset, index: usize) -> Option<NumericSummary> {
        let values: Vec<f64> = dataset
            .column_values(index)
            .filter_map(CellValue::as_f64)
            .collect();
        if values.is_empty() {
            return None;
        }

        let (mean, std) = mean_and_std(&values);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(NumericSummary {
            mean,
            std,
            min,
            max,
        })
    }

    fn categorical_summary(frequencies: &HashMap<String, usize>) -> CategoricalSummary {
        let mut ranked: Vec<(String, usize)> = frequencies
            .iter()
            .map(|(value, count)| (value.clone(), *count))
            .collect();
        // Count descending, value ascending for a stable order
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let most_common = ranked.first().map(|(value, _)| value.clone());

        let total_values: usize = frequencies.values().sum();
        let avg_length = if total_values > 0 {
            let total_chars: usize = frequencies
                .iter()
                .map(|(value, count)| value.chars().count() * count)
                .sum();
            total_chars as f64 / total_values as f64
        } else {
            0.0
        };

        ranked.truncate(TOP_VALUE_LIMIT);

        CategoricalSummary {
            most_common,
            top_values: ranked,
            avg_length,
        }
    }
}

/// Mean and sample standard deviation (n-1 denominator).
/// A single value has zero spread by convention.
pub(crate) fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabularDataset {
        let mut dataset = TabularDataset::new(vec!["age".to_string(), "city".to_string()]);
        dataset.push_row(vec![CellValue::Number(10.0), CellValue::Text("oslo".into())]);
        dataset.push_row(vec![CellValue::Number(20.0), CellValue::Text("oslo".into())]);
        dataset.push_row(vec![CellValue::Number(30.0), CellValue::Null]);
        dataset.push_row(vec![CellValue::Number(10.0), CellValue::Text("bergen".into())]);
        dataset
    }

    #[test]
    fn test_basic_depth_skips_column_detail() {
        let profile = DescriptiveProfiler::profile(&sample(), AnalysisDepth::Basic);
        assert!(profile.columns.is_empty());
        assert_eq!(profile.total_rows, 4);
        assert_eq!(profile.numeric_columns, 1);
        assert_eq!(profile.text_columns, 1);
        assert_eq!(profile.missing_cells, 1);
    }

    #[test]
    fn test_numeric_summary() {
        let profile = DescriptiveProfiler::profile(&sample(), AnalysisDepth::Full);
        let age = &profile.columns[0];
        let summary = age.numeric.as_ref().unwrap();
        assert!((summary.mean - 17.5).abs() < 1e-9);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 30.0);
        assert!(summary.std > 0.0);
        assert_eq!(age.distinct_count, 3);
        assert_eq!(age.null_count, 0);
    }

    #[test]
    fn test_categorical_summary() {
        let profile = DescriptiveProfiler::profile(&sample(), AnalysisDepth::Full);
        let city = &profile.columns[1];
        let summary = city.categorical.as_ref().unwrap();
        assert_eq!(summary.most_common.as_deref(), Some("oslo"));
        assert_eq!(summary.top_values[0], ("oslo".to_string(), 2));
        assert_eq!(city.null_count, 1);
        assert_eq!(city.distinct_count, 2);
    }

    #[test]
    fn test_sample_std() {
        let (mean, std) = mean_and_std(&[2.0, 4.0]);
        assert_eq!(mean, 3.0);
        assert!((std - std::f64::consts::SQRT_2).abs() < 1e-9);

        let (_, lone) = mean_and_std(&[5.0]);
        assert_eq!(lone, 0.0);
    }
}
