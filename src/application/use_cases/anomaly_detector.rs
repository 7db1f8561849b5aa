// ============================================================
// ANOMALY DETECTOR USE CASE
// ============================================================
// Multivariate outlier pass over the numeric columns, with rows
// classified into critical/moderate tiers

use super::isolation_forest::IsolationForest;
use super::profiler::mean_and_std;
use crate::domain::config::AnalysisConfig;
use crate::domain::report::AnomalyReport;
use crate::domain::table::TabularDataset;

/// Minimum rows required before outlier scoring is attempted
const MIN_SAMPLE_ROWS: usize = 10;

/// Maximum example row indices reported per severity tier
const EXAMPLE_LIMIT: usize = 3;

/// Anomaly detector
pub struct AnomalyDetector {
    contamination: f64,
    seed: u64,
}

impl AnomalyDetector {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            contamination: config.anomaly_contamination,
            seed: config.anomaly_seed,
        }
    }

    /// Detect anomalous rows. Too little numeric data yields a
    /// zero-anomaly report, never an error.
    pub fn detect(&self, dataset: &TabularDataset) -> AnomalyReport {
        let numeric_indices = dataset.numeric_column_indices();
        if numeric_indices.is_empty() || dataset.row_count() < MIN_SAMPLE_ROWS {
            return AnomalyReport::empty();
        }

        // Missing numeric values are imputed with 0 for scoring only;
        // the dataset itself is untouched
        let matrix: Vec<Vec<f64>> = dataset
            .rows()
            .iter()
            .map(|row| {
                numeric_indices
                    .iter()
                    .map(|&index| row[index].as_f64().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        let forest = IsolationForest::fit(&matrix, self.seed);
        let scores = forest.anomaly_scores(&matrix);

        let flagged = self.flagged_indices(&scores);
        if flagged.is_empty() {
            return AnomalyReport::empty();
        }

        let column_stats: Vec<(f64, f64)> = numeric_indices
            .iter()
            .enumerate()
            .map(|(matrix_column, _)| {
                let values: Vec<f64> = matrix.iter().map(|row| row[matrix_column]).collect();
                mean_and_std(&values)
            })
            .collect();
        let critical_threshold = 3.0
            * column_stats
                .iter()
                .map(|(_, std)| *std)
                .fold(0.0_f64, f64::max);

        let mut critical_examples = Vec::new();
        let mut moderate_examples = Vec::new();
        let mut critical = 0usize;
        let mut moderate = 0usize;

        for &row_index in &flagged {
            let max_deviation = matrix[row_index]
                .iter()
                .zip(&column_stats)
                .map(|(value, (mean, _))| (value - mean).abs())
                .fold(0.0_f64, f64::max);

            if critical_threshold > 0.0 && max_deviation > critical_threshold {
                critical += 1;
                if critical_examples.len() < EXAMPLE_LIMIT {
                    critical_examples.push(row_index);
                }
            } else {
                moderate += 1;
                if moderate_examples.len() < EXAMPLE_LIMIT {
                    moderate_examples.push(row_index);
                }
            }
        }

        tracing::debug!(
            total = flagged.len(),
            critical,
            moderate,
            "anomaly detection complete"
        );

        AnomalyReport {
            total_anomalies: flagged.len(),
            critical,
            moderate,
            critical_examples,
            moderate_examples,
        }
    }

    /// Indices of the floor(contamination x n) highest-scoring rows,
    /// in ascending row order
    fn flagged_indices(&self, scores: &[f64]) -> Vec<usize> {
        let flag_count = (self.contamination * scores.len() as f64).floor() as usize;
        if flag_count == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<usize> = (0..scores.len()).collect();
        ranked.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        ranked.truncate(flag_count);
        ranked.sort_unstable();
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::CellValue;

    fn detector() -> AnomalyDetector {
        AnomalyDetector::new(&AnalysisConfig::default())
    }

    fn numeric_dataset(values: &[f64]) -> TabularDataset {
        let mut dataset = TabularDataset::new(vec!["v".to_string()]);
        for &value in values {
            dataset.push_row(vec![CellValue::Number(value)]);
        }
        dataset
    }

    #[test]
    fn test_too_few_rows_yields_empty_report() {
        let dataset = numeric_dataset(&[1.0, 2.0, 3.0]);
        let report = detector().detect(&dataset);
        assert_eq!(report.total_anomalies, 0);
        assert_eq!(report.critical, 0);
        assert_eq!(report.moderate, 0);
    }

    #[test]
    fn test_no_numeric_columns_yields_empty_report() {
        let mut dataset = TabularDataset::new(vec!["name".to_string()]);
        for i in 0..20 {
            dataset.push_row(vec![CellValue::Text(format!("row-{}", i))]);
        }
        let report = detector().detect(&dataset);
        assert_eq!(report.total_anomalies, 0);
    }

    #[test]
    fn test_extreme_outlier_is_critical() {
        let mut values = vec![10.0; 29];
        values.extend([10.1, 10.2, 9.9, 9.8, 10.05, 9.95, 10.15, 9.85, 10.0]);
        values.push(100_000.0);
        let dataset = numeric_dataset(&values);

        let report = detector().detect(&dataset);
        assert!(report.total_anomalies > 0);
        assert!(report.critical >= 1);
        assert!(report.critical_examples.contains(&(values.len() - 1)));
    }

    #[test]
    fn test_flag_count_follows_contamination() {
        let values: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let report = detector().detect(&numeric_dataset(&values));
        // floor(0.1 * 50) rows are flagged
        assert_eq!(report.total_anomalies, 5);
        assert_eq!(report.critical + report.moderate, 5);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let values: Vec<f64> = (0..40).map(|i| (i * 7 % 13) as f64).collect();
        let dataset = numeric_dataset(&values);
        let first = detector().detect(&dataset);
        let second = detector().detect(&dataset);
        assert_eq!(first.total_anomalies, second.total_anomalies);
        assert_eq!(first.critical_examples, second.critical_examples);
        assert_eq!(first.moderate_examples, second.moderate_examples);
    }

    #[test]
    fn test_example_lists_are_bounded() {
        let values: Vec<f64> = (0..200).map(|i| if i % 10 == 0 { 1000.0 } else { 1.0 }).collect();
        let report = detector().detect(&numeric_dataset(&values));
        assert!(report.critical_examples.len() <= EXAMPLE_LIMIT);
        assert!(report.moderate_examples.len() <= EXAMPLE_LIMIT);
    }
}
