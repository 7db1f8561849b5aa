// ============================================================
// BIAS ANALYZER USE CASE
// ============================================================
// Flags columns whose value distribution is dominated by a
// single value beyond the configured share

use std::collections::HashMap;

use crate::domain::config::AnalysisConfig;
use crate::domain::report::{BiasReport, ImbalancedField};
use crate::domain::table::TabularDataset;

/// Points subtracted from the overall score per flagged column
const FLAG_PENALTY: f64 = 10.0;

/// Bias analyzer
pub struct BiasAnalyzer {
    threshold: f64,
}

impl BiasAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            threshold: config.bias_threshold,
        }
    }

    /// Scan every column for imbalance. Heuristic misses are not errors;
    /// a dataset with nothing to flag gets a neutral report.
    pub fn analyze(&self, dataset: &TabularDataset) -> BiasReport {
        let mut report = BiasReport::neutral();

        for (index, name) in dataset.columns().iter().enumerate() {
            let Some((dominant_value, dominant_fraction)) =
                Self::dominant_share(dataset, index)
            else {
                continue;
            };

            if dominant_fraction > self.threshold {
                report.bias_issues.push(name.clone());
                report.flagged_fields.insert(
                    name.clone(),
                    ImbalancedField {
                        dominant_value,
                        dominant_fraction,
                    },
                );
            }
        }

        report.overall_bias_score =
            (100.0 - FLAG_PENALTY * report.bias_issues.len() as f64).max(0.0);
        report
    }

    /// Most frequent non-null value and its share of non-null cells
    fn dominant_share(dataset: &TabularDataset, index: usize) -> Option<(String, f64)> {
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        let mut non_null = 0usize;

        for cell in dataset.column_values(index) {
            if !cell.is_null() {
                non_null += 1;
                *frequencies.entry(cell.display_string()).or_insert(0) += 1;
            }
        }

        if non_null == 0 {
            return None;
        }

        frequencies
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(value, count)| (value, count as f64 / non_null as f64))
    }
}
