// ============================================================
// BIAS REPORT
// ============================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A column dominated by a single value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImbalancedField {
    pub dominant_value: String,

    /// Share of non-null cells holding the dominant value (0.0-1.0)
    pub dominant_fraction: f64,
}

/// Result of the value-distribution imbalance scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasReport {
    /// 100 minus 10 points per flagged column, floored at 0
    pub overall_bias_score: f64,

    /// Flagged column names in column order
    pub bias_issues: Vec<String>,

    pub flagged_fields: BTreeMap<String, ImbalancedField>,
}

impl BiasReport {
    /// Neutral report for datasets with nothing to flag
    pub fn neutral() -> Self {
        Self {
            overall_bias_score: 100.0,
            bias_issues: Vec::new(),
            flagged_fields: BTreeMap::new(),
        }
    }
}
