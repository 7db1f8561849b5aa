// ============================================================
// ANOMALY REPORT
// ============================================================

use serde::{Deserialize, Serialize};

/// Result of the multivariate outlier-detection pass.
/// Example lists are bounded samples, never the full index list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub total_anomalies: usize,
    pub critical: usize,
    pub moderate: usize,

    /// First three critical row indices
    pub critical_examples: Vec<usize>,

    /// First three moderate row indices
    pub moderate_examples: Vec<usize>,
}

impl AnomalyReport {
    /// Zero-anomaly report, used when there is not enough numeric data.
    /// Insufficient data is a valid, reportable condition, not an error.
    pub fn empty() -> Self {
        Self::default()
    }
}
