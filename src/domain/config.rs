// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Tuning knobs for ingestion limits and the heuristic detectors

use serde::{Deserialize, Serialize};

/// Verbosity of a single analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    /// Quality score, metrics, insights
    Basic,

    /// Adds detailed statistics, content structure analysis and recommendations
    Full,
}

impl Default for AnalysisDepth {
    fn default() -> Self {
        AnalysisDepth::Basic
    }
}

/// Configuration for a single analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum accepted input size in bytes (default: 100 MiB)
    pub max_file_size: usize,

    /// Maximum number of lines consumed by the plain-text fallback (default: 1000)
    pub max_fallback_lines: usize,

    /// Expected fraction of anomalous rows for outlier scoring (default: 0.1)
    pub anomaly_contamination: f64,

    /// Random seed for the isolation forest, fixed for reproducibility (default: 42)
    pub anomaly_seed: u64,

    /// Dominant-value share above which a column is flagged as imbalanced (default: 0.8)
    pub bias_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024,
            max_fallback_lines: 1000,
            anomaly_contamination: 0.1,
            anomaly_seed: 42,
            bias_threshold: 0.8,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size == 0 {
            return Err("max_file_size must be > 0".to_string());
        }
        if self.max_fallback_lines == 0 {
            return Err("max_fallback_lines must be > 0".to_string());
        }
        if !(self.anomaly_contamination > 0.0 && self.anomaly_contamination <= 0.5) {
            return Err("anomaly_contamination must be in (0.0, 0.5]".to_string());
        }
        if !(0.0..=1.0).contains(&self.bias_threshold) {
            return Err("bias_threshold must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}
