// ============================================================
// RESULT BUNDLES
// ============================================================
// Serializable output of a full analysis run and of the
// lightweight pre-flight validation

use super::{
    AnomalyReport, BiasReport, DatasetProfile, InsightSet, QualityScore, VisualizationMap,
};
use crate::domain::table::{ContentKind, DatasetInfo, SeverityCounts, StructuralIssue};
use serde::{Deserialize, Serialize};

/// Quick structural health summary of the parsed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHealth {
    /// 100 minus 10 per high/medium issue, floored at 0
    pub structure_score: f64,
    pub issues_detected: usize,
    pub format_mismatch: bool,
}

impl FileHealth {
    pub fn from_issues(issues: &[StructuralIssue]) -> Self {
        let counts = SeverityCounts::tally(issues);
        let penalized = (counts.high + counts.medium) as f64;
        Self {
            structure_score: (100.0 - 10.0 * penalized).max(0.0),
            issues_detected: issues.len(),
            format_mismatch: issues.iter().any(|issue| {
                issue.kind == crate::domain::table::IssueKind::ExtensionMismatch
            }),
        }
    }
}

/// Content-type-specific structure analysis (full depth only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructureAnalysis {
    /// JSON that looks like a tool configuration file
    ConfigurationFile { key_fields: Vec<String> },

    /// Generic JSON data object
    DataObject { complexity: String },

    /// Document reduced to text lines
    TextDocument {
        total_lines: usize,
        avg_line_length: f64,
        blank_lines: usize,
    },

    /// Delimited or spreadsheet table
    Tabular { well_formed: bool, numeric_ratio: f64 },
}

/// Wrapper pairing the detected type with its structure analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub detected_type: ContentKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<StructureAnalysis>,
}

/// Complete output bundle of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub dataset_info: DatasetInfo,
    pub quality_score: QualityScore,
    pub profile: DatasetProfile,
    pub anomalies: AnomalyReport,
    pub bias: BiasReport,
    pub insights: InsightSet,
    pub visualizations: VisualizationMap,
    pub issues: Vec<StructuralIssue>,
    pub file_health: FileHealth,

    /// Present for full-depth runs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_analysis: Option<ContentAnalysis>,
}

/// Output of the pre-flight validation pass (sniffer only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub declared_extension: String,
    pub detected_content_type: ContentKind,
    pub extension_mismatch: bool,
    pub can_parse: bool,
    pub file_size_mb: f64,
    pub issues_found: usize,
    pub issues_by_severity: SeverityCounts,
    pub issues: Vec<StructuralIssue>,

    /// Recommendations from high/medium issues
    pub suggested_actions: Vec<String>,

    pub analysis_notes: Vec<String>,
}
