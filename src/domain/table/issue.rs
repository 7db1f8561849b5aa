// ============================================================
// STRUCTURAL ISSUES
// ============================================================
// Mismatches and fallbacks recorded while coercing raw bytes
// into tabular form. Built during the single coercion pass and
// frozen afterwards.

use serde::{Deserialize, Serialize};

/// Severity of a structural issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
    Info,
}

impl IssueSeverity {
    /// Points this severity subtracts from the quality base score
    pub fn penalty_points(&self) -> f64 {
        match self {
            IssueSeverity::High => 10.0,
            IssueSeverity::Medium => 5.0,
            IssueSeverity::Low | IssueSeverity::Info => 1.0,
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            IssueSeverity::High => "high",
            IssueSeverity::Medium => "medium",
            IssueSeverity::Low => "low",
            IssueSeverity::Info => "info",
        };
        write!(f, "{}", label)
    }
}

/// Category tag for a structural issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    ExtensionMismatch,
    ConfigObjectDetected,
    ReportFormatDetected,
    DocumentParsed,
    FallbackParsing,
    ProbeFailed,
}

/// A recorded mismatch or fallback encountered during coercion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub message: String,
    pub recommendation: String,
}

impl StructuralIssue {
    pub fn new(
        kind: IssueKind,
        severity: IssueSeverity,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Issue counts grouped by severity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn tally(issues: &[StructuralIssue]) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.severity {
                IssueSeverity::High => counts.high += 1,
                IssueSeverity::Medium => counts.medium += 1,
                IssueSeverity::Low => counts.low += 1,
                IssueSeverity::Info => counts.info += 1,
            }
        }
        counts
    }
}
