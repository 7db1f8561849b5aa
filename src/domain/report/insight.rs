// ============================================================
// INSIGHTS & RECOMMENDATIONS
// ============================================================
// Human-readable findings produced by the deterministic rule list

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Format,
    #[serde(rename = "Data Quality")]
    DataQuality,
    Analysis,
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecommendationCategory::Format => "Format",
            RecommendationCategory::DataQuality => "Data Quality",
            RecommendationCategory::Analysis => "Analysis",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationPriority {
    High,
    Medium,
    Info,
}

impl std::fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecommendationPriority::High => "High",
            RecommendationPriority::Medium => "Medium",
            RecommendationPriority::Info => "Info",
        };
        write!(f, "{}", label)
    }
}

/// A structured action item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: RecommendationPriority,
    pub action: String,
    pub reason: String,
}

/// Ordered insights plus optional recommendations.
/// Insight order: issue-driven first, then data-quality, then
/// content-type, then size-driven.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightSet {
    pub insights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}
