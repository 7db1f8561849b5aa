// ============================================================
// INSIGHT & RECOMMENDATION GENERATOR USE CASE
// ============================================================
// Deterministic rule list over the coercion metadata and issues.
// Insight order: issue-driven, then data-quality, then
// content-type, then size.

use crate::domain::config::AnalysisDepth;
use crate::domain::report::{
    InsightSet, Recommendation, RecommendationCategory, RecommendationPriority,
};
use crate::domain::table::{ContentKind, DatasetInfo, IssueKind, StructuralIssue};

const HIGH_MISSING_PCT: f64 = 20.0;
const LOW_MISSING_PCT: f64 = 5.0;
const RECOMMEND_CLEANUP_PCT: f64 = 10.0;
const SMALL_ROW_COUNT: usize = 100;
const LARGE_ROW_COUNT: usize = 10_000;

/// Insight and recommendation generator
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn generate(
        info: &DatasetInfo,
        issues: &[StructuralIssue],
        depth: AnalysisDepth,
    ) -> InsightSet {
        let mut set = InsightSet {
            insights: Self::insights(info, issues),
            recommendations: Vec::new(),
        };

        if depth == AnalysisDepth::Full {
            set.recommendations = Self::recommendations(info, issues);
        }

        set
    }

    fn insights(info: &DatasetInfo, issues: &[StructuralIssue]) -> Vec<String> {
        let mut insights = Vec::new();

        if issues.iter().any(|i| i.kind == IssueKind::ExtensionMismatch) {
            insights.push(
                "File extension doesn't match content - consider renaming for better tool compatibility"
                    .to_string(),
            );
        }
        if issues
            .iter()
            .any(|i| i.kind == IssueKind::ConfigObjectDetected)
        {
            insights.push(
                "Configuration file detected - analysis adapted for non-tabular data structure"
                    .to_string(),
            );
        }

        if info.missing_percentage > HIGH_MISSING_PCT {
            insights.push(format!(
                "High missing data rate ({:.1}%) - may impact analysis quality",
                info.missing_percentage
            ));
        } else if info.missing_percentage < LOW_MISSING_PCT {
            insights.push("Low missing data rate - good data quality".to_string());
        }

        match info.actual_content_type {
            ContentKind::Json => {
                insights.push(
                    "JSON structure detected - data flattened for tabular analysis".to_string(),
                );
            }
            ContentKind::Document => {
                insights.push(
                    "Document content extracted - analyzing text structure and patterns"
                        .to_string(),
                );
            }
            _ => {}
        }

        if info.rows < SMALL_ROW_COUNT {
            insights.push(
                "Small dataset - results may have limited statistical significance".to_string(),
            );
        } else if info.rows > LARGE_ROW_COUNT {
            insights
                .push("Large dataset detected - comprehensive analysis possible".to_string());
        }

        insights
    }

    fn recommendations(
        info: &DatasetInfo,
        issues: &[StructuralIssue],
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if issues.iter().any(|i| i.kind == IssueKind::ExtensionMismatch) {
            recommendations.push(Recommendation {
                category: RecommendationCategory::Format,
                priority: RecommendationPriority::Medium,
                action: "Rename file with correct extension".to_string(),
                reason: "Improves compatibility with other data tools".to_string(),
            });
        }

        if info.missing_percentage > RECOMMEND_CLEANUP_PCT {
            recommendations.push(Recommendation {
                category: RecommendationCategory::DataQuality,
                priority: RecommendationPriority::High,
                action: "Address missing data before analysis".to_string(),
                reason: format!(
                    "High missing rate ({:.1}%) may skew results",
                    info.missing_percentage
                ),
            });
        }

        if info.actual_content_type == ContentKind::Json
            && info.column_names.iter().any(|name| name == "name")
        {
            recommendations.push(Recommendation {
                category: RecommendationCategory::Analysis,
                priority: RecommendationPriority::Info,
                action: "Consider specialized config file analysis".to_string(),
                reason: "This appears to be a configuration file with specific structure"
                    .to_string(),
            });
        }

        recommendations
    }
}
