// ============================================================
// REPORT TYPES
// ============================================================
// Output structures assembled by the analysis use cases

mod anomaly;
mod bias;
mod insight;
mod profile;
mod quality;
mod result;
mod visualization;

pub use anomaly::AnomalyReport;
pub use bias::{BiasReport, ImbalancedField};
pub use insight::{InsightSet, Recommendation, RecommendationCategory, RecommendationPriority};
pub use profile::{CategoricalSummary, ColumnProfile, DatasetProfile, NumericSummary};
pub use quality::{ComponentScores, Grade, QualityScore};
pub use result::{
    AnalysisResult, ContentAnalysis, FileHealth, StructureAnalysis, ValidationReport,
};
pub use visualization::{ChartType, VisualizationDescriptor, VisualizationMap};
