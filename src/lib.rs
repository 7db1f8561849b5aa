// ============================================================
// DATASCOPE
// ============================================================
// Adaptive file ingestion and data-quality analysis. Raw bytes
// go in, a serializable quality assessment comes out: the content
// sniffer coerces whatever was uploaded into tabular form, then
// the independent analysis stages score, profile and annotate it.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use crate::application::AnalyzeDatasetUseCase;
pub use crate::domain::config::{AnalysisConfig, AnalysisDepth};
pub use crate::domain::error::{AppError, Result};
pub use crate::domain::extension::FileExtension;
pub use crate::domain::report::{
    AnalysisResult, AnomalyReport, BiasReport, Grade, InsightSet, QualityScore,
    ValidationReport,
};
pub use crate::domain::table::{
    ContentKind, DatasetInfo, IssueSeverity, StructuralIssue, TabularDataset,
};

/// Run a full analysis over raw file bytes.
///
/// `declared_extension` is the extension claimed by the uploader,
/// with or without the leading dot. The actual content is sniffed
/// regardless and mismatches are reported, not rejected.
pub fn analyze(
    bytes: &[u8],
    declared_extension: &str,
    depth: AnalysisDepth,
    config: &AnalysisConfig,
) -> Result<AnalysisResult> {
    AnalyzeDatasetUseCase::new(config.clone()).execute(bytes, declared_extension, depth)
}

/// Validate a file without running the analysis stages.
/// Reports whether the content can be parsed and what the full
/// analysis would flag, using the sniffer alone.
pub fn validate(
    bytes: &[u8],
    declared_extension: &str,
    config: &AnalysisConfig,
) -> Result<ValidationReport> {
    AnalyzeDatasetUseCase::new(config.clone()).validate(bytes, declared_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    #[test]
    fn test_analyze_entry_point() {
        init_tracing();
        let result = analyze(
            b"name,score\nalice,90\nbob,85",
            "csv",
            AnalysisDepth::Basic,
            &AnalysisConfig::default(),
        )
        .unwrap();

        assert_eq!(result.dataset_info.rows, 2);
        assert_eq!(result.dataset_info.actual_content_type, ContentKind::Csv);
        assert!(result.quality_score.total_score > 0.0);
    }

    #[test]
    fn test_validate_entry_point() {
        let report = validate(b"a\tb\n1\t2", "tsv", &AnalysisConfig::default()).unwrap();
        assert!(report.can_parse);
        assert_eq!(report.detected_content_type, ContentKind::Tsv);
        assert!(!report.extension_mismatch);
    }
}
