// ============================================================
// ANALYZE DATASET USE CASE
// ============================================================
// Orchestrates coercion and the independent analysis stages into
// one result bundle. Each run is a pure function of
// (bytes, declared extension, depth).

use super::anomaly_detector::AnomalyDetector;
use super::bias_analyzer::BiasAnalyzer;
use super::insight_generator::InsightGenerator;
use super::profiler::DescriptiveProfiler;
use super::quality_scorer::QualityScorer;
use super::visualization_builder::VisualizationBuilder;
use crate::domain::config::{AnalysisConfig, AnalysisDepth};
use crate::domain::error::AppError;
use crate::domain::extension::FileExtension;
use crate::domain::report::{
    AnalysisResult, ContentAnalysis, FileHealth, StructureAnalysis, ValidationReport,
};
use crate::domain::table::{
    CellValue, ContentKind, IssueKind, IssueSeverity, SeverityCounts,
};
use crate::infrastructure::sniffer::{CoercedTable, ContentSniffer};

/// Column count above which a flattened object is reported as complex
const SIMPLE_OBJECT_COLUMNS: usize = 10;

/// Full analysis pipeline
pub struct AnalyzeDatasetUseCase {
    config: AnalysisConfig,
}

impl AnalyzeDatasetUseCase {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline over raw bytes
    pub fn execute(
        &self,
        bytes: &[u8],
        declared_extension: &str,
        depth: AnalysisDepth,
    ) -> Result<AnalysisResult, AppError> {
        let declared = self.validate_input(bytes, declared_extension)?;

        let coerced = ContentSniffer::new(&self.config).coerce(bytes, declared)?;

        let profile = DescriptiveProfiler::profile(&coerced.dataset, depth);
        let quality_score = QualityScorer::score(&coerced.dataset, &coerced.issues);
        let anomalies = AnomalyDetector::new(&self.config).detect(&coerced.dataset);
        let bias = BiasAnalyzer::new(&self.config).analyze(&coerced.dataset);
        let insights = InsightGenerator::generate(&coerced.info, &coerced.issues, depth);
        let visualizations = VisualizationBuilder::build(&coerced.dataset, &coerced.issues);
        let file_health = FileHealth::from_issues(&coerced.issues);

        let content_analysis = if depth == AnalysisDepth::Full {
            Some(Self::content_analysis(&coerced))
        } else {
            None
        };

        tracing::info!(
            rows = coerced.info.rows,
            columns = coerced.info.columns,
            detected = %coerced.info.actual_content_type,
            total_score = quality_score.total_score,
            anomalies = anomalies.total_anomalies,
            "analysis complete"
        );

        Ok(AnalysisResult {
            dataset_info: coerced.info,
            quality_score,
            profile,
            anomalies,
            bias,
            insights,
            visualizations,
            issues: coerced.issues,
            file_health,
            content_analysis,
        })
    }

    /// Pre-flight validation without the analysis stages: runs the
    /// sniffer only and reports whether full analysis would succeed.
    pub fn validate(
        &self,
        bytes: &[u8],
        declared_extension: &str,
    ) -> Result<ValidationReport, AppError> {
        let declared = self.validate_input(bytes, declared_extension)?;
        let file_size_mb = round2(bytes.len() as f64 / (1024.0 * 1024.0));

        let coerced = match ContentSniffer::new(&self.config).coerce(bytes, declared) {
            Ok(coerced) => coerced,
            Err(err) => {
                tracing::warn!(error = %err, "pre-flight coercion failed");
                return Ok(ValidationReport {
                    declared_extension: declared.as_str().to_string(),
                    detected_content_type: declared.expected_kind(),
                    extension_mismatch: false,
                    can_parse: false,
                    file_size_mb,
                    issues_found: 0,
                    issues_by_severity: SeverityCounts::default(),
                    issues: Vec::new(),
                    suggested_actions: Vec::new(),
                    analysis_notes: vec![format!("File cannot be analyzed: {}", err)],
                });
            }
        };

        let suggested_actions = coerced
            .issues
            .iter()
            .filter(|issue| {
                matches!(issue.severity, IssueSeverity::High | IssueSeverity::Medium)
            })
            .map(|issue| issue.recommendation.clone())
            .collect();

        let analysis_notes = Self::analysis_notes(&coerced);

        Ok(ValidationReport {
            declared_extension: declared.as_str().to_string(),
            detected_content_type: coerced.info.actual_content_type,
            extension_mismatch: coerced.info.extension_mismatch,
            can_parse: true,
            file_size_mb,
            issues_found: coerced.issues.len(),
            issues_by_severity: SeverityCounts::tally(&coerced.issues),
            issues: coerced.issues,
            suggested_actions,
            analysis_notes,
        })
    }

    fn validate_input(
        &self,
        bytes: &[u8],
        declared_extension: &str,
    ) -> Result<FileExtension, AppError> {
        self.config
            .validate()
            .map_err(AppError::ValidationError)?;

        let declared = FileExtension::parse(declared_extension)?;

        if bytes.len() > self.config.max_file_size {
            return Err(AppError::ValidationError(format!(
                "File too large: {} bytes exceeds the {} byte limit",
                bytes.len(),
                self.config.max_file_size
            )));
        }

        Ok(declared)
    }

    fn analysis_notes(coerced: &CoercedTable) -> Vec<String> {
        let mut notes = Vec::new();
        let counts = SeverityCounts::tally(&coerced.issues);

        if coerced.issues.is_empty() {
            notes.push("File structure is valid and properly formatted".to_string());
        } else if counts.high > 0 {
            notes.push("Critical issues detected but file can still be processed".to_string());
        } else if counts.medium > 0 {
            notes.push("Format issues detected but analysis will proceed".to_string());
        } else {
            notes.push("Minor format notes - no impact on analysis quality".to_string());
        }

        if coerced.info.extension_mismatch {
            notes.push(format!(
                "Content will be processed as {} (not {})",
                coerced.info.actual_content_type, coerced.info.file_type
            ));
        } else {
            notes.push(format!(
                "Content matches declared format ({})",
                coerced.info.actual_content_type
            ));
        }

        notes
    }

    /// Content-type-specific structure analysis, full depth only
    fn content_analysis(coerced: &CoercedTable) -> ContentAnalysis {
        let detected = coerced.info.actual_content_type;
        let dataset = &coerced.dataset;

        let structure = match detected {
            ContentKind::Json => {
                let is_config = coerced
                    .issues
                    .iter()
                    .any(|issue| issue.kind == IssueKind::ConfigObjectDetected)
                    || (dataset.column_index("name").is_some()
                        && dataset.column_index("version").is_some());
                if is_config {
                    Some(StructureAnalysis::ConfigurationFile {
                        key_fields: dataset.columns().to_vec(),
                    })
                } else {
                    let complexity = if dataset.column_count() <= SIMPLE_OBJECT_COLUMNS {
                        "simple".to_string()
                    } else {
                        "complex".to_string()
                    };
                    Some(StructureAnalysis::DataObject { complexity })
                }
            }
            ContentKind::Document | ContentKind::Text => {
                Some(Self::text_structure(coerced))
            }
            ContentKind::Csv | ContentKind::Tsv | ContentKind::Spreadsheet => {
                let numeric = dataset.numeric_column_indices().len();
                // Auto-generated header names mean the source had no
                // usable header row
                let named_headers = dataset
                    .columns()
                    .iter()
                    .all(|name| !name.starts_with("unnamed_"));
                Some(StructureAnalysis::Tabular {
                    well_formed: named_headers,
                    numeric_ratio: if dataset.column_count() > 0 {
                        numeric as f64 / dataset.column_count() as f64
                    } else {
                        0.0
                    },
                })
            }
        };

        ContentAnalysis {
            detected_type: detected,
            structure,
        }
    }

    fn text_structure(coerced: &CoercedTable) -> StructureAnalysis {
        let dataset = &coerced.dataset;
        let total_lines = dataset.row_count();

        let (avg_line_length, blank_lines) =
            match dataset.column_index("content") {
                Some(index) => {
                    let mut total_chars = 0usize;
                    let mut blanks = 0usize;
                    for cell in dataset.column_values(index) {
                        let text = match cell {
                            CellValue::Text(text) => text.as_str(),
                            _ => "",
                        };
                        total_chars += text.chars().count();
                        if text.trim().is_empty() {
                            blanks += 1;
                        }
                    }
                    let avg = if total_lines > 0 {
                        total_chars as f64 / total_lines as f64
                    } else {
                        0.0
                    };
                    (avg, blanks)
                }
                None => (0.0, 0),
            };

        StructureAnalysis::TextDocument {
            total_lines,
            avg_line_length,
            blank_lines,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::Grade;

    fn use_case() -> AnalyzeDatasetUseCase {
        AnalyzeDatasetUseCase::new(AnalysisConfig::default())
    }

    #[test]
    fn test_csv_round_trip_scores_full_completeness() {
        let result = use_case()
            .execute(b"col1,col2\n1,2\n3,4", "csv", AnalysisDepth::Basic)
            .unwrap();

        assert_eq!(result.dataset_info.rows, 2);
        assert_eq!(result.dataset_info.columns, 2);
        assert_eq!(result.quality_score.component_scores.completeness, 100.0);
        assert_eq!(result.quality_score.issue_penalty, 0.0);
        assert!(result.content_analysis.is_none());
    }

    #[test]
    fn test_json_declared_as_csv() {
        let result = use_case()
            .execute(
                br#"{"name":"test","version":"1.0.0"}"#,
                "csv",
                AnalysisDepth::Basic,
            )
            .unwrap();

        assert_eq!(
            result.dataset_info.actual_content_type,
            ContentKind::Json
        );
        assert_eq!(result.dataset_info.rows, 1);
        assert!(result.dataset_info.extension_mismatch);
        assert_eq!(result.quality_score.issue_penalty, 5.0);
        assert!(result.file_health.format_mismatch);
    }

    #[test]
    fn test_score_stays_in_band_and_grade_matches() {
        let inputs: [(&[u8], &str); 3] = [
            (b"a,b\n1,2\n3,4", "csv"),
            (b"just some text", "txt"),
            (br#"[{"x":1},{"x":2}]"#, "json"),
        ];
        for (bytes, ext) in inputs {
            let result = use_case().execute(bytes, ext, AnalysisDepth::Basic).unwrap();
            let score = result.quality_score.total_score;
            assert!((0.0..=100.0).contains(&score));
            assert_eq!(result.quality_score.grade, Grade::from_score(score));
        }
    }

    #[test]
    fn test_idempotence() {
        let bytes = b"v\n1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11\n999";
        let first = use_case().execute(bytes, "csv", AnalysisDepth::Full).unwrap();
        let second = use_case().execute(bytes, "csv", AnalysisDepth::Full).unwrap();

        assert_eq!(
            serde_json::to_string(&first.quality_score).unwrap(),
            serde_json::to_string(&second.quality_score).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&first.anomalies).unwrap(),
            serde_json::to_string(&second.anomalies).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&first.bias).unwrap(),
            serde_json::to_string(&second.bias).unwrap()
        );
    }

    #[test]
    fn test_empty_bytes_fail_with_parse_error() {
        let result = use_case().execute(b"", "csv", AnalysisDepth::Basic);
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = use_case().execute(b"data", "parquet", AnalysisDepth::Basic);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        let config = AnalysisConfig {
            max_file_size: 4,
            ..Default::default()
        };
        let result = AnalyzeDatasetUseCase::new(config).execute(
            b"a,b\n1,2",
            "csv",
            AnalysisDepth::Basic,
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_full_depth_adds_structure_analysis() {
        let result = use_case()
            .execute(b"a,b\n1,2\n3,4", "csv", AnalysisDepth::Full)
            .unwrap();
        let analysis = result.content_analysis.unwrap();
        assert_eq!(analysis.detected_type, ContentKind::Csv);
        match analysis.structure.unwrap() {
            StructureAnalysis::Tabular {
                well_formed,
                numeric_ratio,
            } => {
                assert!(well_formed);
                assert_eq!(numeric_ratio, 1.0);
            }
            other => panic!("unexpected structure: {:?}", other),
        }
        assert!(!result.profile.columns.is_empty());
    }

    #[test]
    fn test_config_file_structure_analysis() {
        let result = use_case()
            .execute(
                br#"{"name":"app","version":"2.1.0","license":"MIT"}"#,
                "json",
                AnalysisDepth::Full,
            )
            .unwrap();
        let analysis = result.content_analysis.unwrap();
        assert!(matches!(
            analysis.structure,
            Some(StructureAnalysis::ConfigurationFile { .. })
        ));
    }

    #[test]
    fn test_validate_reports_mismatch_without_full_analysis() {
        let report = use_case()
            .validate(br#"{"name":"test","version":"1.0.0"}"#, "csv")
            .unwrap();

        assert!(report.can_parse);
        assert!(report.extension_mismatch);
        assert_eq!(report.detected_content_type, ContentKind::Json);
        assert!(report.issues_found >= 1);
        assert!(!report.suggested_actions.is_empty());
        assert!(report
            .analysis_notes
            .iter()
            .any(|note| note.contains("will be processed as")));
    }

    #[test]
    fn test_validate_flags_unparseable_input() {
        let report = use_case().validate(b"", "csv").unwrap();
        assert!(!report.can_parse);
        assert_eq!(report.issues_found, 0);
    }
}
