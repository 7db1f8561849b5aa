// ============================================================
// CONTENT SNIFFER & TABULAR COERCER
// ============================================================
// Inspects raw bytes regardless of the declared extension and
// coerces them into a uniform tabular structure via an ordered
// probe chain. First successful probe wins.

mod decode;
mod delimited_probe;
mod document_probe;
mod json_probe;
mod line_fallback;
mod report_parser;
mod spreadsheet_probe;

use crate::domain::config::AnalysisConfig;
use crate::domain::error::AppError;
use crate::domain::extension::FileExtension;
use crate::domain::table::{ContentKind, DatasetInfo, StructuralIssue, TabularDataset};

/// Output of a successful coercion: the frozen table, its metadata
/// snapshot, and every structural issue in detection order.
#[derive(Debug, Clone)]
pub struct CoercedTable {
    pub dataset: TabularDataset,
    pub info: DatasetInfo,
    pub issues: Vec<StructuralIssue>,
}

/// Content sniffer driving the probe chain
pub struct ContentSniffer {
    max_fallback_lines: usize,
}

impl ContentSniffer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_fallback_lines: config.max_fallback_lines,
        }
    }

    /// Coerce raw bytes into tabular form. Fails only when no
    /// representation at all can be constructed.
    pub fn coerce(
        &self,
        bytes: &[u8],
        declared: FileExtension,
    ) -> Result<CoercedTable, AppError> {
        if bytes.is_empty() {
            return Err(AppError::ParseError(
                "no data could be extracted".to_string(),
            ));
        }

        let text = decode::decode_bytes(bytes);
        let mut issues = Vec::new();

        let mut outcome: Option<(TabularDataset, ContentKind)> = None;

        if let Some(dataset) = json_probe::probe(&text, declared, &mut issues) {
            outcome = Some((dataset, ContentKind::Json));
        }

        if outcome.is_none() {
            outcome = delimited_probe::probe(&text, declared, &mut issues);
        }

        if outcome.is_none() && declared.is_spreadsheet() {
            outcome = spreadsheet_probe::probe(bytes, declared)
                .map(|dataset| (dataset, ContentKind::Spreadsheet));
        }

        if outcome.is_none() && declared.is_document() {
            outcome = document_probe::probe(bytes, &text, declared, &mut issues)
                .map(|dataset| (dataset, ContentKind::Document));
        }

        if outcome.is_none() {
            outcome = line_fallback::probe(&text, self.max_fallback_lines, &mut issues)
                .map(|dataset| (dataset, ContentKind::Text));
        }

        let (dataset, detected) = outcome.ok_or_else(|| {
            AppError::ParseError("no data could be extracted".to_string())
        })?;

        if dataset.row_count() == 0 || dataset.column_count() == 0 {
            return Err(AppError::ParseError(
                "no data could be extracted".to_string(),
            ));
        }

        tracing::debug!(
            detected = %detected,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            issues = issues.len(),
            "content coerced to tabular form"
        );

        let info = DatasetInfo::collect(&dataset, bytes.len(), declared, detected);

        Ok(CoercedTable {
            dataset,
            info,
            issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{IssueKind, IssueSeverity};

    fn sniffer() -> ContentSniffer {
        ContentSniffer::new(&AnalysisConfig::default())
    }

    #[test]
    fn test_empty_input_is_a_parse_error() {
        let result = sniffer().coerce(b"", FileExtension::Csv);
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_json_wins_over_declared_csv() {
        let coerced = sniffer()
            .coerce(br#"{"name":"test","version":"1.0.0"}"#, FileExtension::Csv)
            .unwrap();

        assert_eq!(coerced.info.actual_content_type, ContentKind::Json);
        assert!(coerced.info.extension_mismatch);
        assert_eq!(coerced.dataset.row_count(), 1);
        assert!(coerced
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::ExtensionMismatch
                && i.severity == IssueSeverity::Medium));
    }

    #[test]
    fn test_csv_round_trip() {
        let coerced = sniffer()
            .coerce(b"col1,col2\n1,2\n3,4", FileExtension::Csv)
            .unwrap();

        assert_eq!(coerced.dataset.column_count(), 2);
        assert_eq!(coerced.dataset.row_count(), 2);
        assert_eq!(coerced.dataset.missing_cell_count(), 0);
        assert!(!coerced.info.extension_mismatch);
        assert!(coerced.issues.is_empty());
    }

    #[test]
    fn test_unstructured_text_uses_line_fallback() {
        let coerced = sniffer()
            .coerce(b"some free text\nwith no structure", FileExtension::Txt)
            .unwrap();

        assert_eq!(coerced.info.actual_content_type, ContentKind::Text);
        assert!(coerced.dataset.column_index("content").is_some());
        assert_eq!(coerced.dataset.row_count(), 2);
        assert!(coerced
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::FallbackParsing));
    }

    #[test]
    fn test_binary_garbage_still_coerces() {
        let coerced = sniffer()
            .coerce(&[0x00, 0x01, 0x02, b'x'], FileExtension::Txt)
            .unwrap();
        assert_eq!(coerced.info.actual_content_type, ContentKind::Text);
        assert!(coerced.dataset.row_count() >= 1);
    }

    #[test]
    fn test_config_issue_only_for_declared_json() {
        let coerced = sniffer()
            .coerce(br#"{"name":"x","version":"1"}"#, FileExtension::Json)
            .unwrap();
        assert_eq!(coerced.issues.len(), 1);
        assert_eq!(coerced.issues[0].kind, IssueKind::ConfigObjectDetected);

        let coerced = sniffer()
            .coerce(br#"{"name":"x","version":"1"}"#, FileExtension::Txt)
            .unwrap();
        assert_eq!(coerced.issues.len(), 1);
        assert_eq!(coerced.issues[0].kind, IssueKind::ExtensionMismatch);
    }
}
