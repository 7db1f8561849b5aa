// ============================================================
// DELIMITED-TEXT PROBE
// ============================================================
// Header-first parsing of comma- and tab-delimited content,
// with sentinel detection for previously exported reports

use super::report_parser;
use crate::domain::extension::FileExtension;
use crate::domain::table::{
    CellValue, ContentKind, IssueKind, IssueSeverity, StructuralIssue, TabularDataset,
};
use csv::{ReaderBuilder, Trim};

/// Number of leading non-empty lines sampled for delimiter detection
const SAMPLE_LINES: usize = 10;

/// Sentinel phrase marking a previously exported analysis report
const REPORT_SENTINEL: &str = "Analysis Report";

/// Try comma-delimited parsing first, then tab-delimited.
/// A mid-parse failure is downgraded to a high-severity issue and
/// the next attempt (or probe) takes over.
pub(super) fn probe(
    text: &str,
    declared: FileExtension,
    issues: &mut Vec<StructuralIssue>,
) -> Option<(TabularDataset, ContentKind)> {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();
    if sample.is_empty() {
        return None;
    }

    let comma_applies =
        declared == FileExtension::Csv || majority_contains(&sample, ',');
    if comma_applies {
        match parse_delimited(text, b',') {
            Ok(Some(dataset)) => {
                if declared != FileExtension::Csv {
                    issues.push(StructuralIssue::new(
                        IssueKind::ExtensionMismatch,
                        IssueSeverity::Medium,
                        format!("File contains CSV data but has {} extension", declared),
                        "Consider renaming to .csv",
                    ));
                }

                if sample.iter().take(3).any(|line| line.contains(REPORT_SENTINEL)) {
                    issues.push(StructuralIssue::new(
                        IssueKind::ReportFormatDetected,
                        IssueSeverity::Info,
                        "Analysis report format detected",
                        "Will extract structured data from report",
                    ));
                    return Some((report_parser::parse(text), ContentKind::Csv));
                }

                return Some((dataset, ContentKind::Csv));
            }
            Ok(None) => {}
            Err(message) => {
                tracing::warn!(error = %message, "comma-delimited parsing failed mid-parse");
                issues.push(StructuralIssue::new(
                    IssueKind::ProbeFailed,
                    IssueSeverity::High,
                    format!("CSV parsing failed: {}", message),
                    "Verify delimiter usage and quoting",
                ));
            }
        }
    }

    let tab_applies = declared == FileExtension::Tsv || majority_contains(&sample, '\t');
    if tab_applies {
        match parse_delimited(text, b'\t') {
            Ok(Some(dataset)) => {
                if declared != FileExtension::Tsv {
                    issues.push(StructuralIssue::new(
                        IssueKind::ExtensionMismatch,
                        IssueSeverity::Medium,
                        format!("File contains tab-delimited data but has {} extension", declared),
                        "Consider renaming to .tsv",
                    ));
                }
                return Some((dataset, ContentKind::Tsv));
            }
            Ok(None) => {}
            Err(message) => {
                tracing::warn!(error = %message, "tab-delimited parsing failed mid-parse");
                issues.push(StructuralIssue::new(
                    IssueKind::ProbeFailed,
                    IssueSeverity::High,
                    format!("TSV parsing failed: {}", message),
                    "Verify delimiter usage and quoting",
                ));
            }
        }
    }

    None
}

/// True when more than half of the sampled lines contain the delimiter
fn majority_contains(sample: &[&str], delimiter: char) -> bool {
    let hits = sample
        .iter()
        .filter(|line| line.matches(delimiter).count() >= 1)
        .count();
    hits * 2 > sample.len()
}

/// Parse header-first delimited content into a typed table.
/// Returns `Ok(None)` when the shape is not usable as a table.
fn parse_delimited(text: &str, delimiter: u8) -> Result<Option<TabularDataset>, String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|err| format!("failed to read header row: {}", err))?
        .clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Ok(None);
    }

    let mut dataset =
        TabularDataset::new(headers.iter().map(|h| h.to_string()).collect());

    for (index, result) in reader.records().enumerate() {
        let record =
            result.map_err(|err| format!("failed to parse row {}: {}", index + 1, err))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let row = (0..dataset.column_count())
            .map(|i| CellValue::from_field(record.get(i).unwrap_or("")))
            .collect();
        dataset.push_row(row);
    }

    if dataset.row_count() == 0 {
        return Ok(None);
    }
    Ok(Some(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_csv() {
        let mut issues = Vec::new();
        let (dataset, kind) =
            probe("col1,col2\n1,2\n3,4", FileExtension::Csv, &mut issues).unwrap();

        assert_eq!(kind, ContentKind::Csv);
        assert_eq!(dataset.columns(), &["col1", "col2"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.missing_cell_count(), 0);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_csv_declared_as_txt_flags_mismatch() {
        let mut issues = Vec::new();
        let result = probe("a,b\n1,2", FileExtension::Txt, &mut issues);
        assert!(result.is_some());
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::ExtensionMismatch));
    }

    #[test]
    fn test_tab_delimited() {
        let mut issues = Vec::new();
        let (dataset, kind) =
            probe("a\tb\n1\t2\n3\t4", FileExtension::Tsv, &mut issues).unwrap();
        assert_eq!(kind, ContentKind::Tsv);
        assert_eq!(dataset.row_count(), 2);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_prose_without_delimiters_falls_through() {
        let mut issues = Vec::new();
        let result = probe(
            "just a plain sentence\nanother plain sentence",
            FileExtension::Txt,
            &mut issues,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_report_sentinel_switches_parser() {
        let mut issues = Vec::new();
        let text = "Dataset Analysis Report,\nDataset Information\nrows,100\ncolumns,5\n";
        let (dataset, _) = probe(text, FileExtension::Csv, &mut issues).unwrap();

        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::ReportFormatDetected));
        assert_eq!(
            dataset.columns(),
            &["section", "metric", "value", "line_number"]
        );
    }

    #[test]
    fn test_blank_rows_skipped() {
        let mut issues = Vec::new();
        let (dataset, _) = probe("a,b\n1,2\n,\n3,4", FileExtension::Csv, &mut issues).unwrap();
        assert_eq!(dataset.row_count(), 2);
    }

    #[test]
    fn test_cells_are_typed() {
        let mut issues = Vec::new();
        let (dataset, _) = probe(
            "id,name,active\n1,Alice,true\n2,,false",
            FileExtension::Csv,
            &mut issues,
        )
        .unwrap();

        assert_eq!(dataset.rows()[0][0], CellValue::Number(1.0));
        assert_eq!(dataset.rows()[0][2], CellValue::Bool(true));
        assert!(dataset.rows()[1][1].is_null());
    }
}
