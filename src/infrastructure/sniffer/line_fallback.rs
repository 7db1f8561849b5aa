// ============================================================
// LINE FALLBACK
// ============================================================
// Last-resort coercion: any non-empty text becomes a table of
// {line_number, content, char_count, is_blank} rows

use crate::domain::table::{
    CellValue, IssueKind, IssueSeverity, StructuralIssue, TabularDataset,
};

pub(super) fn probe(
    text: &str,
    max_lines: usize,
    issues: &mut Vec<StructuralIssue>,
) -> Option<TabularDataset> {
    if text.is_empty() {
        return None;
    }

    let mut dataset = TabularDataset::new(vec![
        "line_number".to_string(),
        "content".to_string(),
        "char_count".to_string(),
        "is_blank".to_string(),
    ]);

    for (index, line) in text.lines().take(max_lines).enumerate() {
        dataset.push_row(vec![
            CellValue::Number((index + 1) as f64),
            CellValue::Text(line.to_string()),
            CellValue::Number(line.chars().count() as f64),
            CellValue::Bool(line.trim().is_empty()),
        ]);
    }

    if dataset.row_count() == 0 {
        return None;
    }

    issues.push(StructuralIssue::new(
        IssueKind::FallbackParsing,
        IssueSeverity::Medium,
        "Could not detect a specific structure, treated as plain text",
        "Verify file format and content",
    ));

    Some(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_succeeds_for_text() {
        let mut issues = Vec::new();
        let dataset = probe("<html><body>not a table</body></html>", 1000, &mut issues).unwrap();

        assert_eq!(dataset.row_count(), 1);
        assert!(dataset.column_index("content").is_some());
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::FallbackParsing && i.severity == IssueSeverity::Medium));
    }

    #[test]
    fn test_line_cap() {
        let text = (0..50).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut issues = Vec::new();
        let dataset = probe(&text, 10, &mut issues).unwrap();
        assert_eq!(dataset.row_count(), 10);
    }

    #[test]
    fn test_blank_lines_flagged() {
        let mut issues = Vec::new();
        let dataset = probe("a\n\nb", 1000, &mut issues).unwrap();
        assert_eq!(dataset.rows()[1][3], CellValue::Bool(true));
        assert_eq!(dataset.rows()[0][3], CellValue::Bool(false));
    }

    #[test]
    fn test_empty_text_fails() {
        let mut issues = Vec::new();
        assert!(probe("", 1000, &mut issues).is_none());
    }
}
