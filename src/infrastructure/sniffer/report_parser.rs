// ============================================================
// REPORT-STRUCTURE PARSER
// ============================================================
// Re-parses a previously exported analysis report into
// (section, metric, value, line_number) rows instead of
// treating it as generic tabular data

use crate::domain::table::{CellValue, TabularDataset};

/// Section-header labels recognized in exported reports
const SECTION_HEADERS: [&str; 6] = [
    "Dataset Information",
    "Quality Metrics",
    "Anomalies",
    "Detailed Anomalies",
    "Bias Metrics",
    "AI Insights",
];

/// Walk the report line by line. A line exactly matching a known
/// section header switches the current section tag; data lines are
/// split on the first comma into (metric, value) pairs.
pub(super) fn parse(text: &str) -> TabularDataset {
    let mut dataset = TabularDataset::new(vec![
        "section".to_string(),
        "metric".to_string(),
        "value".to_string(),
        "line_number".to_string(),
    ]);

    let mut current_section = "header".to_string();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim().trim_matches('"');
        if line.is_empty() {
            continue;
        }

        if SECTION_HEADERS.contains(&line) {
            current_section = line.to_lowercase().replace(' ', "_");
            continue;
        }

        let line_number = CellValue::Number((index + 1) as f64);

        if let Some((metric, value)) = line.split_once(',') {
            let metric = metric.trim().trim_matches('"');
            let value = value.trim().trim_matches('"');
            if !metric.is_empty() && !value.is_empty() {
                dataset.push_row(vec![
                    CellValue::Text(current_section.clone()),
                    CellValue::Text(metric.to_string()),
                    CellValue::Text(value.to_string()),
                    line_number,
                ]);
                continue;
            }
        }

        // No usable delimiter, keep the whole line as content
        dataset.push_row(vec![
            CellValue::Text(current_section.clone()),
            CellValue::Text("content".to_string()),
            CellValue::Text(line.to_string()),
            line_number,
        ]);
    }

    dataset
}
