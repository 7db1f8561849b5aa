// ============================================================
// VISUALIZATION DESCRIPTOR BUILDER USE CASE
// ============================================================
// Declarative chart descriptors for an external renderer.
// Nothing here draws pixels.

use std::collections::BTreeMap;

use crate::domain::report::{ChartType, VisualizationDescriptor, VisualizationMap};
use crate::domain::table::{SeverityCounts, StructuralIssue, TabularDataset};

/// Histograms are emitted for at most this many numeric columns
const HISTOGRAM_LIMIT: usize = 3;

/// Visualization descriptor builder
pub struct VisualizationBuilder;

impl VisualizationBuilder {
    pub fn build(dataset: &TabularDataset, issues: &[StructuralIssue]) -> VisualizationMap {
        let mut visualizations = VisualizationMap::new();

        if !issues.is_empty() {
            let counts = SeverityCounts::tally(issues);
            let mut data = BTreeMap::new();
            for (label, count) in [
                ("high", counts.high),
                ("medium", counts.medium),
                ("low", counts.low),
                ("info", counts.info),
            ] {
                if count > 0 {
                    data.insert(label.to_string(), count);
                }
            }

            visualizations.insert(
                "file_issues".to_string(),
                VisualizationDescriptor {
                    chart: ChartType::BarChart,
                    title: "File Structure Issues by Severity".to_string(),
                    columns: Vec::new(),
                    description: "Distribution of detected file format and structure issues"
                        .to_string(),
                    data: Some(data),
                },
            );
        }

        let numeric_indices = dataset.numeric_column_indices();
        for &index in numeric_indices.iter().take(HISTOGRAM_LIMIT) {
            let name = &dataset.columns()[index];
            visualizations.insert(
                format!("dist_{}", name),
                VisualizationDescriptor {
                    chart: ChartType::Histogram,
                    title: format!("Distribution of {}", name),
                    columns: vec![name.clone()],
                    description: format!("Frequency distribution of values in {}", name),
                    data: None,
                },
            );
        }

        if numeric_indices.len() > 1 {
            visualizations.insert(
                "correlation".to_string(),
                VisualizationDescriptor {
                    chart: ChartType::Heatmap,
                    title: "Numeric Variable Correlations".to_string(),
                    columns: numeric_indices
                        .iter()
                        .map(|&index| dataset.columns()[index].clone())
                        .collect(),
                    description: "Correlation matrix of numeric variables".to_string(),
                    data: None,
                },
            );
        }

        if dataset.missing_cell_count() > 0 {
            let null_counts: BTreeMap<String, usize> = dataset
                .columns()
                .iter()
                .enumerate()
                .filter_map(|(index, name)| {
                    let nulls = dataset
                        .column_values(index)
                        .filter(|cell| cell.is_null())
                        .count();
                    (nulls > 0).then(|| (name.clone(), nulls))
                })
                .collect();

            visualizations.insert(
                "missing_data".to_string(),
                VisualizationDescriptor {
                    chart: ChartType::BarChart,
                    title: "Missing Data by Column".to_string(),
                    columns: null_counts.keys().cloned().collect(),
                    description: "Count of missing values per column".to_string(),
                    data: Some(null_counts),
                },
            );
        }

        visualizations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{CellValue, IssueKind, IssueSeverity};

    fn mixed_dataset() -> TabularDataset {
        let mut dataset = TabularDataset::new(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
            "label".to_string(),
        ]);
        dataset.push_row(vec![
            CellValue::Number(1.0),
            CellValue::Number(2.0),
            CellValue::Number(3.0),
            CellValue::Number(4.0),
            CellValue::Text("x".into()),
        ]);
        dataset.push_row(vec![
            CellValue::Number(5.0),
            CellValue::Number(6.0),
            CellValue::Number(7.0),
            CellValue::Number(8.0),
            CellValue::Null,
        ]);
        dataset
    }

    #[test]
    fn test_histograms_capped_at_three() {
        let visualizations = VisualizationBuilder::build(&mixed_dataset(), &[]);
        let histograms = visualizations
            .values()
            .filter(|v| v.chart == ChartType::Histogram)
            .count();
        assert_eq!(histograms, 3);
        assert!(visualizations.contains_key("dist_a"));
        assert!(!visualizations.contains_key("dist_d"));
    }

    #[test]
    fn test_correlation_needs_two_numeric_columns() {
        let visualizations = VisualizationBuilder::build(&mixed_dataset(), &[]);
        assert!(visualizations.contains_key("correlation"));

        let mut single = TabularDataset::new(vec!["v".to_string()]);
        single.push_row(vec![CellValue::Number(1.0)]);
        let visualizations = VisualizationBuilder::build(&single, &[]);
        assert!(!visualizations.contains_key("correlation"));
    }

    #[test]
    fn test_missing_data_chart_lists_affected_columns() {
        let visualizations = VisualizationBuilder::build(&mixed_dataset(), &[]);
        let chart = visualizations.get("missing_data").unwrap();
        assert_eq!(chart.columns, vec!["label".to_string()]);
        assert_eq!(chart.data.as_ref().unwrap().get("label"), Some(&1));
    }

    #[test]
    fn test_issue_chart_only_when_issues_exist() {
        let visualizations = VisualizationBuilder::build(&mixed_dataset(), &[]);
        assert!(!visualizations.contains_key("file_issues"));

        let issues = vec![StructuralIssue::new(
            IssueKind::FallbackParsing,
            IssueSeverity::Medium,
            "m",
            "r",
        )];
        let visualizations = VisualizationBuilder::build(&mixed_dataset(), &issues);
        let chart = visualizations.get("file_issues").unwrap();
        assert_eq!(chart.data.as_ref().unwrap().get("medium"), Some(&1));
    }
}
