// ============================================================
// QUALITY SCORER USE CASE
// ============================================================
// Combines completeness, consistency and structural-issue
// penalties into one deterministic 0-100 score

use std::collections::HashSet;

use crate::domain::report::{ComponentScores, Grade, QualityScore};
use crate::domain::table::{ColumnKind, StructuralIssue, TabularDataset};

/// Distinct-to-count ratio above which a text column is treated as
/// near-unique and scored by its redundancy instead of a flat value
const HIGH_CARDINALITY_RATIO: f64 = 0.8;

/// Quality scorer
pub struct QualityScorer;

impl QualityScorer {
    pub fn score(dataset: &TabularDataset, issues: &[StructuralIssue]) -> QualityScore {
        let completeness = Self::completeness_score(dataset);
        let consistency = Self::consistency_score(dataset);

        let base_score = round1((completeness + consistency) / 2.0);

        let issue_penalty: f64 = issues
            .iter()
            .map(|issue| issue.severity.penalty_points())
            .sum();

        let total_score = (base_score - issue_penalty).max(0.0);

        QualityScore {
            total_score,
            base_score,
            issue_penalty,
            grade: Grade::from_score(total_score),
            component_scores: ComponentScores {
                completeness,
                consistency,
                format_compliance: (100.0 - issue_penalty).max(0.0),
            },
        }
    }

    /// Fraction of non-null cells, as a percentage. Zero cells score zero.
    fn completeness_score(dataset: &TabularDataset) -> f64 {
        let cells = dataset.cell_count();
        if cells == 0 {
            return 0.0;
        }
        let missing = dataset.missing_cell_count();
        (1.0 - missing as f64 / cells as f64) * 100.0
    }

    /// Per-column contributions averaged together. Numeric columns are a
    /// flat 90; text columns are a flat 80 unless nearly every value is
    /// distinct, in which case the redundancy ratio scores them.
    /// An empty column set defaults to 50.
    fn consistency_score(dataset: &TabularDataset) -> f64 {
        let mut contributions = Vec::new();

        for index in 0..dataset.column_count() {
            match dataset.column_kind(index) {
                ColumnKind::Numeric => contributions.push(90.0),
                ColumnKind::Text | ColumnKind::Boolean => {
                    contributions.push(Self::categorical_contribution(dataset, index));
                }
                ColumnKind::Empty => {}
            }
        }

        if contributions.is_empty() {
            return 50.0;
        }
        contributions.iter().sum::<f64>() / contributions.len() as f64
    }

    fn categorical_contribution(dataset: &TabularDataset, index: usize) -> f64 {
        let mut non_null = 0usize;
        let mut distinct: HashSet<String> = HashSet::new();

        for cell in dataset.column_values(index) {
            if !cell.is_null() {
                non_null += 1;
                distinct.insert(cell.display_string());
            }
        }

        if non_null == 0 {
            return 80.0;
        }

        let ratio = distinct.len() as f64 / non_null as f64;
        if ratio > HIGH_CARDINALITY_RATIO {
            (1.0 - ratio) * 100.0
        } else {
            80.0
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
