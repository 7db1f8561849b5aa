// ============================================================
// QUALITY SCORE
// ============================================================
// Deterministic 0-100 quality assessment, recomputed in full
// on every run

use serde::{Deserialize, Serialize};

/// Letter grade for a total quality score.
/// Band boundaries are inclusive at the lower edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// Individual score components backing the total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScores {
    pub completeness: f64,
    pub consistency: f64,

    /// 100 minus the structural issue penalty; kept out of the base score
    /// so the base stays purely data-driven
    pub format_compliance: f64,
}

/// Combined quality score with its breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityScore {
    /// Final score, clamped to 0-100
    pub total_score: f64,

    /// Data-driven score before issue penalties
    pub base_score: f64,

    /// Sum of penalty points from structural issues
    pub issue_penalty: f64,

    pub grade: Grade,
    pub component_scores: ComponentScores,
}
