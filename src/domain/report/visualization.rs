// ============================================================
// VISUALIZATION DESCRIPTORS
// ============================================================
// Declarative chart descriptions for an external renderer.
// No pixels are produced inside this core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    BarChart,
    Histogram,
    Heatmap,
}

/// A single chart the caller may render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationDescriptor {
    pub chart: ChartType,
    pub title: String,

    /// Target column(s); empty for charts derived from issue metadata
    pub columns: Vec<String>,

    pub description: String,

    /// Pre-aggregated values, when the chart is driven by counts
    /// rather than raw columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, usize>>,
}

/// Map from a visualization key to its descriptor
pub type VisualizationMap = BTreeMap<String, VisualizationDescriptor>;
