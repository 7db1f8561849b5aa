// ============================================================
// TABULAR TYPES
// ============================================================
// Data structures shared between the sniffer and the analyzers

mod cell;
mod content_kind;
mod dataset;
mod dataset_info;
mod issue;

pub use cell::CellValue;
pub use content_kind::ContentKind;
pub use dataset::{ColumnKind, TabularDataset};
pub use dataset_info::DatasetInfo;
pub use issue::{IssueKind, IssueSeverity, SeverityCounts, StructuralIssue};
