// ============================================================
// CONTENT KIND
// ============================================================
// The content type actually detected by sniffing the bytes,
// independent of the declared extension

use serde::{Deserialize, Serialize};

/// Content type detected in the uploaded bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Hierarchical key-value document, flattened for analysis
    Json,

    /// Comma-delimited table with a header row
    Csv,

    /// Tab-delimited table with a header row
    Tsv,

    /// Binary spreadsheet container (first worksheet extracted)
    Spreadsheet,

    /// Word-processing document reduced to text lines
    Document,

    /// Unrecognized content parsed line by line
    Text,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Json => "json",
            ContentKind::Csv => "csv",
            ContentKind::Tsv => "tsv",
            ContentKind::Spreadsheet => "spreadsheet",
            ContentKind::Document => "document",
            ContentKind::Text => "text",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
