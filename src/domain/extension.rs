// ============================================================
// DECLARED FILE EXTENSION
// ============================================================
// The extension claimed by the uploader, before content sniffing

use crate::domain::error::AppError;
use crate::domain::table::ContentKind;
use serde::{Deserialize, Serialize};

/// Declared file extension accepted by the analysis core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExtension {
    Csv,
    Tsv,
    Json,
    Xlsx,
    Xls,
    Doc,
    Docx,
    Txt,
}

impl FileExtension {
    /// Parse an extension string, with or without the leading dot
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let normalized = raw.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "csv" => Ok(FileExtension::Csv),
            "tsv" => Ok(FileExtension::Tsv),
            "json" => Ok(FileExtension::Json),
            "xlsx" => Ok(FileExtension::Xlsx),
            "xls" => Ok(FileExtension::Xls),
            "doc" => Ok(FileExtension::Doc),
            "docx" => Ok(FileExtension::Docx),
            "txt" => Ok(FileExtension::Txt),
            other => Err(AppError::ValidationError(format!(
                "Unsupported file type '.{}'. Allowed: .csv, .tsv, .json, .xlsx, .xls, .doc, .docx, .txt",
                other
            ))),
        }
    }

    /// Extension string without the leading dot
    pub fn as_str(&self) -> &'static str {
        match self {
            FileExtension::Csv => "csv",
            FileExtension::Tsv => "tsv",
            FileExtension::Json => "json",
            FileExtension::Xlsx => "xlsx",
            FileExtension::Xls => "xls",
            FileExtension::Doc => "doc",
            FileExtension::Docx => "docx",
            FileExtension::Txt => "txt",
        }
    }

    /// The content kind this extension claims to carry
    pub fn expected_kind(&self) -> ContentKind {
        match self {
            FileExtension::Csv => ContentKind::Csv,
            FileExtension::Tsv => ContentKind::Tsv,
            FileExtension::Json => ContentKind::Json,
            FileExtension::Xlsx | FileExtension::Xls => ContentKind::Spreadsheet,
            FileExtension::Doc | FileExtension::Docx => ContentKind::Document,
            FileExtension::Txt => ContentKind::Text,
        }
    }

    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, FileExtension::Xlsx | FileExtension::Xls)
    }

    pub fn is_document(&self) -> bool {
        matches!(self, FileExtension::Doc | FileExtension::Docx)
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.as_str())
    }
}
