// ============================================================
// DOCUMENT PROBE
// ============================================================
// Reduces word-processing documents to a one-column table of
// text lines. Only attempted for declared .doc/.docx input.

use crate::domain::extension::FileExtension;
use crate::domain::table::{
    CellValue, IssueKind, IssueSeverity, StructuralIssue, TabularDataset,
};

pub(super) fn probe(
    bytes: &[u8],
    decoded_text: &str,
    declared: FileExtension,
    issues: &mut Vec<StructuralIssue>,
) -> Option<TabularDataset> {
    if !declared.is_document() {
        return None;
    }

    let raw_text = if declared == FileExtension::Docx {
        match docx_rs::read_docx(bytes) {
            Ok(docx) => extract_docx_text(&docx),
            Err(err) => {
                tracing::debug!(error = %err, "failed to parse docx container");
                return None;
            }
        }
    } else {
        // Legacy .doc has no dedicated reader; use the decoded bytes
        decoded_text.to_string()
    };

    if raw_text.trim().is_empty() {
        return None;
    }

    let mut dataset = TabularDataset::new(vec!["content".to_string()]);
    let lines: Vec<&str> = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        dataset.push_row(vec![CellValue::Text(raw_text.trim().to_string())]);
    } else {
        for line in lines {
            dataset.push_row(vec![CellValue::Text(line.to_string())]);
        }
    }

    issues.push(StructuralIssue::new(
        IssueKind::DocumentParsed,
        IssueSeverity::Info,
        "Document converted to line-by-line analysis format",
        "Text content extracted for analysis",
    ));

    Some(dataset)
}

fn extract_docx_text(docx: &docx_rs::Docx) -> String {
    let mut lines = Vec::new();
    for child in &docx.document.children {
        extract_document_child(child, &mut lines);
    }
    lines.join("\n")
}

fn extract_document_child(child: &docx_rs::DocumentChild, lines: &mut Vec<String>) {
    match child {
        docx_rs::DocumentChild::Paragraph(paragraph) => {
            let text = extract_paragraph(paragraph);
            if !text.trim().is_empty() {
                lines.push(text);
            }
        }
        docx_rs::DocumentChild::Table(table) => {
            extract_table(table, lines);
        }
        _ => {}
    }
}

fn extract_paragraph(paragraph: &docx_rs::Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        extract_paragraph_child(child, &mut buffer);
    }
    buffer
}

fn extract_paragraph_child(child: &docx_rs::ParagraphChild, buffer: &mut String) {
    match child {
        docx_rs::ParagraphChild::Run(run) => {
            extract_run(run, buffer);
        }
        docx_rs::ParagraphChild::Hyperlink(link) => {
            for link_child in &link.children {
                extract_paragraph_child(link_child, buffer);
            }
        }
        docx_rs::ParagraphChild::Insert(insert) => {
            for insert_child in &insert.children {
                if let docx_rs::InsertChild::Run(run) = insert_child {
                    extract_run(run, buffer);
                }
            }
        }
        _ => {}
    }
}

fn extract_run(run: &docx_rs::Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text) => buffer.push_str(&text.text),
            docx_rs::RunChild::InstrTextString(text) => buffer.push_str(text),
            docx_rs::RunChild::Tab(_) | docx_rs::RunChild::PTab(_) => buffer.push('\t'),
            docx_rs::RunChild::Break(_) => buffer.push('\n'),
            docx_rs::RunChild::Sym(sym) => buffer.push_str(&sym.char),
            _ => {}
        }
    }
}

fn extract_table(table: &docx_rs::Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let docx_rs::TableChild::TableRow(row) = row;
        let mut cells = Vec::new();
        for cell in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = cell;
            let text = extract_table_cell(cell);
            if !text.trim().is_empty() {
                cells.push(text);
            }
        }
        if !cells.is_empty() {
            lines.push(cells.join(" | "));
        }
    }
}

fn extract_table_cell(cell: &docx_rs::TableCell) -> String {
    let mut parts = Vec::new();
    for content in &cell.children {
        match content {
            docx_rs::TableCellContent::Paragraph(paragraph) => {
                let text = extract_paragraph(paragraph);
                if !text.trim().is_empty() {
                    parts.push(text);
                }
            }
            docx_rs::TableCellContent::Table(table) => {
                let mut nested_lines = Vec::new();
                extract_table(table, &mut nested_lines);
                if !nested_lines.is_empty() {
                    parts.push(nested_lines.join(" "));
                }
            }
            _ => {}
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_extension_uses_decoded_text() {
        let mut issues = Vec::new();
        let dataset = probe(
            b"first line\n\n  second line  \n",
            "first line\n\n  second line  \n",
            FileExtension::Doc,
            &mut issues,
        )
        .unwrap();

        assert_eq!(dataset.columns(), &["content"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(
            dataset.rows()[1][0],
            CellValue::Text("second line".to_string())
        );
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::DocumentParsed && i.severity == IssueSeverity::Info));
    }

    #[test]
    fn test_non_document_extension_is_skipped() {
        let mut issues = Vec::new();
        assert!(probe(b"text", "text", FileExtension::Txt, &mut issues).is_none());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_blank_document_falls_through() {
        let mut issues = Vec::new();
        assert!(probe(b"   \n ", "   \n ", FileExtension::Doc, &mut issues).is_none());
    }
}
