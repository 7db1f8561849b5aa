// ============================================================
// SPREADSHEET PROBE
// ============================================================
// Extracts the first worksheet of an xlsx/xls container into a
// header-first table. Only attempted when the declared extension
// names a spreadsheet; failure falls through silently.

use crate::domain::extension::FileExtension;
use crate::domain::table::{CellValue, TabularDataset};
use calamine::{Data, Range, Reader, Xls, Xlsx};
use std::io::Cursor;

pub(super) fn probe(bytes: &[u8], declared: FileExtension) -> Option<TabularDataset> {
    let range = match declared {
        FileExtension::Xlsx => read_first_sheet_xlsx(bytes),
        FileExtension::Xls => read_first_sheet_xls(bytes),
        _ => return None,
    }?;

    table_from_range(&range)
}

fn read_first_sheet_xlsx(bytes: &[u8]) -> Option<Range<Data>> {
    let mut workbook = match Xlsx::new(Cursor::new(bytes)) {
        Ok(workbook) => workbook,
        Err(err) => {
            tracing::debug!(error = %err, "failed to open xlsx container");
            return None;
        }
    };
    match workbook.worksheet_range_at(0)? {
        Ok(range) => Some(range),
        Err(err) => {
            tracing::debug!(error = %err, "failed to read xlsx worksheet range");
            None
        }
    }
}

fn read_first_sheet_xls(bytes: &[u8]) -> Option<Range<Data>> {
    let mut workbook = match Xls::new(Cursor::new(bytes)) {
        Ok(workbook) => workbook,
        Err(err) => {
            tracing::debug!(error = %err, "failed to open xls container");
            return None;
        }
    };
    match workbook.worksheet_range_at(0)? {
        Ok(range) => Some(range),
        Err(err) => {
            tracing::debug!(error = %err, "failed to read xls worksheet range");
            None
        }
    }
}

/// First row becomes the header, remaining rows become typed cells
fn table_from_range(range: &Range<Data>) -> Option<TabularDataset> {
    let mut rows = range.rows();

    let headers: Vec<String> = rows.next()?.iter().map(cell_text).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return None;
    }

    let mut dataset = TabularDataset::new(headers);
    for row in rows {
        let cells: Vec<CellValue> = row.iter().map(typed_cell).collect();
        if cells.iter().all(CellValue::is_null) {
            continue;
        }
        dataset.push_row(cells);
    }

    if dataset.row_count() == 0 {
        return None;
    }
    Some(dataset)
}

fn typed_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::String(value) => {
            if value.trim().is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(value.trim().to_string())
            }
        }
        other => CellValue::Text(other.to_string()),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        other => other.to_string(),
    }
}
