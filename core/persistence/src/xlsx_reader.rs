// FILENAME: core/persistence/src/xlsx_reader.rs

use crate::{check_headers, PersistenceError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use engine::{CellValue, Table};
use std::path::Path;

/// Loads the first worksheet of an XLSX file as a table. The first row
/// is the header row; every following row becomes a data row.
pub fn load_xlsx(path: &Path) -> Result<Table, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let first_sheet = sheet_names.first().ok_or_else(|| {
        PersistenceError::InvalidFormat("Workbook contains no sheets".to_string())
    })?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();

    let header_row = rows.next().ok_or_else(|| {
        PersistenceError::InvalidFormat(format!("Sheet '{}' is empty", first_sheet))
    })?;

    let headers: Vec<String> = header_row.iter().map(header_text).collect();
    check_headers(&headers)?;

    let mut table = Table::new(headers);

    for row in rows {
        let cells = row.iter().map(convert_cell).collect();
        table.push_row(cells);
    }

    Ok(table)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        other => convert_cell(other).display_value(),
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        // Error cells surface downstream as the missing marker
        Data::Error(_) => CellValue::Empty,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
