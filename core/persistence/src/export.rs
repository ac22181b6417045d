// FILENAME: core/persistence/src/export.rs
// Serializes a flat record table (headers plus rows of typed cells) to
// the supported output formats. The comparison layer builds the record;
// this module only writes it out.

use crate::PersistenceError;
use engine::CellValue;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::Path;

/// Writes headers plus data rows as delimited text to `path`.
pub fn write_table_csv(
    headers: &[String],
    rows: &[Vec<CellValue>],
    path: &Path,
) -> Result<(), PersistenceError> {
    let mut writer = csv::Writer::from_path(path)?;
    write_csv_records(&mut writer, headers, rows)?;
    writer.flush()?;
    Ok(())
}

/// Renders headers plus data rows as delimited text in memory, for
/// download-style delivery.
pub fn table_csv_bytes(
    headers: &[String],
    rows: &[Vec<CellValue>],
) -> Result<Vec<u8>, PersistenceError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_csv_records(&mut writer, headers, rows)?;
    writer
        .into_inner()
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}

fn write_csv_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    headers: &[String],
    rows: &[Vec<CellValue>],
) -> Result<(), PersistenceError> {
    writer.write_record(headers)?;
    for row in rows {
        let fields: Vec<String> = row.iter().map(CellValue::display_value).collect();
        writer.write_record(&fields)?;
    }
    Ok(())
}

/// Writes headers plus data rows as a single-sheet XLSX workbook,
/// preserving cell types.
pub fn write_table_xlsx(
    headers: &[String],
    rows: &[Vec<CellValue>],
    path: &Path,
) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    for (r, row) in rows.iter().enumerate() {
        let xlsx_row = (r + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            match value {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    worksheet.write_number(xlsx_row, col as u16, *n)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(xlsx_row, col as u16, s)?;
                }
                CellValue::Boolean(b) => {
                    worksheet.write_boolean(xlsx_row, col as u16, *b)?;
                }
            }
        }
    }

    xlsx.save(path)?;
    Ok(())
}
