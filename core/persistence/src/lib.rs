//! FILENAME: core/persistence/src/lib.rs
//! Persistence module: the table source boundary.
//!
//! Loads the market dataset from XLSX (preferred) or delimited text
//! (fallback), caches loaded tables per source, and writes exported
//! comparison records back out as CSV or XLSX.

mod cache;
mod csv_reader;
mod error;
mod export;
mod source;
mod xlsx_reader;

pub use cache::TableCache;
pub use csv_reader::{detect_delimiter, load_csv, parse_content};
pub use error::PersistenceError;
pub use export::{table_csv_bytes, write_table_csv, write_table_xlsx};
pub use source::TableSource;
pub use xlsx_reader::load_xlsx;

/// Validates a header row before a table is built from it. Column
/// names must be present and unique within a table.
fn check_headers(headers: &[String]) -> Result<(), PersistenceError> {
    if headers.is_empty() {
        return Err(PersistenceError::InvalidFormat(
            "Header row has no columns".to_string(),
        ));
    }
    for (i, name) in headers.iter().enumerate() {
        if name.is_empty() {
            return Err(PersistenceError::InvalidFormat(format!(
                "Header column {} is empty",
                i + 1
            )));
        }
        if headers[..i].contains(name) {
            return Err(PersistenceError::InvalidFormat(format!(
                "Duplicate column name: {}",
                name
            )));
        }
    }
    Ok(())
}
