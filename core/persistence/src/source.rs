// FILENAME: core/persistence/src/source.rs

use crate::{load_csv, load_xlsx, PersistenceError};
use engine::Table;
use std::path::{Path, PathBuf};

/// The pair of files a dataset may live in. Loading tries the
/// spreadsheet format first and falls back to delimited text; only
/// when both fail is the load fatal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableSource {
    pub xlsx_path: PathBuf,
    pub csv_path: PathBuf,
}

impl TableSource {
    pub fn new(xlsx_path: PathBuf, csv_path: PathBuf) -> Self {
        TableSource {
            xlsx_path,
            csv_path,
        }
    }

    /// Builds the source pair from a single path by swapping its
    /// extension, so `data.csv` also looks for `data.xlsx` and vice
    /// versa.
    pub fn from_path(path: &Path) -> Self {
        TableSource {
            xlsx_path: path.with_extension("xlsx"),
            csv_path: path.with_extension("csv"),
        }
    }

    /// Loads the table: XLSX first, then CSV. Returns
    /// `NoReadableSource` naming both expected files if neither loads.
    /// No partial table is ever produced.
    pub fn load(&self) -> Result<Table, PersistenceError> {
        if let Ok(table) = load_xlsx(&self.xlsx_path) {
            return Ok(table);
        }
        match load_csv(&self.csv_path) {
            Ok(table) => Ok(table),
            Err(_) => Err(PersistenceError::NoReadableSource {
                xlsx: self.xlsx_path.display().to_string(),
                csv: self.csv_path.display().to_string(),
            }),
        }
    }
}
