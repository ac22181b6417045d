// FILENAME: core/persistence/src/csv_reader.rs
// Parse delimited text files with delimiter detection and cell type
// inference.

use crate::{check_headers, PersistenceError};
use csv::{ReaderBuilder, Trim};
use engine::{CellValue, Table};
use std::fs;
use std::path::Path;

/// Loads a delimited text file as a table. The delimiter is detected
/// from the content; the first record is the header row.
pub fn load_csv(path: &Path) -> Result<Table, PersistenceError> {
    let bytes = fs::read(path)?;
    // Non-UTF-8 input degrades to lossy decoding rather than failing
    let content = String::from_utf8_lossy(&bytes);
    parse_content(&content)
}

/// Parses delimited text content into a table.
pub fn parse_content(content: &str) -> Result<Table, PersistenceError> {
    let delimiter = detect_delimiter(content);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true) // Allow rows with different lengths
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    check_headers(&headers)?;

    let mut table = Table::new(headers);

    for result in reader.records() {
        let record = result?;
        let cells = record.iter().map(CellValue::parse).collect();
        table.push_row(cells);
    }

    Ok(table)
}

/// Detects the delimiter (comma, semicolon, tab, pipe) by scoring how
/// consistently each candidate splits the first few lines.
pub fn detect_delimiter(content: &str) -> u8 {
    let candidates = [b',', b';', b'\t', b'|'];
    let sample: Vec<&str> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for &delimiter in &candidates {
        let counts: Vec<usize> = sample
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count())
            .collect();

        let min = counts.iter().copied().min().unwrap_or(0);
        // Only a delimiter present on every sampled line is a candidate;
        // score by the guaranteed field count.
        if min > 0 && min > best_score {
            best_score = min;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}
