//! FILENAME: core/engine/src/view.rs
//! PURPOSE: Non-mutating narrowed views over a loaded table.
//! CONTEXT: Every filter stage takes the previous stage's view and
//! returns a new one, so cascades stay reproducible and the base table
//! is never mutated in place. A view is just the base table plus the
//! original row indices that survived narrowing, in table order.

use crate::cell::CellValue;
use crate::table::Table;

/// A borrowed, ordered subset of a table's rows.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a Table,
    indices: Vec<usize>,
}

impl<'a> TableView<'a> {
    /// A view over every row of the table, in original order.
    pub fn all(table: &'a Table) -> Self {
        TableView {
            table,
            indices: (0..table.row_count()).collect(),
        }
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Original table indices of the rows in this view.
    pub fn row_indices(&self) -> &[usize] {
        &self.indices
    }

    /// The first surviving row in original table order, if any.
    pub fn first_row_index(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// Returns a new view keeping only rows whose cell in `col` equals
    /// `value`. Row order is preserved.
    pub fn narrow(&self, col: usize, value: &CellValue) -> TableView<'a> {
        let indices = self
            .indices
            .iter()
            .copied()
            .filter(|&row| self.table.value(row, col) == Some(value))
            .collect();
        TableView {
            table: self.table,
            indices,
        }
    }

    /// Distinct non-empty values present in `col` among this view's
    /// rows, sorted. This is what filter dropdowns offer, so it always
    /// reflects every narrowing applied so far.
    pub fn unique_values(&self, col: usize) -> Vec<CellValue> {
        let mut values: Vec<CellValue> = Vec::new();
        for &row in &self.indices {
            if let Some(value) = self.table.value(row, col) {
                if !value.is_empty() && !values.contains(value) {
                    values.push(value.clone());
                }
            }
        }
        values.sort_by(|a, b| a.compare(b));
        values
    }
}
