//! FILENAME: core/comparison-engine/src/export.rs
//! Export record builder: flattens the matched slots into one wide
//! record for download.
//!
//! The export uses each competitor's native column set (every table
//! column, original order), not the display parameter list. Field
//! names are prefixed with the competitor's label so concatenating
//! slots side by side never collides; slots whose labels would repeat
//! fall back to generated "Competitor_N" labels, and unmatched slots
//! contribute no fields at all.

use crate::engine::ResolvedSlot;
use engine::{CellValue, Table};
use serde::{Deserialize, Serialize};

/// Default name of the downloaded comparison file.
pub const EXPORT_FILE_NAME: &str = "market_comparison.csv";

/// The flattened comparison: one header per prefixed field, one value
/// row concatenating every matched competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExport {
    pub headers: Vec<String>,
    pub values: Vec<CellValue>,
}

impl ComparisonExport {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// The single data row, shaped for the persistence writers.
    pub fn rows(&self) -> Vec<Vec<CellValue>> {
        vec![self.values.clone()]
    }
}

/// Export label for a slot: the chosen brand, else "Competitor_N".
fn base_label(slot: &ResolvedSlot, index: usize) -> String {
    match &slot.selection.brand {
        Some(brand) => brand.display_value(),
        None => format!("Competitor_{}", index + 1),
    }
}

/// Assigns one unique label per slot. Any label shared by two slots is
/// replaced by the generated "Competitor_N" form, which is unique by
/// construction.
fn export_labels(slots: &[ResolvedSlot]) -> Vec<String> {
    let bases: Vec<String> = slots
        .iter()
        .enumerate()
        .map(|(i, s)| base_label(s, i))
        .collect();

    bases
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let duplicated = bases.iter().filter(|b| *b == label).count() > 1;
            if duplicated {
                format!("Competitor_{}", i + 1)
            } else {
                label.clone()
            }
        })
        .collect()
}

/// Builds the flat export record. Deterministic given the same slots.
pub fn build_export(table: &Table, slots: &[ResolvedSlot]) -> ComparisonExport {
    let labels = export_labels(slots);

    let mut headers = Vec::new();
    let mut values = Vec::new();

    for (slot, label) in slots.iter().zip(&labels) {
        let Some(row) = slot.row else {
            continue;
        };
        for (col, name) in table.columns().iter().enumerate() {
            headers.push(format!("{} - {}", label, name));
            values.push(
                table
                    .value(row, col)
                    .cloned()
                    .unwrap_or(CellValue::Empty),
            );
        }
    }

    ComparisonExport { headers, values }
}
