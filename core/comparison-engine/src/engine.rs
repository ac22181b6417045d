//! FILENAME: core/comparison-engine/src/engine.rs
//! Comparison Engine - resolves slots and assembles the view.
//!
//! Takes a ComparisonDefinition (configuration) and a Table (data) and
//! produces a ComparisonView (columns ready for rendering). Pure:
//! re-running on the same inputs yields identical output.

use crate::cascade::{global_view, resolve_slot};
use crate::definition::{ComparisonDefinition, SlotSelection, MIN_SLOTS};
use crate::error::ComparisonError;
use crate::roles::RoleMap;
use crate::view::{
    parameter_list, ComparisonCell, ComparisonView, CompetitorColumn, Parameter,
};
use engine::Table;

/// One slot after cascade resolution: the user's selection plus the
/// matched base-table row, if any.
#[derive(Debug, Clone)]
pub struct ResolvedSlot {
    pub selection: SlotSelection,
    pub row: Option<usize>,
}

impl ResolvedSlot {
    pub fn is_matched(&self) -> bool {
        self.row.is_some()
    }
}

/// Runs the full cascade for every slot of the definition.
pub fn resolve_slots(
    table: &Table,
    roles: &RoleMap,
    definition: &ComparisonDefinition,
) -> Vec<ResolvedSlot> {
    let base = global_view(table, roles, &definition.global);
    definition
        .slots
        .iter()
        .map(|slot| ResolvedSlot {
            selection: slot.clone(),
            row: resolve_slot(&base, roles, slot),
        })
        .collect()
}

/// Display label for a slot: the chosen brand, or "Competitor N" when
/// no brand was chosen (1-based).
pub fn slot_label(slot: &ResolvedSlot, index: usize) -> String {
    match &slot.selection.brand {
        Some(brand) => brand.display_value(),
        None => format!("Competitor {}", index + 1),
    }
}

/// Assembles the comparison. Every slot gets a column (unmatched slots
/// show all-missing cells), but fewer than two matched slots is an
/// error: the caller shows the warning and renders nothing.
pub fn assemble(
    table: &Table,
    roles: &RoleMap,
    slots: &[ResolvedSlot],
) -> Result<ComparisonView, ComparisonError> {
    let matched = slots.iter().filter(|s| s.is_matched()).count();
    if matched < MIN_SLOTS {
        return Err(ComparisonError::InsufficientSelections { matched });
    }

    let parameters = parameter_list(table, roles);

    let competitors = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| CompetitorColumn {
            label: slot_label(slot, i),
            cells: parameters
                .iter()
                .map(|p| cell_for(table, slot, p))
                .collect(),
        })
        .collect();

    Ok(ComparisonView {
        parameters,
        competitors,
    })
}

/// The cell value from the slot's row for one parameter: present and
/// non-empty, or the explicit missing sentinel.
fn cell_for(table: &Table, slot: &ResolvedSlot, parameter: &Parameter) -> ComparisonCell {
    let Some(row) = slot.row else {
        return ComparisonCell::Missing;
    };
    match table.value(row, parameter.column) {
        Some(value) if !value.is_empty() => ComparisonCell::Value(value.clone()),
        _ => ComparisonCell::Missing,
    }
}
