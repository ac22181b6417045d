//! FILENAME: core/comparison-engine/src/cascade.rs
//! Filter Cascade - narrows the table down to a single row per slot.
//!
//! Two stages of sequential equality filters:
//! 1. Global narrowing, applied once over the base table:
//!    Year -> Quarter -> Region.
//! 2. Per-slot narrowing over the global view:
//!    Country -> Brand -> Year -> Quarter.
//! A filter only applies when the user chose a concrete value AND the
//! role resolved to a column in this dataset. Each stage's option list
//! is computed from the view after all prior filters, so later
//! dropdowns always reflect earlier choices.

use crate::definition::{GlobalFilters, SlotSelection};
use crate::roles::{Role, RoleMap};
use engine::{CellValue, Table, TableView};

/// Applies one optional role filter. Unresolved roles and "any"
/// choices leave the view unchanged.
fn narrow_by_role<'a>(
    view: TableView<'a>,
    roles: &RoleMap,
    role: Role,
    choice: Option<&CellValue>,
) -> TableView<'a> {
    match (roles.get(role), choice) {
        (Some(col), Some(value)) => view.narrow(col, value),
        _ => view,
    }
}

/// The shared starting view for every slot: the base table narrowed by
/// the global Year, Quarter and Region choices, in that order.
pub fn global_view<'a>(
    table: &'a Table,
    roles: &RoleMap,
    global: &GlobalFilters,
) -> TableView<'a> {
    let view = TableView::all(table);
    let view = narrow_by_role(view, roles, Role::Year, global.year.as_ref());
    let view = narrow_by_role(view, roles, Role::Quarter, global.quarter.as_ref());
    narrow_by_role(view, roles, Role::Region, global.region.as_ref())
}

/// Candidate values for `role` given the current view. Empty when the
/// role did not resolve, so no filter is offered for it.
pub fn role_options(view: &TableView<'_>, roles: &RoleMap, role: Role) -> Vec<CellValue> {
    match roles.get(role) {
        Some(col) => view.unique_values(col),
        None => Vec::new(),
    }
}

/// Narrows the global view by one slot's selections, in the fixed
/// order Country -> Brand -> Year -> Quarter.
pub fn slot_view<'a>(
    base: &TableView<'a>,
    roles: &RoleMap,
    slot: &SlotSelection,
) -> TableView<'a> {
    let view = narrow_by_role(base.clone(), roles, Role::Country, slot.country.as_ref());
    let view = narrow_by_role(view, roles, Role::Brand, slot.brand.as_ref());
    let view = narrow_by_role(view, roles, Role::Year, slot.year.as_ref());
    narrow_by_role(view, roles, Role::Quarter, slot.quarter.as_ref())
}

/// Row selection policy: when more than one row survives the cascade,
/// the first row in original table order wins, deterministically and
/// silently. Zero rows means no match.
pub fn pick_first(view: &TableView<'_>) -> Option<usize> {
    view.first_row_index()
}

/// Resolves one slot to a row index into the base table, or None.
/// A slot with Country or Brand unset, or a dataset where either role
/// is unresolved, never matches.
pub fn resolve_slot(
    base: &TableView<'_>,
    roles: &RoleMap,
    slot: &SlotSelection,
) -> Option<usize> {
    if !slot.is_complete() {
        return None;
    }
    if roles.country.is_none() || roles.brand.is_none() {
        return None;
    }
    pick_first(&slot_view(base, roles, slot))
}
