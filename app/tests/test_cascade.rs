//! FILENAME: tests/test_cascade.rs
//! Integration tests for the filter cascade.

mod common;

use common::{num, slot, text, MarketFixture};
use comparison_engine::{
    global_view, resolve_slot, role_options, slot_view, GlobalFilters, Role, RoleMap,
    SlotSelection,
};
use engine::TableView;

// ============================================================================
// GLOBAL NARROWING
// ============================================================================

#[test]
fn test_global_year_narrows_country_options() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);

    let global = GlobalFilters {
        year: Some(num(2023.0)),
        ..Default::default()
    };
    let base = global_view(&table, &roles, &global);

    // Only the 2023 row survives, so only Germany is offered.
    assert_eq!(
        role_options(&base, &roles, Role::Country),
        vec![text("Germany")]
    );
}

#[test]
fn test_later_global_lists_reflect_earlier_choices() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);

    let unfiltered = TableView::all(&table);
    let all_regions = role_options(&unfiltered, &roles, Role::Region);
    assert_eq!(all_regions.len(), 3);

    let after_year = global_view(
        &table,
        &roles,
        &GlobalFilters {
            year: Some(num(2023.0)),
            ..Default::default()
        },
    );
    let narrowed_regions = role_options(&after_year, &roles, Role::Region);

    assert_eq!(narrowed_regions, vec![text("Europe")]);
    assert!(narrowed_regions.iter().all(|r| all_regions.contains(r)));
}

// ============================================================================
// PER-SLOT NARROWING
// ============================================================================

#[test]
fn test_brand_options_narrow_after_country() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);
    let base = TableView::all(&table);

    let all_brands = role_options(&base, &roles, Role::Brand);
    assert_eq!(all_brands.len(), 4);

    let usa = slot_view(
        &base,
        &roles,
        &SlotSelection {
            country: Some(text("USA")),
            ..Default::default()
        },
    );
    let usa_brands = role_options(&usa, &roles, Role::Brand);

    assert_eq!(usa_brands, vec![text("Acme"), text("Globex")]);
    // Narrowing monotonicity: every narrowed option was offered before.
    assert!(usa_brands.iter().all(|b| all_brands.contains(b)));
}

#[test]
fn test_quarter_options_narrow_after_country_brand_year() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);
    let base = TableView::all(&table);

    let selection = SlotSelection {
        country: Some(text("USA")),
        brand: Some(text("Acme")),
        year: Some(num(2024.0)),
        ..Default::default()
    };
    let narrowed = slot_view(&base, &roles, &selection);

    assert_eq!(
        role_options(&narrowed, &roles, Role::Quarter),
        vec![text("Q1"), text("Q2")]
    );
}

// ============================================================================
// ROW RESOLUTION
// ============================================================================

#[test]
fn test_unique_pair_resolves_to_its_exact_row() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);
    let base = TableView::all(&table);

    assert_eq!(resolve_slot(&base, &roles, &slot("USA", "Globex")), Some(1));
    assert_eq!(
        resolve_slot(&base, &roles, &slot("Germany", "Initech")),
        Some(4)
    );
}

#[test]
fn test_ambiguous_pair_resolves_to_first_row_in_table_order() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);
    let base = TableView::all(&table);

    // (USA, Acme) matches rows 0 and 2; without further narrowing the
    // first row in original table order wins, deterministically.
    assert_eq!(resolve_slot(&base, &roles, &slot("USA", "Acme")), Some(0));
    assert_eq!(resolve_slot(&base, &roles, &slot("USA", "Acme")), Some(0));
}

#[test]
fn test_quarter_choice_disambiguates() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);
    let base = TableView::all(&table);

    let mut selection = slot("USA", "Acme");
    selection.quarter = Some(text("Q2"));
    assert_eq!(resolve_slot(&base, &roles, &selection), Some(2));
}

#[test]
fn test_incomplete_slots_never_match() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);
    let base = TableView::all(&table);

    let country_only = SlotSelection {
        country: Some(text("USA")),
        ..Default::default()
    };
    let brand_only = SlotSelection {
        brand: Some(text("Acme")),
        ..Default::default()
    };

    assert_eq!(resolve_slot(&base, &roles, &country_only), None);
    assert_eq!(resolve_slot(&base, &roles, &brand_only), None);
    assert_eq!(resolve_slot(&base, &roles, &SlotSelection::default()), None);
}

#[test]
fn test_no_surviving_rows_is_no_match() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);
    let base = TableView::all(&table);

    // Umbrella only exists in Japan.
    assert_eq!(resolve_slot(&base, &roles, &slot("USA", "Umbrella")), None);
}

#[test]
fn test_cascade_is_idempotent() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);

    let global = GlobalFilters {
        year: Some(num(2024.0)),
        region: Some(text("North America")),
        ..Default::default()
    };
    let selection = slot("USA", "Acme");

    let first = resolve_slot(&global_view(&table, &roles, &global), &roles, &selection);
    let second = resolve_slot(&global_view(&table, &roles, &global), &roles, &selection);

    assert_eq!(first, second);
    assert_eq!(first, Some(0));
}

#[test]
fn test_global_filter_can_exclude_a_slot_entirely() {
    let table = MarketFixture::table();
    let roles = RoleMap::resolve_table(&table);

    let global = GlobalFilters {
        region: Some(text("Europe")),
        ..Default::default()
    };
    let base = global_view(&table, &roles, &global);

    // USA rows are outside the Europe universe.
    assert_eq!(resolve_slot(&base, &roles, &slot("USA", "Acme")), None);
    assert_eq!(
        resolve_slot(&base, &roles, &slot("Germany", "Acme")),
        Some(3)
    );
}
