//! FILENAME: tests/test_session.rs
//! Integration tests for the session layer: source loading, caching
//! and selector parsing.

mod common;

use app_lib::{build_definition, parse_selector, GlobalArgs, Session};
use common::{num, text, MarketFixture};
use persistence::{PersistenceError, TableSource};

// ============================================================================
// SELECTOR PARSING
// ============================================================================

#[test]
fn test_country_brand_selector() {
    let slot = parse_selector("USA/Acme").unwrap();
    assert_eq!(slot.country, Some(text("USA")));
    assert_eq!(slot.brand, Some(text("Acme")));
    assert_eq!(slot.year, None);
    assert_eq!(slot.quarter, None);
}

#[test]
fn test_full_selector_with_year_and_quarter() {
    let slot = parse_selector("USA/Acme/2024/Q2").unwrap();
    assert_eq!(slot.year, Some(num(2024.0)));
    assert_eq!(slot.quarter, Some(text("Q2")));
}

#[test]
fn test_empty_segments_stay_unset() {
    let slot = parse_selector("USA//2024").unwrap();
    assert_eq!(slot.country, Some(text("USA")));
    assert_eq!(slot.brand, None);
    assert_eq!(slot.year, Some(num(2024.0)));
}

#[test]
fn test_malformed_selectors_are_rejected() {
    assert!(parse_selector("USA").is_err());
    assert!(parse_selector("USA/Acme/2024/Q1/extra").is_err());
}

#[test]
fn test_definition_enforces_slot_bounds() {
    let args = GlobalArgs::default();
    let one = vec!["USA/Acme".to_string()];
    assert!(build_definition(&args, &one).is_err());

    let two = vec!["USA/Acme".to_string(), "USA/Globex".to_string()];
    assert!(build_definition(&args, &two).is_ok());
}

// ============================================================================
// LOADING & CACHING
// ============================================================================

#[test]
fn test_session_loads_fixture_through_csv_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = MarketFixture::write_csv(dir.path());

    // The source pair points at a missing .xlsx; loading falls back.
    let mut session = Session::new(TableSource::from_path(&csv_path));
    let table = session.table().unwrap();

    assert_eq!(table.row_count(), MarketFixture::data().len());
    assert_eq!(table.columns()[3], "Country");
}

#[test]
fn test_session_caches_until_reload() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = MarketFixture::write_csv(dir.path());

    let mut session = Session::new(TableSource::from_path(&csv_path));
    let initial_rows = session.table().unwrap().row_count();

    // Shrink the file on disk; the cached table must survive.
    std::fs::write(&csv_path, "Country,Brand name\nUSA,Acme\n").unwrap();
    assert_eq!(session.table().unwrap().row_count(), initial_rows);

    // An explicit reload picks up the new content.
    session.reload();
    assert_eq!(session.table().unwrap().row_count(), 1);
}

#[test]
fn test_missing_source_is_fatal_and_names_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(TableSource::from_path(&dir.path().join("absent.xlsx")));

    match session.table() {
        Err(PersistenceError::NoReadableSource { xlsx, csv }) => {
            assert!(xlsx.contains("absent.xlsx"));
            assert!(csv.contains("absent.csv"));
        }
        other => panic!("expected NoReadableSource, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_roles_resolve_on_the_loaded_table() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = MarketFixture::write_csv(dir.path());

    let mut session = Session::new(TableSource::from_path(&csv_path));
    let roles = session.roles().unwrap();

    assert_eq!(roles.country, Some(3));
    assert_eq!(roles.brand, Some(5));
}
