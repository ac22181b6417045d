//! FILENAME: app/src/commands.rs
//! The three CLI commands. Each runs one full interaction cycle
//! against the session's (cached) table and prints text or JSON.

use crate::assets::AssetStore;
use crate::cli::GlobalArgs;
use crate::render::{render_columns, render_comparison, render_option_list};
use crate::session::{build_definition, global_filters, parse_choice, Session};
use crate::{log_info, log_warn};
use comparison_engine::{
    assemble, build_export, global_view, resolve_slots, role_options, slot_view,
    ComparisonError, GlobalFilters, Role, SlotSelection,
};
use engine::{CellValue, TableView};
use serde_json::json;
use std::path::Path;

/// `columns`: show the semantic role resolution for the dataset.
pub fn cmd_columns(session: &mut Session, json_output: bool) -> Result<(), String> {
    let roles = session.roles().map_err(|e| e.to_string())?;
    let table = session.table().map_err(|e| e.to_string())?;

    if json_output {
        let payload = json!({
            "columns": table.columns(),
            "roles": roles,
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        print!("{}", render_columns(table, &roles));
    }
    Ok(())
}

fn display_all(values: &[CellValue]) -> Vec<String> {
    values.iter().map(CellValue::display_value).collect()
}

/// `options`: list the candidate values for every selection step,
/// each list computed from the table state after all prior filters.
pub fn cmd_options(
    session: &mut Session,
    global: &GlobalArgs,
    country: &Option<String>,
    brand: &Option<String>,
    year: &Option<String>,
    json_output: bool,
) -> Result<(), String> {
    let roles = session.roles().map_err(|e| e.to_string())?;
    let table = session.table().map_err(|e| e.to_string())?;

    // Global lists narrow successively: Year, then Quarter, then Region.
    let chosen_year = parse_choice(&global.global_year);
    let chosen_quarter = parse_choice(&global.global_quarter);

    let years = role_options(&TableView::all(table), &roles, Role::Year);

    let after_year = global_view(
        table,
        &roles,
        &GlobalFilters {
            year: chosen_year.clone(),
            ..Default::default()
        },
    );
    let quarters = role_options(&after_year, &roles, Role::Quarter);

    let after_quarter = global_view(
        table,
        &roles,
        &GlobalFilters {
            year: chosen_year,
            quarter: chosen_quarter,
            ..Default::default()
        },
    );
    let regions = role_options(&after_quarter, &roles, Role::Region);

    // Per-competitor lists start from the fully narrowed global view.
    let base = global_view(table, &roles, &global_filters(global));
    let countries = role_options(&base, &roles, Role::Country);

    let mut slot = SlotSelection {
        country: parse_choice(country),
        ..Default::default()
    };
    let brands = role_options(&slot_view(&base, &roles, &slot), &roles, Role::Brand);

    slot.brand = parse_choice(brand);
    let slot_years = role_options(&slot_view(&base, &roles, &slot), &roles, Role::Year);

    slot.year = parse_choice(year);
    let slot_quarters = role_options(&slot_view(&base, &roles, &slot), &roles, Role::Quarter);

    if json_output {
        let payload = json!({
            "global": {
                "year": display_all(&years),
                "quarter": display_all(&quarters),
                "region": display_all(&regions),
            },
            "competitor": {
                "country": display_all(&countries),
                "brand": display_all(&brands),
                "year": display_all(&slot_years),
                "quarter": display_all(&slot_quarters),
            },
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        print!("{}", render_option_list("Global Year", &years));
        print!("{}", render_option_list("Global Quarter", &quarters));
        print!("{}", render_option_list("Global Region", &regions));
        print!("{}", render_option_list("Country", &countries));
        print!("{}", render_option_list("Brand", &brands));
        print!("{}", render_option_list("Year", &slot_years));
        print!("{}", render_option_list("Quarter", &slot_quarters));
    }
    Ok(())
}

/// `compare`: resolve every slot, assemble, render, and export.
pub fn cmd_compare(
    session: &mut Session,
    assets: &AssetStore,
    global: &GlobalArgs,
    picks: &[String],
    export: &Option<std::path::PathBuf>,
    export_xlsx: &Option<std::path::PathBuf>,
    json_output: bool,
) -> Result<(), String> {
    let roles = session.roles().map_err(|e| e.to_string())?;
    let table = session.table().map_err(|e| e.to_string())?;
    log_info!(
        "CMD",
        "compare: {} rows, {} slots",
        table.row_count(),
        picks.len()
    );

    let definition = build_definition(global, picks)?;
    let slots = resolve_slots(table, &roles, &definition);

    let view = match assemble(table, &roles, &slots) {
        Ok(view) => view,
        Err(err @ ComparisonError::InsufficientSelections { .. }) => {
            // Recoverable: show the warning, render nothing, export
            // nothing. The user adjusts the selections and retries.
            log_warn!("CMD", "{}", err);
            println!("Warning: {}", err);
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    if json_output {
        let payload = json!({
            "comparison": view,
            "matched": slots.iter().filter(|s| s.is_matched()).count(),
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        print!("{}", render_comparison(&view, assets));
    }

    if export.is_some() || export_xlsx.is_some() {
        let record = build_export(table, &slots);
        if let Some(path) = export {
            write_export(path, |p| {
                persistence::write_table_csv(&record.headers, &record.rows(), p)
            })?;
        }
        if let Some(path) = export_xlsx {
            write_export(path, |p| {
                persistence::write_table_xlsx(&record.headers, &record.rows(), p)
            })?;
        }
    }

    Ok(())
}

fn write_export<F>(path: &Path, write: F) -> Result<(), String>
where
    F: FnOnce(&Path) -> Result<(), persistence::PersistenceError>,
{
    write(path).map_err(|e| e.to_string())?;
    log_info!("EXPORT", "comparison written to {}", path.display());
    println!("Comparison exported to {}", path.display());
    Ok(())
}
