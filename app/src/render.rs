//! FILENAME: app/src/render.rs
//! Text rendering of the comparison view and the option lists.

use crate::assets::AssetStore;
use comparison_engine::{
    ComparisonCell, ComparisonView, Parameter, ParameterKind, Role, RoleMap,
};
use engine::{CellValue, Table};

/// Display text for one comparison cell. Asset identifiers go through
/// the asset store; everything else renders its raw value, with
/// missing cells as "-".
fn cell_text(parameter: &Parameter, cell: &ComparisonCell, assets: &AssetStore) -> String {
    match (parameter.kind, cell) {
        (ParameterKind::Asset, ComparisonCell::Value(value)) => {
            assets.describe(&value.display_value())
        }
        _ => cell.display(),
    }
}

/// Renders the assembled comparison as an aligned text table:
/// one parameter per row, one column per competitor.
pub fn render_comparison(view: &ComparisonView, assets: &AssetStore) -> String {
    let mut header: Vec<String> = vec!["Parameter".to_string()];
    header.extend(view.competitors.iter().map(|c| c.label.clone()));

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(view.parameters.len());
    for (p_idx, parameter) in view.parameters.iter().enumerate() {
        let mut row = vec![parameter.label.clone()];
        for competitor in &view.competitors {
            row.push(cell_text(parameter, &competitor.cells[p_idx], assets));
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (i, text) in row.iter().enumerate() {
            widths[i] = widths[i].max(text.len());
        }
    }

    let format_row = |row: &[String]| {
        row.iter()
            .enumerate()
            .map(|(i, text)| format!("{:<width$}", text, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let mut out = String::new();
    out.push_str(&format_row(&header));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

/// Renders the role -> column resolution for the loaded table.
pub fn render_columns(table: &Table, roles: &RoleMap) -> String {
    let mut out = String::new();
    for role in Role::ALL {
        let resolved = roles
            .get(role)
            .and_then(|col| table.column_name(col))
            .unwrap_or("(absent)");
        out.push_str(&format!("{:<13} {}\n", role.display_label(), resolved));
    }

    let reserved = roles.resolved_columns();
    let remaining: Vec<&str> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(i, _)| !reserved.contains(i))
        .map(|(_, name)| name.as_str())
        .collect();
    if !remaining.is_empty() {
        out.push_str(&format!("Other columns: {}\n", remaining.join(", ")));
    }
    out
}

/// Renders one option list as "Label: v1, v2, ..." (or "(none)").
pub fn render_option_list(label: &str, values: &[CellValue]) -> String {
    if values.is_empty() {
        return format!("{}: (none)\n", label);
    }
    let rendered: Vec<String> = values.iter().map(CellValue::display_value).collect();
    format!("{}: {}\n", label, rendered.join(", "))
}
