//! FILENAME: core/comparison-engine/src/view.rs
//! Comparison View - the renderable output.
//!
//! One `Parameter` per displayed row, one `CompetitorColumn` per slot.
//! The assembler only extracts raw cell values; flag and logo
//! parameters carry an `Asset` kind so the rendering layer knows to
//! resolve their values against the asset store, but the values
//! themselves stay plain identifiers here.

use crate::roles::{ColumnIndex, Role, RoleMap};
use engine::{CellValue, Table};
use serde::{Deserialize, Serialize};

/// How a parameter's values are meant to be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Plain cell value.
    Value,
    /// The value names an image resource (flag or logo).
    Asset,
}

/// One row of the comparison: a source column plus its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub column: ColumnIndex,
    pub name: String,
    pub label: String,
    pub kind: ParameterKind,
}

/// One cell of the comparison. `Missing` is an explicit sentinel so an
/// absent value is never conflated with a real empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonCell {
    Value(CellValue),
    Missing,
}

impl ComparisonCell {
    pub fn is_missing(&self) -> bool {
        matches!(self, ComparisonCell::Missing)
    }

    /// Text shown for this cell; missing values render as "-".
    pub fn display(&self) -> String {
        match self {
            ComparisonCell::Value(v) => v.display_value(),
            ComparisonCell::Missing => "-".to_string(),
        }
    }
}

/// One competitor's column: its header label plus one cell per
/// parameter, in parameter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorColumn {
    pub label: String,
    pub cells: Vec<ComparisonCell>,
}

/// The assembled side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub parameters: Vec<Parameter>,
    pub competitors: Vec<CompetitorColumn>,
}

/// Builds the ordered parameter list for a table: the four display
/// roles first (Country, Country Flag, Brand, Brand logo, each only
/// if resolved), then every remaining column in original order. The
/// Year/Quarter/Region columns are selection machinery and are not
/// displayed. No column appears twice.
pub fn parameter_list(table: &Table, roles: &RoleMap) -> Vec<Parameter> {
    let mut parameters = Vec::new();

    let display_roles = [
        Role::Country,
        Role::CountryFlag,
        Role::Brand,
        Role::BrandLogo,
    ];
    for role in display_roles {
        if let Some(column) = roles.get(role) {
            parameters.push(Parameter {
                column,
                name: table.column_name(column).unwrap_or_default().to_string(),
                label: role.display_label().to_string(),
                kind: match role {
                    Role::CountryFlag | Role::BrandLogo => ParameterKind::Asset,
                    _ => ParameterKind::Value,
                },
            });
        }
    }

    let reserved = roles.resolved_columns();
    for (column, name) in table.columns().iter().enumerate() {
        if reserved.contains(&column) {
            continue;
        }
        parameters.push(Parameter {
            column,
            name: name.clone(),
            label: name.clone(),
            kind: ParameterKind::Value,
        });
    }

    parameters
}
