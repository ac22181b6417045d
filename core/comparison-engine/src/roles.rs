//! FILENAME: core/comparison-engine/src/roles.rs
//! Column Resolver: maps semantic roles onto whatever column names the
//! loaded dataset actually uses.
//!
//! Each role resolves independently, by first match against its fixed
//! list of accepted spellings. A role with no matching column is simply
//! absent for this dataset: every behavior depending on it (a filter, a
//! flag image, a display row) is skipped, never an error.

use engine::Table;
use serde::{Deserialize, Serialize};

/// Index into the table's columns (0-based).
pub type ColumnIndex = usize;

/// A semantic meaning, independent of the literal column name a given
/// dataset uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Year,
    Quarter,
    Region,
    Country,
    CountryFlag,
    Brand,
    BrandLogo,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Year,
        Role::Quarter,
        Role::Region,
        Role::Country,
        Role::CountryFlag,
        Role::Brand,
        Role::BrandLogo,
    ];

    /// Accepted column spellings, in priority order. The first one
    /// present in the dataset wins.
    pub fn accepted_names(self) -> &'static [&'static str] {
        match self {
            Role::Year => &["Year", "year"],
            Role::Quarter => &["Quarter", "quarter"],
            Role::Region => &["Region", "region"],
            Role::Country => &["Country", "country"],
            Role::CountryFlag => &[
                "Country Flag",
                "Country_Flag",
                "country_flag",
                "CountryFlag",
            ],
            Role::Brand => &["Brand name", "Brand", "brand name", "brand"],
            Role::BrandLogo => &["Brand logo", "Brand_logo", "brand_logo", "BrandLogo"],
        }
    }

    /// Canonical label shown in the comparison table.
    pub fn display_label(self) -> &'static str {
        match self {
            Role::Year => "Year",
            Role::Quarter => "Quarter",
            Role::Region => "Region",
            Role::Country => "Country",
            Role::CountryFlag => "Country Flag",
            Role::Brand => "Brand",
            Role::BrandLogo => "Brand logo",
        }
    }
}

/// The role → column mapping for one loaded table, computed once at
/// load time and consumed by index thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleMap {
    pub year: Option<ColumnIndex>,
    pub quarter: Option<ColumnIndex>,
    pub region: Option<ColumnIndex>,
    pub country: Option<ColumnIndex>,
    pub country_flag: Option<ColumnIndex>,
    pub brand: Option<ColumnIndex>,
    pub brand_logo: Option<ColumnIndex>,
}

impl RoleMap {
    /// Resolves every role against the given column names. Pure and
    /// deterministic: the same column set always yields the same map.
    pub fn resolve(columns: &[String]) -> RoleMap {
        let find = |role: Role| {
            role.accepted_names()
                .iter()
                .find_map(|name| columns.iter().position(|c| c == name))
        };

        RoleMap {
            year: find(Role::Year),
            quarter: find(Role::Quarter),
            region: find(Role::Region),
            country: find(Role::Country),
            country_flag: find(Role::CountryFlag),
            brand: find(Role::Brand),
            brand_logo: find(Role::BrandLogo),
        }
    }

    pub fn resolve_table(table: &Table) -> RoleMap {
        Self::resolve(table.columns())
    }

    pub fn get(&self, role: Role) -> Option<ColumnIndex> {
        match role {
            Role::Year => self.year,
            Role::Quarter => self.quarter,
            Role::Region => self.region,
            Role::Country => self.country,
            Role::CountryFlag => self.country_flag,
            Role::Brand => self.brand,
            Role::BrandLogo => self.brand_logo,
        }
    }

    /// Column indices of every resolved role, in `Role::ALL` order.
    pub fn resolved_columns(&self) -> Vec<ColumnIndex> {
        Role::ALL.iter().filter_map(|&r| self.get(r)).collect()
    }
}
