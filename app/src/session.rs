//! FILENAME: app/src/session.rs
//! One interaction cycle: load (or hit the cache), resolve columns,
//! run the cascade, assemble. The table is immutable for the duration
//! of a cycle; a fresh cycle may reuse the cached table until the
//! source is explicitly invalidated.

use crate::cli::GlobalArgs;
use comparison_engine::{
    ComparisonDefinition, GlobalFilters, RoleMap, SlotSelection,
};
use engine::{CellValue, Table};
use persistence::{PersistenceError, TableCache, TableSource};

pub struct Session {
    source: TableSource,
    cache: TableCache,
}

impl Session {
    pub fn new(source: TableSource) -> Self {
        Session {
            source,
            cache: TableCache::new(),
        }
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    /// The loaded table for this source, cached across cycles.
    pub fn table(&mut self) -> Result<&Table, PersistenceError> {
        self.cache.get_or_load(&self.source)
    }

    /// Drops the cached table so the next cycle reloads from disk.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.source);
    }

    /// Role resolution for the loaded table.
    pub fn roles(&mut self) -> Result<RoleMap, PersistenceError> {
        Ok(RoleMap::resolve_table(self.table()?))
    }
}

/// Parses an optional CLI choice into a typed filter value. "any" (in
/// any case) and empty mean no filter.
pub fn parse_choice(raw: &Option<String>) -> Option<CellValue> {
    let raw = raw.as_deref()?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("any") {
        return None;
    }
    Some(CellValue::parse(raw))
}

/// Builds the shared global filters from the CLI flags.
pub fn global_filters(args: &GlobalArgs) -> GlobalFilters {
    GlobalFilters {
        year: parse_choice(&args.global_year),
        quarter: parse_choice(&args.global_quarter),
        region: parse_choice(&args.global_region),
    }
}

/// Parses one "Country/Brand[/Year[/Quarter]]" selector into a slot
/// selection. Empty segments leave the corresponding choice unset.
pub fn parse_selector(selector: &str) -> Result<SlotSelection, String> {
    let parts: Vec<&str> = selector.split('/').collect();
    if parts.len() < 2 || parts.len() > 4 {
        return Err(format!(
            "invalid selector '{}': expected Country/Brand[/Year[/Quarter]]",
            selector
        ));
    }

    let segment = |idx: usize| -> Option<CellValue> {
        parts
            .get(idx)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(CellValue::parse)
    };

    Ok(SlotSelection {
        country: segment(0),
        brand: segment(1),
        year: segment(2),
        quarter: segment(3),
    })
}

/// Builds the full comparison definition from the CLI arguments.
pub fn build_definition(
    args: &GlobalArgs,
    picks: &[String],
) -> Result<ComparisonDefinition, String> {
    let slots = picks
        .iter()
        .map(|p| parse_selector(p))
        .collect::<Result<Vec<_>, _>>()?;

    let definition = ComparisonDefinition {
        global: global_filters(args),
        slots,
    };
    definition.validate().map_err(|e| e.to_string())?;
    Ok(definition)
}
