//! FILENAME: core/comparison-engine/src/definition.rs
//! Comparison Definition - the serializable configuration.
//!
//! This module contains the types that DESCRIBE a comparison: the
//! shared global filters and the per-slot selections. These structures
//! are immutable snapshots of user intent; the engine re-derives every
//! resolved row from them on each interaction.

use crate::error::ComparisonError;
use engine::CellValue;
use serde::{Deserialize, Serialize};

/// Minimum number of competitor slots in a comparison.
pub const MIN_SLOTS: usize = 2;

/// Maximum number of competitor slots in a comparison.
pub const MAX_SLOTS: usize = 10;

/// Optional narrowing applied once, shared by every slot.
/// Applied in declaration order: Year, then Quarter, then Region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalFilters {
    pub year: Option<CellValue>,
    pub quarter: Option<CellValue>,
    pub region: Option<CellValue>,
}

/// One competitor slot's chosen values. Country and Brand must both be
/// set for the slot to resolve to a row; Year and Quarter further
/// narrow when the dataset has multiple rows per brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub country: Option<CellValue>,
    pub brand: Option<CellValue>,
    pub year: Option<CellValue>,
    pub quarter: Option<CellValue>,
}

impl SlotSelection {
    /// A slot without both Country and Brand never advances to a
    /// matched row.
    pub fn is_complete(&self) -> bool {
        self.country.is_some() && self.brand.is_some()
    }
}

/// The full comparison configuration: global filters plus 2-10 slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonDefinition {
    pub global: GlobalFilters,
    pub slots: Vec<SlotSelection>,
}

impl ComparisonDefinition {
    /// Creates a definition with `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Result<Self, ComparisonError> {
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&slot_count) {
            return Err(ComparisonError::InvalidSlotCount(slot_count));
        }
        Ok(ComparisonDefinition {
            global: GlobalFilters::default(),
            slots: vec![SlotSelection::default(); slot_count],
        })
    }

    /// Validates an already-populated definition's slot count.
    pub fn validate(&self) -> Result<(), ComparisonError> {
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&self.slots.len()) {
            return Err(ComparisonError::InvalidSlotCount(self.slots.len()));
        }
        Ok(())
    }
}
