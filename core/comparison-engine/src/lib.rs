//! FILENAME: core/comparison-engine/src/lib.rs
//! Competitor comparison subsystem.
//!
//! Layers:
//! - `roles`: Column Resolver (semantic role -> actual column)
//! - `definition`: Serializable configuration (what the comparison IS)
//! - `cascade`: Sequential narrowing filters (HOW a slot finds its row)
//! - `engine`: Slot resolution and view assembly
//! - `view`: Renderable output for the presentation layer
//! - `export`: Flat record builder for the download file

pub mod cascade;
pub mod definition;
pub mod engine;
pub mod error;
pub mod export;
pub mod roles;
pub mod view;

pub use cascade::{global_view, pick_first, resolve_slot, role_options, slot_view};
pub use definition::{
    ComparisonDefinition, GlobalFilters, SlotSelection, MAX_SLOTS, MIN_SLOTS,
};
pub use crate::engine::{assemble, resolve_slots, slot_label, ResolvedSlot};
pub use error::ComparisonError;
pub use export::{build_export, ComparisonExport, EXPORT_FILE_NAME};
pub use roles::{ColumnIndex, Role, RoleMap};
pub use view::{
    parameter_list, ComparisonCell, ComparisonView, CompetitorColumn, Parameter,
    ParameterKind,
};
