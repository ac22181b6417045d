//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the table engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod table;
pub mod view;

// Re-export commonly used types at the crate root
pub use cell::CellValue;
pub use table::Table;
pub use view::TableView;
