//! FILENAME: core/comparison-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComparisonError {
    /// The comparison supports between 2 and 10 competitor slots.
    #[error("comparison needs between 2 and 10 competitors, got {0}")]
    InvalidSlotCount(usize),

    /// Fewer than two slots resolved to a row. Recoverable: the
    /// selection surface stays live, but no comparison is rendered or
    /// exported until corrected.
    #[error("select at least two competitors (Country + Brand) to compare; {matched} matched")]
    InsufficientSelections { matched: usize },
}
