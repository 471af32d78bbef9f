//! Error types used throughout the crate.
//!
//! Table lookup misses are not errors: they return `None` and leave state
//! unchanged. Errors are reserved for state-machine misuse.

use thiserror::Error;

/// Result type for builder operations.
pub type ForgeResult<T> = Result<T, RollError>;

/// Errors from misusing the roll sequencer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollError {
    /// A roll sequence is mid-flight; it must finish or be abandoned first.
    #[error("a roll sequence is already in progress")]
    SequenceInProgress,
}
