//! Error types shared across the crate.

use core::fmt;

/// Errors returned by puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Requested dimension cannot host a puzzle.
    InvalidDimension(usize),
    /// Every restart failed: the dimension is too small for the requested
    /// tent density. Carries the number of attempts made.
    RetriesExhausted(u32),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidDimension(dim) => {
                write!(f, "invalid board dimension: {}", dim)
            }
            GenerationError::RetriesExhausted(attempts) => write!(
                f,
                "could not generate a valid board in {} attempts; \
                 the dimension is likely too small for the tent density",
                attempts
            ),
        }
    }
}

/// Errors returned while building the declarative constraint model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Row and column constraint totals disagree, so the instance cannot
    /// have a solution. Rejected before a model is built.
    ConstraintSumMismatch { rows: usize, cols: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::ConstraintSumMismatch { rows, cols } => write!(
                f,
                "row constraints sum to {} but column constraints sum to {}",
                rows, cols
            ),
        }
    }
}

/// Errors returned by a constraint engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine proved the model has no solution. A hard failure for the
    /// caller; never retried silently.
    Infeasible,
    /// The engine itself failed.
    Backend(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Infeasible => write!(f, "the constraint model is infeasible"),
            EngineError::Backend(msg) => write!(f, "constraint engine failure: {}", msg),
        }
    }
}
