//! Error types for the sequent peak algorithm and the storage simulation.
//!
//! Every failure is a deterministic function of the input, so there is a
//! single taxonomy: `InvalidInput`, with one variant per violated
//! precondition.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{name} series must be non-empty")]
    EmptySeries { name: &'static str },

    #[error(
        "inflow and outflow must be equal length (inflow: {inflow}, outflow: {outflow})"
    )]
    LengthMismatch { inflow: usize, outflow: usize },

    #[error("{name} series has a non-finite value at period {index}")]
    NonFinite { name: &'static str, index: usize },

    #[error("initial storage must be finite and non-negative (got {0})")]
    NegativeInitialStorage(f64),

    #[error("capacity must be positive (got {0})")]
    NonPositiveCapacity(f64),

    #[error("storage balance is not finite at period {period}")]
    NonFiniteBalance { period: usize },

    #[error("peak indices must be non-empty")]
    EmptyPeaks,

    #[error("peak index {index} is out of bounds for a curve of length {len}")]
    PeakIndexOutOfBounds { index: usize, len: usize },

    #[error("peak indices must be strictly increasing ({previous} >= {next})")]
    UnorderedPeaks { previous: usize, next: usize },

    #[error("{name} must be non-empty")]
    EmptyList { name: &'static str },

    #[error("{name} has length {actual}, expected {expected}")]
    ListLengthMismatch {
        name: &'static str,
        actual: usize,
        expected: usize,
    },
}
