//! Error taxonomy shared by every bond-ladder crate.
//!
//! This mirrors the rest of the workspace's approach of one flat,
//! `thiserror`-derived enum per layer instead of one error type per failure
//! site: callers match on a handful of variants rather than threading opaque
//! strings through `?`.

use thiserror::Error;

/// Direction an overflowing cumulative return factor was heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowDirection {
    /// The candidate CRF was non-finite with a non-negative sign.
    Above,
    /// The candidate CRF was non-finite with a negative sign.
    Below,
}

impl std::fmt::Display for OverflowDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowDirection::Above => write!(f, "above"),
            OverflowDirection::Below => write!(f, "below"),
        }
    }
}

/// Unified error type for the bond-ladder core and optimiser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LadderError {
    /// `len(grid) != n * num_months`.
    #[error("grid has {actual} cells, expected {expected} ({tenors} tenors x {months} months)")]
    ShapeMismatch {
        actual: usize,
        expected: usize,
        tenors: usize,
        months: usize,
    },

    /// `num_months == 0` or `tenors` is empty.
    #[error("return matrix must have at least one tenor and one month")]
    Empty,

    /// `num_months < tenors[0]`.
    #[error("num_months ({months}) is smaller than the shortest tenor ({shortest})")]
    TooFewMonths { months: u32, shortest: u32 },

    /// Tenors were not strictly ascending and the caller asked for strict validation.
    #[error("tenors must be strictly ascending, found {0:?}")]
    Unsorted(Vec<u32>),

    /// Duplicate tenor values.
    #[error("duplicate tenor: {0}")]
    DuplicateTenor(u32),

    /// `At` called with an out-of-range tenor row or month column.
    #[error("index out of range: tenor row {row}, month {month} (have {tenors} tenors, {months} months)")]
    OutOfRange { row: usize, month: usize, tenors: usize, months: usize },

    /// An `Action` was constructed with a non-positive tenor/length or a
    /// negative start month.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// A candidate CRF product was not finite (spec.md §4.2 "Overflow detection").
    #[error("cumulative return factor overflowed {direction} max-finite-double at month {month}")]
    Overflow {
        direction: OverflowDirection,
        month: u32,
    },

    /// `k < 0` or a zero-dimensioned return matrix reached the optimiser's
    /// public entry point directly (as opposed to via `ReturnMatrix::new`,
    /// which catches `Empty` earlier).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The `Decisions` back-pointer table held the unfilled sentinel at a
    /// rank that `results_at` claimed was filled. This is a bug in the
    /// optimiser, never a consequence of bad input.
    #[error("internal invariant violated during path reconstruction: {0}")]
    InternalInvariant(String),
}

/// Convenience alias for `Result<T, LadderError>`.
pub type LadderResult<T> = Result<T, LadderError>;
