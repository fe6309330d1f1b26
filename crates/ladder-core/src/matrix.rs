//! The bond-return matrix: an immutable, row-major grid of holding-period
//! returns (HPRs) indexed by tenor and month.
//!
//! ## Layout
//!
//! `grid` is stored row-major with one row per tenor, ascending, so that
//! `At(i, m)` is `grid[i * num_months + m]`. Ascending tenor order lets the
//! optimiser's per-month tenor loop `break` at the first tenor exceeding the
//! current month (see `ladder_algo::optimizer`), and lets the loader permute
//! rows in lock-step with a single pass when tenors arrive unsorted.

use crate::error::{LadderError, LadderResult};

/// An immutable grid of per-month holding-period returns for a sorted list
/// of bond tenors.
///
/// Constructed once by a loader and shared read-only afterwards by the
/// optimiser and the path counter — see spec.md §3 "Ownership".
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnMatrix {
    tenors: Vec<u32>,
    num_months: u32,
    grid: Vec<f64>,
    source_path: Option<String>,
}

impl ReturnMatrix {
    /// Construct a return matrix from a strictly ascending tenor list, a
    /// horizon, and a row-major grid of HPRs.
    ///
    /// Fails with:
    /// - [`LadderError::Empty`] if `tenors` is empty or `num_months == 0`.
    /// - [`LadderError::ShapeMismatch`] if `grid.len() != tenors.len() *
    ///   num_months as usize`.
    /// - [`LadderError::TooFewMonths`] if `num_months < tenors[0]`.
    /// - [`LadderError::Unsorted`] if `tenors` is not strictly ascending.
    ///   Callers that only have an unsorted tenor list should sort the
    ///   tenors and permute `grid`'s rows in lock-step *before* calling this
    ///   constructor (this is what `ladder_io::loader` does); the
    ///   constructor itself never reorders data.
    pub fn new(tenors: Vec<u32>, num_months: u32, grid: Vec<f64>) -> LadderResult<Self> {
        if tenors.is_empty() || num_months == 0 {
            return Err(LadderError::Empty);
        }

        for window in tenors.windows(2) {
            if window[0] >= window[1] {
                return Err(LadderError::Unsorted(tenors));
            }
        }

        let expected = tenors.len() * num_months as usize;
        if grid.len() != expected {
            return Err(LadderError::ShapeMismatch {
                actual: grid.len(),
                expected,
                tenors: tenors.len(),
                months: num_months as usize,
            });
        }

        if num_months < tenors[0] {
            return Err(LadderError::TooFewMonths {
                months: num_months,
                shortest: tenors[0],
            });
        }

        Ok(Self {
            tenors,
            num_months,
            grid,
            source_path: None,
        })
    }

    /// Attach an opaque source tag (e.g. the CSV path it was loaded from).
    /// Untouched by the optimiser; purely informational.
    pub fn with_source_path(mut self, source_path: impl Into<String>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// The HPR for the `i`-th smallest tenor bought at month `m`, panicking
    /// if out of range. Prefer [`ReturnMatrix::try_at`] at any boundary
    /// where `i`/`m` are not already known-valid.
    #[inline]
    pub fn at(&self, i: usize, m: usize) -> f64 {
        self.grid[i * self.num_months as usize + m]
    }

    /// Bounds-checked variant of [`ReturnMatrix::at`].
    pub fn try_at(&self, i: usize, m: usize) -> LadderResult<f64> {
        if i >= self.tenors.len() || m >= self.num_months as usize {
            return Err(LadderError::OutOfRange {
                row: i,
                month: m,
                tenors: self.tenors.len(),
                months: self.num_months as usize,
            });
        }
        Ok(self.at(i, m))
    }

    /// Number of distinct tenors.
    #[inline]
    pub fn num_tenors(&self) -> usize {
        self.tenors.len()
    }

    /// Horizon length in months.
    #[inline]
    pub fn num_months(&self) -> u32 {
        self.num_months
    }

    /// The sorted tenor list (ascending).
    #[inline]
    pub fn tenors(&self) -> &[u32] {
        &self.tenors
    }

    /// Opaque source tag supplied by the loader, if any.
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(ReturnMatrix::new(vec![], 4, vec![]), Err(LadderError::Empty));
        assert_eq!(
            ReturnMatrix::new(vec![3], 0, vec![]),
            Err(LadderError::Empty)
        );
    }

    #[test]
    fn rejects_shape_mismatch() {
        let err = ReturnMatrix::new(vec![3], 4, vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, LadderError::ShapeMismatch { .. }));
    }

    #[test]
    fn rejects_too_few_months() {
        let err = ReturnMatrix::new(vec![6], 3, vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, LadderError::TooFewMonths { .. }));
    }

    #[test]
    fn rejects_unsorted_or_duplicate_tenors() {
        let err = ReturnMatrix::new(vec![6, 3], 6, vec![0.0; 12]).unwrap_err();
        assert!(matches!(err, LadderError::Unsorted(_)));

        let err = ReturnMatrix::new(vec![3, 3], 6, vec![0.0; 12]).unwrap_err();
        assert!(matches!(err, LadderError::Unsorted(_)));
    }

    #[test]
    fn accepts_well_formed_matrix() {
        let m = ReturnMatrix::new(vec![3, 6], 6, vec![0.01; 12]).unwrap();
        assert_eq!(m.num_tenors(), 2);
        assert_eq!(m.num_months(), 6);
        assert_eq!(m.tenors(), &[3, 6]);
        assert_eq!(m.at(1, 0), 0.01);
        assert!(m.try_at(2, 0).is_err());
        assert!(m.try_at(0, 6).is_err());
    }

    #[test]
    fn carries_source_path() {
        let m = ReturnMatrix::new(vec![3], 3, vec![0.0; 3])
            .unwrap()
            .with_source_path("returns.csv");
        assert_eq!(m.source_path(), Some("returns.csv"));
    }
}
