//! Top-K Optimiser output.

use ladder_core::Action;

/// The top-k cumulative return sequences reachable by the final month.
///
/// `crfs` is sorted descending; `paths[r]` is the reconstructed action
/// sequence for `crfs[r]`, in chronological order. `len(crfs) ==
/// len(paths) <= k`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimalResults {
    pub crfs: Vec<f64>,
    pub paths: Vec<Vec<Action>>,
}

impl OptimalResults {
    /// An empty result set, as returned for `k == 0` or a degenerate matrix.
    pub fn empty() -> Self {
        Self {
            crfs: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Number of ranks actually filled (`<= k`).
    pub fn len(&self) -> usize {
        self.crfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crfs.is_empty()
    }

    /// The best (rank-0) cumulative return factor, if any sequence was found.
    pub fn best_crf(&self) -> Option<f64> {
        self.crfs.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::Action;

    #[test]
    fn empty_has_no_best() {
        let results = OptimalResults::empty();
        assert!(results.is_empty());
        assert_eq!(results.best_crf(), None);
    }

    #[test]
    fn best_crf_is_first() {
        let results = OptimalResults {
            crfs: vec![1.21, 1.1, 1.0],
            paths: vec![
                vec![Action::buy(0, 2).unwrap(), Action::buy(2, 2).unwrap()],
                vec![
                    Action::wait(0, 1).unwrap(),
                    Action::buy(1, 2).unwrap(),
                    Action::wait(3, 1).unwrap(),
                ],
                vec![Action::wait(0, 4).unwrap()],
            ],
        };
        assert_eq!(results.len(), 3);
        assert_eq!(results.best_crf(), Some(1.21));
    }
}
