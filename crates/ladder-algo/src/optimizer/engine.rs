//! The Top-K Optimiser: a dynamic-programming engine augmented with a
//! k-way merge, producing the top-k cumulative return sequences reachable
//! by the end of the horizon.
//!
//! ## Algorithm
//!
//! For every month `m` the engine keeps a descending-sorted frontier of up
//! to `k` cumulative return factors (CRFs) reachable at `m`, plus a
//! back-pointer recording which action produced each entry and which rank
//! at the source month it extends. Each month's frontier is built by a
//! k-way merge (a max-heap) over `n + 1` non-increasing candidate streams —
//! one "wait" stream and one "buy" stream per tenor — so the frontier is
//! produced in descending order without ever materialising and sorting all
//! `(n+1) * k` successors.
//!
//! Two tables back this:
//!
//! - `crf`: a cyclic buffer of `(window) * k` cells, `window = min(max
//!   tenor, num_months) + 1`. Only the last `window` months' frontiers are
//!   ever read by a future month's update (a bond bought this month matures
//!   at most `max(tenors)` months out), so older rows are recycled.
//! - `decisions`: a dense `(num_months + 1) * k` table of `(tenor,
//!   prev_rank)` pairs. Path reconstruction walks the *entire* horizon
//!   backwards, so unlike `crf` this table cannot be rolled.
//!
//! Both are dropped as soon as [`get_optimal_sequences`] returns.

use crate::optimizer::solution::OptimalResults;
use ladder_core::error::OverflowDirection;
use ladder_core::{Action, LadderError, LadderResult, ReturnMatrix};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Sentinel `prev_rank` for the one back-pointer with no predecessor
/// (`Decisions[0, 0]`).
const NO_PREDECESSOR: i32 = -1;
/// Sentinel `tenor` marking an unfilled `Decisions` entry.
const UNFILLED: i32 = -1;
/// Tenor value used to tag a wait step in the back-pointer table.
const WAIT_TENOR: i32 = 0;

/// One candidate CRF competing to enter month `m`'s frontier: either the
/// head of the "keep waiting" stream, or the head of a per-tenor "buy"
/// stream.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    crf: f64,
    /// 0 for wait, otherwise the tenor of the bond that matured this month.
    tenor: u32,
    /// Rank within `crf[phase(prev_month)]` that this candidate extends.
    prev_rank: usize,
    prev_month: u32,
    /// The per-step multiplier (1.0 for wait, `1 + HPR` for a buy) used to
    /// extend this stream's next element once this one is consumed.
    factor: f64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.crf == other.crf
    }
}
impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    // Candidates are always finite by the time they're pushed (see
    // `checked_product`), so a total order is safe here even though `f64`
    // itself is only partially ordered.
    fn cmp(&self, other: &Self) -> Ordering {
        self.crf.partial_cmp(&other.crf).unwrap_or(Ordering::Equal)
    }
}

/// Physical row in the cyclic CRF buffer for logical month `m`.
#[inline]
fn phase(month: u32, window: u32) -> usize {
    (month % window) as usize
}

/// Multiply `prev_crf * factor`, failing with [`LadderError::Overflow`] if
/// the product is not finite (spec.md §4.2 "Overflow detection").
fn checked_product(prev_crf: f64, factor: f64, month: u32) -> LadderResult<f64> {
    let product = prev_crf * factor;
    if product.is_finite() {
        Ok(product)
    } else {
        let direction = if product.is_sign_negative() {
            OverflowDirection::Below
        } else {
            OverflowDirection::Above
        };
        Err(LadderError::Overflow { direction, month })
    }
}

/// Compute the top-k highest cumulative return sequences fitting within
/// `matrix`'s horizon.
///
/// `k < 0` fails with [`LadderError::InvalidArgument`]; `k == 0` returns an
/// empty [`OptimalResults`]. Otherwise this always succeeds in producing at
/// least one sequence per month (waiting is always feasible), unless a
/// candidate CRF overflows, in which case it fails with
/// [`LadderError::Overflow`] carrying the first month at which that
/// happened.
pub fn get_optimal_sequences(matrix: &ReturnMatrix, k: i64) -> LadderResult<OptimalResults> {
    if k < 0 {
        return Err(LadderError::InvalidArgument(format!(
            "k must be >= 0, got {k}"
        )));
    }
    let k = k as usize;
    if k == 0 {
        return Ok(OptimalResults::empty());
    }

    let num_months = matrix.num_months();
    let tenors = matrix.tenors();
    let l_max = *tenors.iter().max().expect("ReturnMatrix guarantees >=1 tenor");
    let window = l_max.min(num_months) + 1;

    tracing::debug!(
        num_months,
        num_tenors = tenors.len(),
        k,
        window,
        "starting top-k DP"
    );

    let mut crf = vec![f64::NEG_INFINITY; window as usize * k];
    crf[0] = 1.0;

    let mut decisions = vec![(UNFILLED, UNFILLED); (num_months as usize + 1) * k];
    decisions[0] = (WAIT_TENOR, NO_PREDECESSOR);

    let mut results_at = vec![0usize; num_months as usize + 1];
    results_at[0] = 1;

    for m in 1..=num_months {
        let row_m = phase(m, window) * k;
        for r in crf[row_m..row_m + k].iter_mut() {
            *r = f64::NEG_INFINITY;
        }

        let mut heap = BinaryHeap::with_capacity(tenors.len() + 1);

        let row_prev = phase(m - 1, window) * k;
        heap.push(Candidate {
            crf: crf[row_prev],
            tenor: 0,
            prev_rank: 0,
            prev_month: m - 1,
            factor: 1.0,
        });

        for (i, &t) in tenors.iter().enumerate() {
            if t > m {
                break; // tenors ascending: no later tenor can fit either.
            }
            let factor = 1.0 + matrix.at(i, (m - t) as usize);
            let row_src = phase(m - t, window) * k;
            let candidate_crf = checked_product(crf[row_src], factor, m)?;
            heap.push(Candidate {
                crf: candidate_crf,
                tenor: t,
                prev_rank: 0,
                prev_month: m - t,
                factor,
            });
        }

        let mut r = 0usize;
        while r < k {
            let Some(top) = heap.pop() else { break };

            crf[row_m + r] = top.crf;
            decisions[m as usize * k + r] = (top.tenor as i32, top.prev_rank as i32);

            let next_rank = top.prev_rank + 1;
            if next_rank < k {
                let row_src = phase(top.prev_month, window) * k;
                let next_crf = crf[row_src + next_rank];
                if next_crf != f64::NEG_INFINITY {
                    let advanced = checked_product(next_crf, top.factor, m)?;
                    heap.push(Candidate {
                        crf: advanced,
                        tenor: top.tenor,
                        prev_rank: next_rank,
                        prev_month: top.prev_month,
                        factor: top.factor,
                    });
                }
            }

            r += 1;
        }
        results_at[m as usize] = r;
    }

    let filled = results_at[num_months as usize];
    let final_row = phase(num_months, window) * k;
    let crfs = crf[final_row..final_row + filled].to_vec();

    let mut paths = Vec::with_capacity(filled);
    for r in 0..filled {
        paths.push(reconstruct_path(&decisions, k, num_months, r)?);
    }

    tracing::debug!(filled, "top-k DP complete");

    Ok(OptimalResults { crfs, paths })
}

/// Walk `decisions` backwards from `(num_months, rank)` to month 0,
/// merging adjacent waits, then reverse into chronological order.
fn reconstruct_path(
    decisions: &[(i32, i32)],
    k: usize,
    num_months: u32,
    rank: usize,
) -> LadderResult<Vec<Action>> {
    let mut current_month = num_months;
    let mut current_rank = rank;
    let mut wait_streak = 0u32;
    let mut actions = Vec::new();

    while current_month > 0 {
        let (tenor, prev_rank) = decisions[current_month as usize * k + current_rank];
        if tenor == UNFILLED {
            return Err(LadderError::InternalInvariant(format!(
                "unfilled back-pointer at month {current_month}, rank {current_rank}"
            )));
        }

        if tenor == WAIT_TENOR {
            wait_streak += 1;
            current_month -= 1;
            current_rank = prev_rank as usize;
        } else {
            let tenor = tenor as u32;
            if wait_streak > 0 {
                actions.push(Action::wait(current_month, wait_streak)?);
                wait_streak = 0;
            }
            let start = current_month - tenor;
            actions.push(Action::buy(start, tenor)?);
            current_month = start;
            current_rank = prev_rank as usize;
        }
    }

    if wait_streak > 0 {
        actions.push(Action::wait(0, wait_streak)?);
    }

    actions.reverse();
    Ok(actions)
}
