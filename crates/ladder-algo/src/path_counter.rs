//! Path Counter: counts the number of distinct reachable action sequences
//! for a given tenor list and horizon, promoting from exact 64-bit integer
//! arithmetic to `f64` the moment a partial sum would overflow.
//!
//! This is a DP sibling of the Top-K Optimiser — `P[m] = sum over each
//! distinct step size (every tenor, plus a single-month wait) of
//! `P[m - step]``, with `P[0] = 1` and out-of-range terms treated as zero —
//! but it tracks only a count, never a CRF or a back-pointer, so it lives
//! in its own module rather than sharing state with `optimizer`.

use std::fmt;

/// The number of distinct action sequences reaching a horizon: either an
/// exact count, or (once it would have overflowed `i64`) a finite or
/// infinite double-precision approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCount {
    Exact(i64),
    Approx(f64),
}

impl fmt::Display for PathCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCount::Exact(n) => write!(f, "{n}"),
            PathCount::Approx(v) if v.is_infinite() => write!(f, "over max-finite-double"),
            PathCount::Approx(v) => write!(f, "{v:e}"),
        }
    }
}

/// Count the number of distinct action sequences that exactly fill a
/// horizon of `horizon` months, given a set of bond tenors. A single-month
/// "wait" is always an available step, in addition to buying a bond of any
/// listed tenor (the "+1" tenor of spec.md §4.4); if `1` is already a
/// tenor, it is not double-counted — the step set is the set union.
pub fn count_sequences(tenors: &[u32], horizon: u32) -> PathCount {
    let mut steps: Vec<u32> = tenors.to_vec();
    if !steps.contains(&1) {
        steps.push(1);
    }
    steps.sort_unstable();
    steps.dedup();

    let mut exact: Vec<i64> = vec![1]; // P[0] = 1
    let mut approx: Option<Vec<f64>> = None;

    for month in 1..=horizon as usize {
        if let Some(vals) = approx.as_mut() {
            let sum = steps
                .iter()
                .map(|&t| t as usize)
                .filter(|&t| t <= month)
                .map(|t| vals[month - t])
                .sum();
            vals.push(sum);
            continue;
        }

        // Still in exact arithmetic: accumulate in i64, switching to f64
        // mid-sum the instant an addition would overflow.
        let mut sum: i64 = 0;
        let mut promoted: Option<f64> = None;
        for &t in &steps {
            let t = t as usize;
            if t > month {
                continue;
            }
            let addend = exact[month - t];
            match promoted {
                Some(ref mut fsum) => *fsum += addend as f64,
                None => match sum.checked_add(addend) {
                    Some(next) => sum = next,
                    None => promoted = Some(sum as f64 + addend as f64),
                },
            }
        }

        match promoted {
            Some(fsum) => {
                let mut vals: Vec<f64> = exact.iter().map(|&x| x as f64).collect();
                vals.push(fsum);
                tracing::warn!(month, "path count promoted to floating point after overflow");
                approx = Some(vals);
            }
            None => exact.push(sum),
        }
    }

    match approx {
        Some(vals) => PathCount::Approx(*vals.last().expect("at least P[0]")),
        None => PathCount::Exact(*exact.last().expect("at least P[0]")),
    }
}
