//! # ladder-algo: the bond-laddering algorithms
//!
//! Two independent DPs over the same domain model ([`ladder_core`]):
//!
//! - [`optimizer`] — the Top-K Optimiser (spec.md §4.2–§4.3): finds the `k`
//!   highest cumulative-return action sequences over a horizon, given a
//!   [`ladder_core::ReturnMatrix`] of per-tenor holding-period returns.
//! - [`path_counter`] — the Path Counter (spec.md §4.4): counts how many
//!   distinct action sequences exist for a tenor list and horizon,
//!   independent of returns.
//!
//! Both modules share nothing but the domain types; neither depends on the
//! other.

pub mod optimizer;
pub mod path_counter;

pub use optimizer::{get_optimal_sequences, OptimalResults};
pub use path_counter::{count_sequences, PathCount};
