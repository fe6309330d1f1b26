//! Top-K Optimiser
//!
//! ```text
//!   ReturnMatrix ──► engine::get_optimal_sequences ──► OptimalResults
//!                         │
//!                         ├─ per-month candidate generation (wait + each
//!                         │  tenor whose term fits before the horizon)
//!                         ├─ BinaryHeap k-way merge, advancing one
//!                         │  candidate at a time per spec.md §4.2
//!                         └─ back-pointer reconstruction (engine::reconstruct_path)
//! ```
//!
//! The engine keeps only a `window`-month slice of cumulative return
//! factors (CRFs) live at once, since no recurrence looks back further
//! than the longest tenor, but retains the full back-pointer table for the
//! horizon so every rank's path can be replayed after the forward pass
//! completes.

mod engine;
mod solution;

pub use engine::get_optimal_sequences;
pub use solution::OptimalResults;
