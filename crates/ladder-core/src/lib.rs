//! # ladder-core: bond-laddering data model
//!
//! Provides the fundamental data structures shared by the rest of the
//! bond-ladder workspace: the [`ReturnMatrix`] of per-month holding-period
//! returns, and the [`Action`] a reconstructed strategy is made of.
//!
//! ## Design Philosophy
//!
//! The data model here is deliberately inert: `ReturnMatrix` and `Action`
//! carry no algorithm, just the invariants spelled out in spec.md §3
//! (strictly ascending tenors, row-major storage, non-decreasing
//! `start_month` within a sequence). The optimiser in `ladder-algo` and the
//! I/O layer in `ladder-io` both depend on this crate; it depends on
//! nothing but `thiserror`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ladder_core::{Action, ReturnMatrix};
//!
//! // Two tenors (3 and 6 months) over a 6-month horizon.
//! let grid = vec![
//!     0.01, 0.01, 0.01, 0.01, 0.01, 0.01, // 3-month tenor row
//!     0.02, 0.02, 0.02, 0.02, 0.02, 0.02, // 6-month tenor row
//! ];
//! let matrix = ReturnMatrix::new(vec![3, 6], 6, grid).unwrap();
//! assert_eq!(matrix.at(1, 0), 0.02);
//!
//! let action = Action::buy(0, 6).unwrap();
//! assert_eq!(action.to_short_form(), "b6");
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — the [`ReturnMatrix`] data carrier.
//! - [`action`] — the [`Action`] tagged sum and short/verbose rendering.
//! - [`error`] — the [`LadderError`] taxonomy shared across the workspace.

pub mod action;
pub mod error;
pub mod matrix;

pub use action::{sequence_from_short_form, sequence_to_short_form, Action};
pub use error::{LadderError, LadderResult, OverflowDirection};
pub use matrix::ReturnMatrix;
