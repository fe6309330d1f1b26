//! # ladder-cli: interactive bond-ladder CLI
//!
//! Thin orchestration over [`ladder_io`] (CSV in/out) and [`ladder_algo`]
//! (the optimiser): a [`cli::Cli`] supplies whichever of the CSV path, `k`,
//! and export directory are known up front, [`prompt`] fills in the rest
//! interactively, and [`term`] styles the output.

pub mod cli;
pub mod prompt;
pub mod term;

pub use cli::Cli;
