//! # ladder-io: CSV boundary for the bond-ladder workspace
//!
//! [`loader`] turns a CSV/TXT file into a validated
//! [`ladder_core::ReturnMatrix`]; [`writer`] turns an
//! [`ladder_algo::OptimalResults`] back into a CSV file. Both sides share
//! [`error::IoError`] so callers (the CLI's prompt layer) can retry on the
//! same error shape regardless of direction.

pub mod error;
pub mod loader;
pub mod writer;

pub use error::{IoError, IoResult};
pub use loader::load_csv;
pub use writer::write_results;
