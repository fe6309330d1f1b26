//! Error taxonomy for the CSV loader and results writer.

use thiserror::Error;

/// Errors surfaced by [`crate::loader`] and [`crate::writer`].
///
/// Unlike [`ladder_core::LadderError`], every variant here is recoverable at
/// an interactive boundary (the prompt layer retries), except the one that
/// wraps an optimiser error, which is always fatal.
#[derive(Error, Debug)]
pub enum IoError {
    /// File missing, unreadable, or carrying a disallowed/spreadsheet-native
    /// extension.
    #[error("{0}")]
    FileError(String),

    /// Malformed CSV content: bad header, bad tenor, bad return, missing
    /// months, duplicate tenor, non-monotone month headers.
    #[error("{0}")]
    CsvParseError(String),

    /// The target export directory doesn't exist, isn't writable, or isn't
    /// a directory.
    #[error("{0}")]
    DirectoryError(String),

    /// All filenames `bond_results.csv`, `bond_results_2.csv`, ... up to the
    /// cap were already taken.
    #[error("exhausted {0} candidate filenames without finding a free one")]
    FilenameExhaustion(usize),

    /// An underlying `csv` crate error not already classified above.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// An underlying I/O error not already classified above.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A `ladder_core` construction error (e.g. an ill-shaped grid),
    /// propagated so loader call sites can use `?` uniformly.
    #[error(transparent)]
    Ladder(#[from] ladder_core::LadderError),
}

pub type IoResult<T> = Result<T, IoError>;
