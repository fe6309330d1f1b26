//! Interactive prompt layer: fills in whichever of the CSV path, `k`, and
//! export directory weren't supplied on the command line.
//!
//! Every prompt retries on a recoverable parse/file error (spec.md §7
//! "parse and file errors are recoverable at the interactive boundary") and
//! treats end-of-input (Ctrl-D) as a user-initiated escape: the caller gets
//! `Ok(None)` back and exits 0, rather than an error.

use crate::term;
use ladder_core::ReturnMatrix;
use ladder_io::IoError;
use std::io::{self, Write};
use std::path::PathBuf;

const LARGE_K_WARNING_THRESHOLD: i64 = 1_000_000;

fn read_line(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a CSV path, retrying on `FileError`/`CsvParseError` until a
/// valid return matrix loads or the user escapes.
pub fn prompt_csv_path() -> anyhow::Result<Option<ReturnMatrix>> {
    loop {
        let Some(input) = read_line("Path to return-grid CSV: ")? else {
            return Ok(None);
        };
        match ladder_io::load_csv(&PathBuf::from(input)) {
            Ok(matrix) => return Ok(Some(matrix)),
            Err(IoError::FileError(msg)) | Err(IoError::CsvParseError(msg)) => {
                println!("{}", term::warn(&msg));
            }
            Err(other) => return Err(other.into()),
        }
    }
}

/// Prompt for `k`, retrying on a non-integer or negative value, and warning
/// (but not blocking) on a value above [`LARGE_K_WARNING_THRESHOLD`].
pub fn prompt_k() -> anyhow::Result<Option<i64>> {
    loop {
        let Some(input) = read_line("How many top sequences (k)? ")? else {
            return Ok(None);
        };
        match input.parse::<i64>() {
            Ok(k) if k >= 0 => {
                if k > LARGE_K_WARNING_THRESHOLD {
                    tracing::warn!(k, "k exceeds soft warning threshold");
                    println!(
                        "{}",
                        term::warn(&format!("k={k} is large; this may take a while"))
                    );
                }
                return Ok(Some(k));
            }
            _ => println!("{}", term::warn("please enter a non-negative integer")),
        }
    }
}

/// Ask whether to export results, and if so, to which directory (retrying
/// until a real directory is given).
pub fn prompt_export() -> anyhow::Result<Option<PathBuf>> {
    let Some(answer) = read_line("Export results to a CSV file? [y/N] ")? else {
        return Ok(None);
    };
    if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
        return Ok(None);
    }

    loop {
        let Some(input) = read_line("Export directory: ")? else {
            return Ok(None);
        };
        let dir = PathBuf::from(input);
        if dir.is_dir() {
            return Ok(Some(dir));
        }
        println!(
            "{}",
            term::warn(&format!("{} is not a directory", dir.display()))
        );
    }
}
