//! CSV results writer: renders an [`OptimalResults`] set into a uniquely
//! named CSV file in a chosen directory.

use crate::error::{IoError, IoResult};
use ladder_algo::OptimalResults;
use ladder_core::{sequence_to_short_form, Action};
use std::path::{Path, PathBuf};

const FILENAME_ATTEMPT_CAP: usize = 10_000;

/// Write one CSV record per rank: `rank, "<pct>%", "<action-list>"`. Returns
/// the path actually written to (see [`unique_filename`] for naming).
///
/// `verbose` selects `Action::to_verbose_form` rendering of the action list
/// over the default short form (`b6,w2,...`).
pub fn write_results(dir: &Path, results: &OptimalResults, verbose: bool) -> IoResult<PathBuf> {
    let path = unique_filename(dir)?;

    let mut wtr = csv::Writer::from_path(&path)
        .map_err(|e| IoError::FileError(format!("cannot create {}: {e}", path.display())))?;
    wtr.write_record(["rank", "return_pct", "actions"])?;

    for (rank, (crf, actions)) in results.crfs.iter().zip(results.paths.iter()).enumerate() {
        let pct = 100.0 * crf - 100.0;
        let rendered = render_actions(actions, verbose);
        wtr.write_record([
            (rank + 1).to_string(),
            format!("{pct:.2}%"),
            rendered,
        ])?;
    }

    wtr.flush()?;
    tracing::debug!(path = %path.display(), ranks = results.len(), "wrote results CSV");
    Ok(path)
}

fn render_actions(actions: &[Action], verbose: bool) -> String {
    if verbose {
        actions
            .iter()
            .map(Action::to_verbose_form)
            .collect::<Vec<_>>()
            .join("; ")
    } else {
        sequence_to_short_form(actions)
    }
}

/// Pick the first free filename in `dir`: `bond_results.csv`, then
/// `bond_results_2.csv`, `bond_results_3.csv`, … up to
/// [`FILENAME_ATTEMPT_CAP`].
fn unique_filename(dir: &Path) -> IoResult<PathBuf> {
    if !dir.is_dir() {
        return Err(IoError::DirectoryError(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let base = dir.join("bond_results.csv");
    if !base.exists() {
        return Ok(base);
    }

    for n in 2..=FILENAME_ATTEMPT_CAP {
        let candidate = dir.join(format!("bond_results_{n}.csv"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(IoError::FilenameExhaustion(FILENAME_ATTEMPT_CAP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::Action;
    use tempfile::TempDir;

    fn sample_results() -> OptimalResults {
        OptimalResults {
            crfs: vec![1.21, 1.1],
            paths: vec![
                vec![Action::buy(0, 2).unwrap(), Action::buy(2, 2).unwrap()],
                vec![
                    Action::wait(0, 1).unwrap(),
                    Action::buy(1, 2).unwrap(),
                    Action::wait(3, 1).unwrap(),
                ],
            ],
        }
    }

    #[test]
    fn writes_short_form_records() {
        let dir = TempDir::new().unwrap();
        let path = write_results(dir.path(), &sample_results(), false).unwrap();
        assert_eq!(path.file_name().unwrap(), "bond_results.csv");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("b2,b2"));
        assert!(content.contains("21.00%"));
    }

    #[test]
    fn writes_verbose_form_records() {
        let dir = TempDir::new().unwrap();
        let path = write_results(dir.path(), &sample_results(), true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Month 1: buy 2-month bond"));
    }

    #[test]
    fn picks_next_free_filename() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bond_results.csv"), "taken").unwrap();
        let path = write_results(dir.path(), &sample_results(), false).unwrap();
        assert_eq!(path.file_name().unwrap(), "bond_results_2.csv");
    }

    #[test]
    fn rejects_missing_directory() {
        let err = write_results(
            Path::new("/does/not/exist/at/all"),
            &sample_results(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, IoError::DirectoryError(_)));
    }
}
