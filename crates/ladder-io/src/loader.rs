//! CSV loader: turns a bond-return spreadsheet into a validated
//! [`ReturnMatrix`].
//!
//! Rows need not arrive pre-sorted by tenor — the loader sorts them and
//! permutes the grid in lock-step, so [`ladder_core::ReturnMatrix::new`]
//! never has to (it rejects unsorted input outright, see
//! `ladder_core::matrix`).

use crate::error::{IoError, IoResult};
use ladder_core::{LadderError, ReturnMatrix};
use std::path::Path;

const ALLOWED_EXTENSIONS: &[&str] = &["csv", "txt"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "xlsb", "numbers", "ods"];

/// Load and validate a bond-return grid from `path`.
///
/// See spec.md §6 "CSV loader" for the exact format: a `Tenor` header
/// followed by `0, 1, …, M-1` month labels, then one row per tenor
/// (duplicates rejected) each carrying exactly `M` HPRs. Blank lines
/// (whitespace- or comma-only) are skipped.
pub fn load_csv(path: &Path) -> IoResult<ReturnMatrix> {
    check_extension(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IoError::FileError(format!("cannot open {}: {e}", path.display())))?;

    let mut records = reader.records().filter_map(|r| match r {
        Ok(record) if is_blank(&record) => None,
        Ok(record) => Some(Ok(record)),
        Err(e) => Some(Err(IoError::Csv(e))),
    });

    let header = records
        .next()
        .ok_or_else(|| IoError::CsvParseError("file has no header row".to_string()))??;
    let num_months = validate_header(&header)?;

    let mut rows: Vec<(u32, Vec<f64>)> = Vec::new();
    for record in records {
        let record = record?;
        rows.push(parse_row(&record, num_months, &rows)?);
    }

    if rows.is_empty() {
        return Err(IoError::CsvParseError(
            "file has no tenor rows".to_string(),
        ));
    }

    rows.sort_by_key(|(tenor, _)| *tenor);

    let tenors: Vec<u32> = rows.iter().map(|(t, _)| *t).collect();
    let grid: Vec<f64> = rows.into_iter().flat_map(|(_, hprs)| hprs).collect();

    let matrix = ReturnMatrix::new(tenors, num_months as u32, grid)?;
    Ok(matrix.with_source_path(path.display().to_string()))
}

fn check_extension(path: &Path) -> IoResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some(e) if ALLOWED_EXTENSIONS.contains(&e) => Ok(()),
        Some(e) if SPREADSHEET_EXTENSIONS.contains(&e) => Err(IoError::FileError(format!(
            "{} is a spreadsheet-native format (.{e}); export to .csv or .txt first",
            path.display()
        ))),
        _ => Err(IoError::FileError(format!(
            "{} must have a .csv or .txt extension",
            path.display()
        ))),
    }
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty())
}

/// Validate the header row, returning the number of months `M`.
fn validate_header(header: &csv::StringRecord) -> IoResult<usize> {
    let label = header
        .get(0)
        .ok_or_else(|| IoError::CsvParseError("header row is empty".to_string()))?;
    if label.trim().to_ascii_lowercase() != "tenor" {
        return Err(IoError::CsvParseError(format!(
            "header cell 0 must be \"Tenor\", found {label:?}"
        )));
    }

    let num_months = header.len() - 1;
    for (i, cell) in header.iter().skip(1).enumerate() {
        let month: usize = cell.trim().parse().map_err(|_| {
            IoError::CsvParseError(format!("month header {cell:?} is not an integer"))
        })?;
        if month != i {
            return Err(IoError::CsvParseError(format!(
                "month headers must be consecutive starting at 0, expected {i}, found {month}"
            )));
        }
    }

    Ok(num_months)
}

fn parse_row(
    record: &csv::StringRecord,
    num_months: usize,
    seen: &[(u32, Vec<f64>)],
) -> IoResult<(u32, Vec<f64>)> {
    let tenor_cell = record
        .get(0)
        .ok_or_else(|| IoError::CsvParseError("row is missing a tenor cell".to_string()))?;
    let tenor: u32 = tenor_cell.trim().parse().map_err(|_| {
        IoError::CsvParseError(format!("tenor {tenor_cell:?} is not a positive integer"))
    })?;
    if tenor == 0 {
        return Err(IoError::CsvParseError(
            "tenor must be a positive integer, found 0".to_string(),
        ));
    }
    if seen.iter().any(|(t, _)| *t == tenor) {
        return Err(IoError::from(LadderError::DuplicateTenor(tenor)));
    }

    let hprs: Vec<f64> = record
        .iter()
        .skip(1)
        .map(|cell| {
            cell.trim()
                .parse::<f64>()
                .map_err(|_| IoError::CsvParseError(format!("HPR {cell:?} is not a number")))
        })
        .collect::<IoResult<_>>()?;

    if hprs.len() != num_months {
        return Err(IoError::CsvParseError(format!(
            "tenor {tenor} row has {} HPRs, expected {num_months}",
            hprs.len()
        )));
    }

    Ok((tenor, hprs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn loads_and_sorts_unsorted_rows() {
        let file = write_csv(
            "Tenor,0,1,2\n6,0.02,0.02,0.02\n3,0.01,0.01,0.01\n",
        );
        let matrix = load_csv(file.path()).unwrap();
        assert_eq!(matrix.tenors(), &[3, 6]);
        assert_eq!(matrix.at(0, 0), 0.01);
        assert_eq!(matrix.at(1, 0), 0.02);
    }

    #[test]
    fn skips_blank_lines() {
        let file = write_csv("Tenor,0,1\n\n3,0.01,0.01\n,,\n");
        let matrix = load_csv(file.path()).unwrap();
        assert_eq!(matrix.num_tenors(), 1);
    }

    #[test]
    fn rejects_bad_header_label() {
        let file = write_csv("Month,0,1\n3,0.01,0.01\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(IoError::CsvParseError(_))
        ));
    }

    #[test]
    fn rejects_non_consecutive_month_headers() {
        let file = write_csv("Tenor,0,2\n3,0.01,0.01\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(IoError::CsvParseError(_))
        ));
    }

    #[test]
    fn rejects_duplicate_tenor() {
        let file = write_csv("Tenor,0,1\n3,0.01,0.01\n3,0.02,0.02\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(IoError::Ladder(LadderError::DuplicateTenor(3)))
        ));
    }

    #[test]
    fn rejects_wrong_hpr_count() {
        let file = write_csv("Tenor,0,1,2\n3,0.01,0.01\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(IoError::CsvParseError(_))
        ));
    }

    #[test]
    fn rejects_spreadsheet_extension_with_targeted_message() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        match load_csv(file.path()) {
            Err(IoError::FileError(msg)) => assert!(msg.contains("spreadsheet")),
            other => panic!("expected FileError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".dat").tempfile().unwrap();
        assert!(matches!(load_csv(file.path()), Err(IoError::FileError(_))));
    }

    #[test]
    fn rejects_months_below_shortest_tenor() {
        let file = write_csv("Tenor,0,1\n3,0.01,0.01\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(IoError::Ladder(LadderError::TooFewMonths { .. }))
        ));
    }
}
