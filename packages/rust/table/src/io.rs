//! CSV input and output.
//!
//! Reading requires a header row and a fixed cell count per record. Writing
//! goes through a hidden temp file in the target directory followed by a
//! rename, so a crash mid-write never leaves a half-written output behind.

use std::fs::File;
use std::path::{Path, PathBuf};

use claimsift_shared::{ClaimsiftError, Result};
use tracing::debug;

use crate::Table;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read a CSV file with a header row into a [`Table`].
pub fn read_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| ClaimsiftError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ClaimsiftError::Csv(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    let mut table = Table::new(headers);

    for record in reader.records() {
        let record = record.map_err(|e| ClaimsiftError::Csv(e.to_string()))?;
        table.push_row(record.iter().map(str::to_string).collect())?;
    }

    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "read CSV"
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write a [`Table`] to `path` as CSV.
///
/// The records land in a temp file next to `path` first and are renamed over
/// the target only once fully flushed.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let temp = temp_path(path);

    if let Err(e) = write_records(table, &temp) {
        let _ = std::fs::remove_file(&temp);
        return Err(e);
    }
    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(ClaimsiftError::io(path, e));
    }

    debug!(path = %path.display(), rows = table.height(), "wrote CSV");
    Ok(())
}

// Temp file in the same directory so the rename stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.csv".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

fn write_records(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ClaimsiftError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(table.headers())
        .map_err(|e| ClaimsiftError::Csv(e.to_string()))?;
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(|e| ClaimsiftError::Csv(e.to_string()))?;
    }
    writer.flush().map_err(|e| ClaimsiftError::io(path, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/csv")
            .join(name)
    }

    #[test]
    fn read_fixture_headers_and_rows() {
        let table = read_csv(&fixture_path("owners.fixture.csv")).unwrap();
        assert!(table.has_column("OWNER_NAME"));
        assert!(table.has_column("NO_OF_OWNERS"));
        assert!(table.height() >= 4);
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let err = read_csv(Path::new("/nonexistent/owners.csv")).unwrap_err();
        assert!(matches!(err, ClaimsiftError::Io { .. }));
    }

    #[test]
    fn read_ragged_record_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "A,B\n1,2\n3\n").unwrap();

        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, ClaimsiftError::Csv(_)));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let table = Table::from_rows(
            ["NAME", "CITY"],
            vec![
                vec!["JANE DOE".into(), "SAN FRANCISCO".into()],
                vec!["".into(), "with, comma".into()],
            ],
        )
        .unwrap();

        write_csv(&table, &path).unwrap();
        let back = read_csv(&path).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let table = Table::from_rows(["A"], vec![vec!["1".into()]]).unwrap();
        write_csv(&table, &path).unwrap();

        for entry in std::fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }
    }
}
