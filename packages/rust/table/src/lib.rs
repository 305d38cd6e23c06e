//! In-memory table of owner records.
//!
//! A [`Table`] is a header row plus a list of string rows, the same shape a
//! CSV file has on disk. Cells are plain strings and an empty string stands
//! for a missing value. Columns are addressed by name through the header row.

pub mod io;

use claimsift_shared::{ClaimsiftError, Result};

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Column-named rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table from headers and pre-built rows.
    pub fn from_rows<I, S>(headers: I, rows: Vec<Vec<String>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers, in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Iterate over data rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// True when a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Resolve a column name to its index.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ClaimsiftError::schema(name))
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Append a data row. The row must have one cell per column.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(ClaimsiftError::validation(format!(
                "row has {} cells, expected {}",
                row.len(),
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Keep only the rows the predicate accepts, preserving order.
    pub fn retain_rows<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| predicate(row.as_slice()));
    }

    /// Rewrite every cell of the named column in place.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&str) -> String,
    {
        let index = self.column_index(name)?;
        for row in &mut self.rows {
            row[index] = f(&row[index]);
        }
        Ok(())
    }

    /// Set a column to the given values, adding the column when absent.
    ///
    /// `values` must carry one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(ClaimsiftError::validation(format!(
                "column {name:?} has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }
        match self.headers.iter().position(|h| h == name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Project onto the named columns, in the order given.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Table {
            headers: names.iter().map(|&n| n.to_string()).collect(),
            rows,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            ["OWNER_NAME", "OWNER_CITY"],
            vec![
                vec!["JANE DOE".into(), "OAKLAND".into()],
                vec!["ACME CORP".into(), "FRESNO".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn push_row_rejects_wrong_width() {
        let mut table = Table::new(["A", "B"]);
        let err = table.push_row(vec!["1".into()]).unwrap_err();
        assert!(matches!(err, ClaimsiftError::Validation { .. }));
    }

    #[test]
    fn column_index_unknown_is_schema_error() {
        let table = sample();
        let err = table.column_index("MISSING").unwrap_err();
        assert!(matches!(err, ClaimsiftError::Schema { .. }));
        assert!(err.to_string().contains("MISSING"));
    }

    #[test]
    fn column_values_in_row_order() {
        let table = sample();
        assert_eq!(
            table.column_values("OWNER_NAME").unwrap(),
            vec!["JANE DOE", "ACME CORP"]
        );
    }

    #[test]
    fn retain_rows_preserves_order() {
        let mut table = Table::from_rows(
            ["N"],
            vec![vec!["1".into()], vec!["2".into()], vec!["3".into()]],
        )
        .unwrap();
        table.retain_rows(|row| row[0] != "2");
        assert_eq!(table.column_values("N").unwrap(), vec!["1", "3"]);
    }

    #[test]
    fn map_column_rewrites_cells() {
        let mut table = sample();
        table.map_column("OWNER_CITY", |v| v.to_lowercase()).unwrap();
        assert_eq!(
            table.column_values("OWNER_CITY").unwrap(),
            vec!["oakland", "fresno"]
        );
    }

    #[test]
    fn map_column_unknown_is_schema_error() {
        let mut table = sample();
        let err = table.map_column("MISSING", |v| v.to_string()).unwrap_err();
        assert!(matches!(err, ClaimsiftError::Schema { .. }));
    }

    #[test]
    fn set_column_overwrites_existing() {
        let mut table = sample();
        table
            .set_column("OWNER_CITY", vec!["A".into(), "B".into()])
            .unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.column_values("OWNER_CITY").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn set_column_appends_new() {
        let mut table = sample();
        table
            .set_column(
                "STATE_REPORTED",
                vec!["CALIFORNIA".into(), "CALIFORNIA".into()],
            )
            .unwrap();
        assert_eq!(table.width(), 3);
        assert_eq!(table.headers()[2], "STATE_REPORTED");
        assert_eq!(table.rows().next().unwrap()[2], "CALIFORNIA");
    }

    #[test]
    fn set_column_rejects_wrong_length() {
        let mut table = sample();
        let err = table.set_column("OWNER_CITY", vec!["A".into()]).unwrap_err();
        assert!(matches!(err, ClaimsiftError::Validation { .. }));
    }

    #[test]
    fn select_projects_and_reorders() {
        let table = sample();
        let projected = table.select(&["OWNER_CITY", "OWNER_NAME"]).unwrap();
        assert_eq!(projected.headers(), ["OWNER_CITY", "OWNER_NAME"]);
        assert_eq!(
            projected.rows().next().unwrap(),
            ["OAKLAND".to_string(), "JANE DOE".to_string()]
        );
    }

    #[test]
    fn select_unknown_column_is_schema_error() {
        let table = sample();
        let err = table.select(&["OWNER_NAME", "NOPE"]).unwrap_err();
        assert!(matches!(err, ClaimsiftError::Schema { .. }));
    }
}
