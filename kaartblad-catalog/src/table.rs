//! Catalog table loaded from a CSV export of the product spreadsheet.
//!
//! Every cell is kept as a string. Rows are filtered and columns selected the
//! way the edition comparison needs them; none of the operations reorder rows.

use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;

/// Column holding the product title.
pub const TITLE_COLUMN: &str = "titel";
/// Column holding the edition name (e.g., `EERSTE`, `VIJFDE`).
pub const EDITION_COLUMN: &str = "editie";
/// Column holding the sheet type (e.g., `Watervoorzieningseenheden`).
pub const SHEET_TYPE_COLUMN: &str = "bladtype";

/// Header row plus string rows, all rows as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CatalogTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Load a catalog CSV file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table = Self::from_reader(file)?;
        log::debug!(
            "Loaded catalog {} ({} rows, {} columns)",
            path.display(),
            table.len(),
            table.headers.len()
        );
        Ok(table)
    }

    /// Parse catalog CSV content. Malformed rows are skipped with a warning.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(CatalogError::empty("no header row"));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
                Err(e) => log::warn!("Skipping malformed catalog row: {e}"),
            }
        }

        Ok(Self::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require_column(&self, name: &str) -> Result<usize, CatalogError> {
        self.column_index(name)
            .ok_or_else(|| CatalogError::missing_column(name))
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, CatalogError> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// The product titles, in row order.
    pub fn titles(&self) -> Result<Vec<&str>, CatalogError> {
        self.column(TITLE_COLUMN)
    }

    /// Keep only rows whose `column` equals `value`.
    pub fn filter_eq(self, column: &str, value: &str) -> Result<Self, CatalogError> {
        let idx = self.require_column(column)?;
        Ok(self.retain_rows(|row| row[idx] == value))
    }

    /// Drop rows whose `column` is one of `values`.
    pub fn exclude_values(self, column: &str, values: &[String]) -> Result<Self, CatalogError> {
        if values.is_empty() {
            return Ok(self);
        }
        let idx = self.require_column(column)?;
        Ok(self.retain_rows(|row| !values.contains(&row[idx])))
    }

    /// Drop the first `n` rows.
    pub fn skip_rows(mut self, n: usize) -> Self {
        let n = n.min(self.rows.len());
        self.rows.drain(..n);
        self
    }

    /// Keep only the columns whose names start with one of `prefixes`.
    /// An empty prefix list keeps every column.
    pub fn select_prefixed(self, prefixes: &[String]) -> Self {
        if prefixes.is_empty() {
            return self;
        }
        let keep: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| prefixes.iter().any(|p| h.starts_with(p.as_str())))
            .map(|(i, _)| i)
            .collect();

        let headers = keep.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Self { headers, rows }
    }

    fn retain_rows(mut self, keep: impl Fn(&[String]) -> bool) -> Self {
        self.rows.retain(|row| keep(row));
        self
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
