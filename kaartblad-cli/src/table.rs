//! Tabular exports.
//!
//! A [`Table`] is a header row plus rows of optional cells. Missing cells are
//! written as empty fields.

use std::path::Path;

use crate::error::CliError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub(crate) fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padded or cut to the header width.
    pub(crate) fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    pub(crate) fn headers(&self) -> &[String] {
        &self.headers
    }

    pub(crate) fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Cell by row and column name.
    pub(crate) fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Place `right` next to `self`, aligning rows by position. The shorter
    /// side is padded with empty cells.
    pub(crate) fn beside(self, right: Table) -> Table {
        let height = self.rows.len().max(right.rows.len());
        let left_width = self.headers.len();
        let right_width = right.headers.len();

        let mut headers = self.headers;
        headers.extend(right.headers);

        let mut left_rows = self.rows.into_iter();
        let mut right_rows = right.rows.into_iter();
        let rows = (0..height)
            .map(|_| {
                let mut row = left_rows.next().unwrap_or_else(|| vec![None; left_width]);
                row.extend(right_rows.next().unwrap_or_else(|| vec![None; right_width]));
                row
            })
            .collect();

        Table { headers, rows }
    }

    /// Remove every column named in `names`. Names not present are ignored.
    pub(crate) fn drop_columns(mut self, names: &[String]) -> Table {
        let keep: Vec<bool> = self.headers.iter().map(|h| !names.contains(h)).collect();
        if keep.iter().all(|k| *k) {
            return self;
        }
        self.headers = retain_by(self.headers, &keep);
        self.rows = self.rows.into_iter().map(|r| retain_by(r, &keep)).collect();
        self
    }

    pub(crate) fn write_csv_to<W: std::io::Write>(&self, writer: W) -> Result<(), CliError> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(self.headers())?;
        for row in self.rows() {
            out.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))?;
        }
        out.flush()?;
        Ok(())
    }

    pub(crate) fn write_csv(&self, path: &Path) -> Result<(), CliError> {
        let file = std::fs::File::create(path)?;
        self.write_csv_to(file)
    }
}

fn retain_by<T>(items: Vec<T>, keep: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter(|(_, k)| **k)
        .map(|(item, _)| item)
        .collect()
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
