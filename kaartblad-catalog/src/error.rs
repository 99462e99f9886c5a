use std::path::PathBuf;

/// Errors that can occur while loading or querying the catalog table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog has no column named '{0}'")]
    MissingColumn(String),

    #[error("Catalog is empty: {0}")]
    Empty(String),
}

impl CatalogError {
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }

    pub fn empty(msg: impl Into<String>) -> Self {
        Self::Empty(msg.into())
    }
}
