use thiserror::Error;

use kaartblad_catalog::CatalogError;
use kaartblad_manifest::ManifestError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be loaded or queried
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Manifest could not be loaded, decoded or written
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// CSV export failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// A required input path was not given on the command line or in config
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Catalog names some sheets inconsistently (strict mode)
    #[error("{0} conflicting sheet names in catalog")]
    Conflicts(usize),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }
}
