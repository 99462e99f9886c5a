use std::path::PathBuf;

/// Errors that can occur while reading, rewriting or writing manifests.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not decode JSON from {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Output prefix is empty, rewritten files would replace their inputs")]
    EmptyOutputPrefix,

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),
}

impl ManifestError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_manifest(msg: impl Into<String>) -> Self {
        Self::InvalidManifest(msg.into())
    }

    /// Whether the error came from undecodable file content rather than I/O.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Json { .. } | Self::InvalidManifest(_))
    }
}
