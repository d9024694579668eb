use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating a deployment manifest.
///
/// The `Display` output of every variant is the reason printed after
/// `manifest validation: FAIL - `.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("manifest path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The path exists but its content could not be read (e.g. a directory).
    #[error("invalid JSON ({0})")]
    Read(#[source] io::Error),

    #[error("invalid JSON ({0})")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Schema(String),
}

/// Coarse failure category of a [`ManifestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PathNotFound,
    Parse,
    Schema,
}

impl ManifestError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ManifestError::PathNotFound(_) => FailureKind::PathNotFound,
            ManifestError::Read(_) | ManifestError::Parse(_) => FailureKind::Parse,
            ManifestError::Schema(_) => FailureKind::Schema,
        }
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        ManifestError::Schema(message.into())
    }
}
