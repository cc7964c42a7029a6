use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuiverError {
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("a Quiver {role} must have the {expected} extension: {path}")]
    WrongExtension {
        path: PathBuf,
        role: &'static str,
        expected: &'static str,
    },

    #[error("malformed JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing required file: {0}")]
    MissingRequiredFile(PathBuf),

    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("invalid base64 payload: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl QuiverError {
    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        QuiverError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuiverError>;
