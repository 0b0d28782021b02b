// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CityError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Project path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Project path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Error on file walk: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Cannot write report to {path}: {source}")]
    Output {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CityError>;

impl CityError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True for the errors that mean the caller handed us a bad project or config.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound(_) | Self::NotADirectory(_) | Self::Config { .. }
        )
    }
}

// Allow `?` on std::io::Error by converting to CityError::Io with unknown path.
impl From<std::io::Error> for CityError {
    fn from(source: std::io::Error) -> Self {
        CityError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
