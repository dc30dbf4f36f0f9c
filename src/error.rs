use crate::core::dataset::Dataset;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IsoAssetsError>;

/// Everything that can go wrong while fetching a single dataset.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Refusing to fetch non-HTTPS URL: {url}")]
    InsecureUrl { url: String },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Transfer from {url} was interrupted: {source}")]
    Transfer {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned an empty body")]
    EmptyBody { url: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum IsoAssetsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to update {dataset}: {source}")]
    UpdateFailed {
        dataset: Dataset,
        #[source]
        source: FetchError,
    },
}

impl IsoAssetsError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        IsoAssetsError::ConfigError {
            message: message.into(),
        }
    }

    /// The dataset whose fetch failed, if this is an update failure.
    pub fn failed_dataset(&self) -> Option<Dataset> {
        match self {
            IsoAssetsError::UpdateFailed { dataset, .. } => Some(*dataset),
            _ => None,
        }
    }
}
