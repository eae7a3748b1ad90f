use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read country dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid country dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("country dataset is empty")]
    Empty,
}

/// Rejection from the numbering plan when a candidate number cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("unparseable phone number `{number}` for region {region}: {reason}")]
    Parse {
        number: String,
        region: String,
        reason: String,
    },
}
