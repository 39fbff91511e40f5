use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockDataError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
}

impl MockDataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MockDataError>;
