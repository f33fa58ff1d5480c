use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize lead store")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("lead store file is not valid JSON: {path}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not be moved over the target.
    #[error("failed to complete save: {temp_path} -> {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lead id already exists: {id}")]
    DuplicateId { id: String },
}
