use std::path::PathBuf;

/// Errors raised while reading or writing a collection
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode collection file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {collection} collection: {source}")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {id} already exists in {collection}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("Storage task did not complete: {0}")]
    Task(#[source] tokio::task::JoinError),
}

pub type StorageResult<T> = Result<T, StorageError>;
