//! Error types for CardGen

use thiserror::Error;

/// Main error type for CardGen operations
#[derive(Error, Debug)]
pub enum CardError {
    /// No saved design matches the requested id
    #[error("Design not found: {0}")]
    NotFound(String),

    /// Persisted value could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Rasterization or encoding of the preview failed
    #[error("Export failed: {0}")]
    Export(String),

    /// Uploaded image could not be read
    #[error("Image error: {0}")]
    Image(String),

    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for CardError {
    fn from(err: image::ImageError) -> Self {
        CardError::Image(err.to_string())
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
