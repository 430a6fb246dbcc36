//! Error types for the ShoePro storefront

use thiserror::Error;

/// Main error type for storefront operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Collection was not found in the catalog
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Product was not found in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Transport-level failure talking to the catalog backend
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

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

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be parsed or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
