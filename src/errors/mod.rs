//! Error handling module for the overlay store.
//!
//! Provides the storage error taxonomy. Errors never cross the façade
//! boundary: the `persist`/`overlay` adapters absorb them and degrade to
//! seed data (read) or a skipped write (write).

/// Error kinds as constants to avoid stringly-typed errors.
pub mod kinds {
    pub const SERIALIZATION: &str = "SERIALIZATION";
    pub const UNAVAILABLE: &str = "UNAVAILABLE";
    pub const IO: &str = "IO";
}

/// Storage error type.
#[derive(Debug)]
pub enum StorageError {
    /// A collection could not be serialized, or a stored string could not
    /// be parsed back into a collection.
    Serialization(String),
    /// The backing store is not available in this execution context.
    Unavailable(String),
    /// The backing store failed to read or write (e.g., quota exceeded).
    Io(String),
}

impl StorageError {
    /// Get the error kind for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Serialization(_) => kinds::SERIALIZATION,
            StorageError::Unavailable(_) => kinds::UNAVAILABLE,
            StorageError::Io(_) => kinds::IO,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            StorageError::Serialization(msg) => msg,
            StorageError::Unavailable(msg) => msg,
            StorageError::Io(msg) => msg,
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        StorageError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        StorageError::Io(format!("I/O error: {}", err))
    }
}
