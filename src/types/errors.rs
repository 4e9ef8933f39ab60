use serde::Serialize;
use thiserror::Error;

/// Reasons an uploaded inventory document is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Error parsing JSON file: {0}")]
    Parse(String),
    #[error("Invalid inventory data: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Stored value could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Identity check failed: {0}")]
    Provider(String),
    #[error("Not signed in")]
    SignedOut,
    #[error("Identity check still in progress")]
    Pending,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("Showcase slot {index} is out of range (0..{size})")]
    SlotOutOfRange { index: usize, size: usize },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("{0}")]
    Inventory(#[from] InventoryError),
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<StorageError> for CommandError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Database(e) => CommandError::Database(e.to_string()),
            StorageError::Serialization(e) => CommandError::Internal(e.to_string()),
        }
    }
}

impl From<sqlx::Error> for CommandError {
    fn from(error: sqlx::Error) -> Self {
        CommandError::Database(error.to_string())
    }
}

impl From<std::io::Error> for CommandError {
    fn from(error: std::io::Error) -> Self {
        CommandError::Io(error.to_string())
    }
}

impl From<ShowcaseError> for CommandError {
    fn from(error: ShowcaseError) -> Self {
        CommandError::InvalidInput(error.to_string())
    }
}

impl Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
