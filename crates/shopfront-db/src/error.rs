use mongodb::error::{ErrorKind, WriteFailure};
use shopfront_core::AppError;
use thiserror::Error;

const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Error)]
pub enum DbError {
    /// A unique index rejected the write. Carries the client-facing message.
    #[error("{0}")]
    Duplicate(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// Maps a failed insert, turning duplicate-key errors into
    /// [`DbError::Duplicate`] with `message`.
    pub fn from_insert(err: mongodb::error::Error, message: &str) -> Self {
        if is_duplicate_key(&err) {
            DbError::Duplicate(message.to_string())
        } else {
            DbError::Mongo(err)
        }
    }

    /// Duplicate keys are the caller's fault (400); everything else is ours.
    pub fn into_app_error(self) -> AppError {
        match self {
            DbError::Duplicate(message) => AppError::bad_request(anyhow::anyhow!(message)),
            other => AppError::internal(other),
        }
    }
}

pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}
