//! Unified error handling.
//!
//! Store lookups and mutations fail with `NotFound`; building a store from
//! existing records can fail with `DuplicateId`, and id assignment with
//! `IdSpaceExhausted`. `Serialization` is raised when command output is
//! rendered.

use domain::UserId;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("User {0} not found")]
    NotFound(UserId),

    #[error("Duplicate user id {0}")]
    DuplicateId(UserId),

    #[error("No user ids left to assign")]
    IdSpaceExhausted,

    // Output
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DuplicateId(_) => "DUPLICATE_ID",
            AppError::IdSpaceExhausted => "ID_SPACE_EXHAUSTED",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check whether this is a missing-record error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T> {
        self.ok_or(AppError::NotFound(id))
    }
}
