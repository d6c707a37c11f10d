//! Error types for the sw-app service layer.

use sw_core::CoreError;
use sw_line::ChainError;

/// Application error type shared by every frontend.
///
/// Chain rejections keep their typed kind so a frontend can map each one to
/// its own status and message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: u32 },

    #[error("Line name already exists: {0}")]
    DuplicateLine(String),

    #[error("Section rejected: {0}")]
    Chain(#[from] ChainError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for sw-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<sw_store::StoreError> for AppError {
    fn from(err: sw_store::StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}
