use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Caller input error. Never worth retrying.
    #[error("{0}")]
    InvalidOrder(String),
    #[error("duplicate order detected")]
    DuplicateOrder,
    #[error("Order storage error: {0}")]
    StorageFailure(String),
}

impl OrderError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOrder(reason.into())
    }

    /// True for errors caused by what the caller submitted.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidOrder(_) | Self::DuplicateOrder)
    }
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        Self::StorageFailure(err.to_string())
    }
}
