use thiserror::Error;

use super::models::ProjectId;

/// Errors that can occur during project store operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("{0}")]
    Validation(String),
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    #[error("{0}")]
    Internal(String),
}

impl ProjectError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
