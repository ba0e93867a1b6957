//! Typed failures returned by the orchestration and rendering paths.

use thiserror::Error;

/// Coarse category of a [`HarpiError`], for callers that map failures to
/// responses (e.g. 400 vs 502) without matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transform,
    Render,
}

/// Errors surfaced to the calling layer. None of these are retried.
#[derive(Debug, Error)]
pub enum HarpiError {
    /// The stored HAR is missing its log or has no entries.
    #[error("invalid HAR: {0}")]
    Validation(String),

    /// The external spec transformer failed; carries its message verbatim.
    #[error("spec transform failed: {0}")]
    Transform(String),

    /// A compiled sequence could not be rendered (duplicate or dangling participant).
    #[error("diagram render failed: {0}")]
    Render(String),
}

impl HarpiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HarpiError::Validation(_) => ErrorKind::Validation,
            HarpiError::Transform(_) => ErrorKind::Transform,
            HarpiError::Render(_) => ErrorKind::Render,
        }
    }
}
