//! Crate-wide error taxonomy.
//!
//! Two families, kept deliberately small:
//! - validation failures ([`RejectReason`], [`SendError::NoInput`]) recover
//!   locally and surface as notices;
//! - transport failures ([`SubmissionError`]) recover at the orchestrator
//!   boundary as a fallback assistant turn plus a notice.
//!
//! [`PromptforgeError`] aggregates both for embedders that want one error
//! type at their own boundary; `anyhow` is used at application-level seams
//! (configuration I/O).

use thiserror::Error;

pub use crate::api::client::SubmissionError;
pub use crate::app::SendError;
pub use crate::validate::RejectReason;

/// Umbrella error for embedding frontends.
#[derive(Debug, Error)]
pub enum PromptforgeError {
    #[error("file rejected: {0}")]
    FileRejected(#[from] RejectReason),

    #[error("send refused: {0}")]
    SendRefused(#[from] SendError),

    #[error("submission failed: {0}")]
    Submission(#[from] SubmissionError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for application-level operations.
pub type PromptforgeResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_converts() {
        let err: PromptforgeError = RejectReason::TooLarge.into();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_send_error_converts() {
        let err: PromptforgeError = SendError::AlreadySending.into();
        assert!(err.to_string().contains("already in progress"));
    }

    #[test]
    fn test_submission_error_converts() {
        let err: PromptforgeError = SubmissionError::Status {
            status_code: 503,
            message: "unavailable".to_string(),
        }
        .into();
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_config_error_display() {
        let err = PromptforgeError::Config("bad endpoint".to_string());
        assert!(err.to_string().contains("Configuration")
            || err.to_string().contains("configuration"));
    }
}
