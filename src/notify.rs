//! Collaborator callbacks: the seam between the core and whatever renders it.
//!
//! All callbacks are fire-and-forget; the core never consumes a return value.
//! Frontends implement [`Hooks`] to re-render sections, show toasts, and so
//! on. Every method has an empty default body so implementors only override
//! what they care about.

use crate::draft::{AttachedFile, Draft, DraftScope};
use crate::validate::RejectReason;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Callbacks raised by the orchestrator as state changes.
pub trait Hooks {
    /// A category was activated or deactivated.
    fn on_selection_change(&mut self, _category_id: &str, _active: bool) {}

    /// A draft's text or file list changed.
    fn on_draft_change(&mut self, _scope: &DraftScope, _draft: &Draft) {}

    /// A file passed validation and was attached.
    fn on_file_accepted(&mut self, _file: &AttachedFile) {}

    /// A file failed validation and was discarded.
    fn on_file_rejected(&mut self, _file_name: &str, _reason: &RejectReason) {}

    /// A short status message for the user.
    fn on_notify(&mut self, _message: &str, _severity: Severity) {}
}

/// Hooks implementation that ignores everything. Useful for headless use and
/// tests that don't observe callbacks.
#[derive(Debug, Default)]
pub struct NullHooks;

impl Hooks for NullHooks {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_null_hooks_accepts_all_callbacks() {
        let mut hooks = NullHooks;
        hooks.on_selection_change("role", true);
        hooks.on_draft_change(&DraftScope::Combined, &Draft::default());
        hooks.on_notify("hello", Severity::Info);
    }
}
