//! Promptforge: assemble a structured prompt from independently-editable
//! category sections, attach documents per category or globally, submit the
//! aggregate to a remote endpoint, and fold the reply into a conversation
//! history.
//!
//! Rendering is out of scope; frontends drive [`App`] and observe it through
//! [`Hooks`].

pub mod api;
pub mod app;
pub mod catalog;
pub mod conversation;
pub mod draft;
pub mod notify;
pub mod payload;
pub mod utils;
pub mod validate;

// Re-export commonly used types
pub use api::{HttpSubmissionClient, SubmissionClient, SubmissionError};
pub use app::{App, SendError, SendOutcome, SendState, FALLBACK_REPLY};
pub use catalog::{Category, CategoryCatalog};
pub use conversation::{ConversationLog, ConversationTurn};
pub use draft::{AttachedFile, Draft, DraftScope, DraftStore, FileUpload};
pub use notify::{Hooks, NullHooks, Severity};
pub use payload::{format_submission, FormattedSubmission, SubmissionPayload};
pub use utils::config::Config;
pub use utils::error::PromptforgeError;
pub use validate::{validate, RejectReason, ALLOWED_MIME_TYPES, MAX_FILE_SIZE_BYTES};
