//! The orchestrator: wires the draft store, validator, formatter, submission
//! client, and conversation log together, and owns the submission state
//! machine.
//!
//! One submission may be in flight at a time. The network call is the only
//! suspension point; every other operation mutates state synchronously, so
//! drafts and the log need no locking.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::client::{HttpSubmissionClient, SubmissionClient};
use crate::api::http_client::{self, SubmitClientConfig};
use crate::catalog::CategoryCatalog;
use crate::conversation::ConversationLog;
use crate::draft::{AttachedFile, DraftScope, DraftStore, FileUpload};
use crate::notify::{Hooks, Severity};
use crate::payload::{format_submission, FormattedSubmission};
use crate::utils::config::Config;
use crate::validate::validate;

/// Assistant text shown when a submission fails. The raw error goes to the
/// notice, never into the conversation.
pub const FALLBACK_REPLY: &str =
    "Sorry, something went wrong while sending your request. Please try again.";

const NO_INPUT_NOTICE: &str = "Nothing to send yet. Add some input first.";
const ALREADY_SENDING_NOTICE: &str = "A submission is already in progress.";
const REPLY_RECEIVED_NOTICE: &str = "Reply received.";

/// Submission state machine. Cycles Idle -> Submitting -> Idle for the life
/// of the session; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Submitting,
}

/// Why a send request was refused before anything was transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("a submission is already in progress")]
    AlreadySending,
    #[error("no input to send")]
    NoInput,
}

/// How a completed send resolved. Both variants leave the machine Idle and
/// the conversation usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The endpoint replied; its normalized text was appended.
    Replied,
    /// The submission failed; the fallback assistant turn was appended.
    Failed,
}

/// Session-scoped application core. Constructed once per session and torn
/// down with it; all mutable state lives behind this one value.
pub struct App<C, H> {
    catalog: CategoryCatalog,
    drafts: DraftStore,
    log: ConversationLog,
    client: C,
    hooks: H,
    state: SendState,
}

impl<C: SubmissionClient, H: Hooks> App<C, H> {
    pub fn new(catalog: CategoryCatalog, client: C, hooks: H) -> Self {
        Self {
            catalog,
            drafts: DraftStore::new(),
            log: ConversationLog::new(),
            client,
            hooks,
            state: SendState::Idle,
        }
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    pub fn conversation(&self) -> &ConversationLog {
        &self.log
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    /// The collaborator hooks handed to [`App::new`], for frontends that need
    /// to reach back into their own observer.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Handles a selection-toggle event from the category checklist.
    pub fn toggle_category(&mut self, id: &str) {
        let activate = !self.drafts.is_active(id);
        self.set_category_active(id, activate);
    }

    /// Activates or deactivates a category. Redundant requests are ignored
    /// and fire no callback.
    pub fn set_category_active(&mut self, id: &str, active: bool) {
        let changed = if active {
            self.drafts.activate(id)
        } else {
            self.drafts.deactivate(id)
        };
        if changed {
            self.hooks.on_selection_change(id, active);
        }
    }

    /// Replaces one category draft's text. Edits to inactive categories are
    /// dropped by the store (with a warning).
    pub fn set_category_text(&mut self, id: &str, text: impl Into<String>) {
        if self.drafts.set_text(id, text) {
            self.notify_draft_change(&DraftScope::category(id));
        }
    }

    pub fn set_combined_text(&mut self, text: impl Into<String>) {
        self.drafts.set_combined_text(text);
        self.notify_draft_change(&DraftScope::Combined);
    }

    /// Validates and attaches one file. Returns the attachment id, or `None`
    /// when the file was rejected (the reason is surfaced through the hooks)
    /// or the target category is inactive.
    pub fn attach_file(&mut self, scope: &DraftScope, upload: FileUpload) -> Option<Uuid> {
        if let Err(reason) = validate(&upload.mime_type, upload.size_bytes()) {
            self.hooks.on_file_rejected(&upload.name, &reason);
            self.hooks.on_notify(
                &format!("{} was not attached: {}", upload.name, reason),
                Severity::Error,
            );
            return None;
        }

        if let DraftScope::Category(id) = scope {
            if !self.drafts.is_active(id) {
                warn!(category = %id, "dropping attachment for inactive category");
                return None;
            }
        }

        let file = AttachedFile::new(upload.name, upload.mime_type, upload.content);
        let file_id = file.id;
        self.hooks.on_file_accepted(&file);
        self.hooks
            .on_notify(&format!("Attached {}", file.name), Severity::Success);

        match scope {
            DraftScope::Combined => self.drafts.add_combined_file(file),
            DraftScope::Category(id) => {
                self.drafts.add_file(id, file);
            }
        }
        self.notify_draft_change(scope);
        Some(file_id)
    }

    /// Attaches a batch of files, validating each independently; rejection of
    /// one does not block acceptance of the others.
    pub fn attach_files(
        &mut self,
        scope: &DraftScope,
        uploads: Vec<FileUpload>,
    ) -> Vec<Option<Uuid>> {
        uploads
            .into_iter()
            .map(|upload| self.attach_file(scope, upload))
            .collect()
    }

    /// Removes one attachment by id. No-op when the id is unknown.
    pub fn remove_file(&mut self, scope: &DraftScope, file_id: Uuid) -> Option<AttachedFile> {
        let removed = match scope {
            DraftScope::Combined => self.drafts.remove_combined_file(file_id),
            DraftScope::Category(id) => self.drafts.remove_file(id, file_id),
        };
        if removed.is_some() {
            self.notify_draft_change(scope);
        }
        removed
    }

    /// Submits the current draft state.
    ///
    /// Refuses with [`SendError::AlreadySending`] while a submission is in
    /// flight and [`SendError::NoInput`] when everything is blank; neither
    /// appends a turn. Otherwise the display string becomes a user turn, the
    /// combined draft is cleared (optimistically, independent of the outcome;
    /// category drafts are kept), and the reply or the fallback text becomes
    /// an assistant turn.
    pub async fn send(&mut self) -> Result<SendOutcome, SendError> {
        if self.state == SendState::Submitting {
            self.hooks.on_notify(ALREADY_SENDING_NOTICE, Severity::Error);
            return Err(SendError::AlreadySending);
        }

        let Some(FormattedSubmission { display, payload }) =
            format_submission(&self.catalog, &self.drafts)
        else {
            self.hooks.on_notify(NO_INPUT_NOTICE, Severity::Error);
            return Err(SendError::NoInput);
        };

        self.state = SendState::Submitting;
        self.log.push_user(display);
        self.drafts.clear_combined();
        self.notify_draft_change(&DraftScope::Combined);
        info!(session_id = %payload.session_id, "submission started");

        let outcome = match self.client.submit(&payload).await {
            Ok(reply) => {
                self.log.push_assistant(reply);
                self.hooks.on_notify(REPLY_RECEIVED_NOTICE, Severity::Success);
                SendOutcome::Replied
            }
            Err(err) => {
                warn!(session_id = %payload.session_id, error = %err, "submission failed");
                self.log.push_assistant(FALLBACK_REPLY);
                self.hooks
                    .on_notify(&format!("Submission failed: {}", err), Severity::Error);
                SendOutcome::Failed
            }
        };

        self.state = SendState::Idle;
        Ok(outcome)
    }

    fn notify_draft_change(&mut self, scope: &DraftScope) {
        let draft = match scope {
            DraftScope::Combined => Some(self.drafts.combined()),
            DraftScope::Category(id) => self.drafts.draft(id),
        };
        if let Some(draft) = draft {
            self.hooks.on_draft_change(scope, draft);
        }
    }
}

impl<H: Hooks> App<HttpSubmissionClient, H> {
    /// Production wiring: catalog and endpoint from configuration, transport
    /// built with the configured timeouts.
    pub fn from_config(config: &Config, hooks: H) -> anyhow::Result<Self> {
        let catalog = config.catalog()?;
        let transport = http_client::create_submit_client(SubmitClientConfig::with_timeouts(
            config.endpoint.timeout_secs,
            config.endpoint.connect_timeout_secs,
        ))?;
        let client = HttpSubmissionClient::with_client(transport, config.endpoint.url.clone());
        Ok(Self::new(catalog, client, hooks))
    }
}
