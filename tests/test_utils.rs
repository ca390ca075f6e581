//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use promptforge::draft::{Draft, DraftScope};
use promptforge::payload::SubmissionPayload;
use promptforge::{
    AttachedFile, FileUpload, Hooks, RejectReason, Severity, SubmissionClient, SubmissionError,
};

/// Hooks implementation that records every callback for later assertions.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    pub notices: Vec<(String, Severity)>,
    pub selections: Vec<(String, bool)>,
    pub accepted: Vec<String>,
    pub rejected: Vec<(String, RejectReason)>,
    pub draft_changes: usize,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_notice(&self) -> Option<&(String, Severity)> {
        self.notices.last()
    }

    pub fn has_notice_containing(&self, needle: &str) -> bool {
        self.notices.iter().any(|(message, _)| message.contains(needle))
    }
}

impl Hooks for RecordingHooks {
    fn on_selection_change(&mut self, category_id: &str, active: bool) {
        self.selections.push((category_id.to_string(), active));
    }

    fn on_draft_change(&mut self, _scope: &DraftScope, _draft: &Draft) {
        self.draft_changes += 1;
    }

    fn on_file_accepted(&mut self, file: &AttachedFile) {
        self.accepted.push(file.name.clone());
    }

    fn on_file_rejected(&mut self, file_name: &str, reason: &RejectReason) {
        self.rejected.push((file_name.to_string(), reason.clone()));
    }

    fn on_notify(&mut self, message: &str, severity: Severity) {
        self.notices.push((message.to_string(), severity));
    }
}

/// Submission client with a scripted outcome, no network.
pub struct StubClient {
    reply: Result<String, u16>,
}

impl StubClient {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
        }
    }

    pub fn failing_with_status(status_code: u16) -> Self {
        Self {
            reply: Err(status_code),
        }
    }
}

#[async_trait]
impl SubmissionClient for StubClient {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<String, SubmissionError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status_code) => Err(SubmissionError::Status {
                status_code: *status_code,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

pub fn text_upload(name: &str, content: &str) -> FileUpload {
    FileUpload::new(name, "text/plain", content.as_bytes().to_vec())
}

pub fn pdf_upload(name: &str, size_bytes: usize) -> FileUpload {
    FileUpload::new(name, "application/pdf", vec![0u8; size_bytes])
}
