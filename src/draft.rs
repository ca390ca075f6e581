//! Draft state: per-category drafts, the global combined draft, and the
//! ordered set of active categories.
//!
//! The store is a pure state container. It performs no I/O and never reaches
//! across category boundaries; only the orchestrator reads all drafts at once,
//! at submission time.

use std::collections::HashMap;

use tracing::warn;
use uuid::Uuid;

/// A file attached to a draft. The id is generated at attachment time and is
/// unique for the lifetime of the draft holding it, so removal by id can never
/// touch two files at once.
#[derive(Debug, Clone)]
pub struct AttachedFile {
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size_bytes: content.len() as u64,
            mime_type: mime_type.into(),
            content,
        }
    }
}

/// A raw file handle as produced by a picker or drag-drop collaborator,
/// before validation.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

/// In-progress text plus attached files, for one category or for the
/// combined input.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub text: String,
    pub files: Vec<AttachedFile>,
}

impl Draft {
    /// Blank text and no files. Blank means whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.files.is_empty()
    }

    pub fn add_file(&mut self, file: AttachedFile) {
        self.files.push(file);
    }

    /// Removes exactly the file with the given id, leaving the order of the
    /// rest untouched. Returns the removed file, if any.
    pub fn remove_file(&mut self, file_id: Uuid) -> Option<AttachedFile> {
        let index = self.files.iter().position(|f| f.id == file_id)?;
        Some(self.files.remove(index))
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Addresses either the global combined draft or one category's draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftScope {
    Combined,
    Category(String),
}

impl DraftScope {
    pub fn category(id: impl Into<String>) -> Self {
        Self::Category(id.into())
    }
}

/// Holds one independent draft per active category plus the always-present
/// combined draft.
///
/// Invariant: the active id list and the draft map stay in bijection. A
/// category's draft is created empty the instant the category activates and
/// discarded irreversibly the instant it deactivates.
#[derive(Debug, Default)]
pub struct DraftStore {
    active: Vec<String>,
    drafts: HashMap<String, Draft>,
    combined: Draft,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a category, creating its empty draft. Idempotent; returns
    /// true only when the category was newly activated.
    pub fn activate(&mut self, id: &str) -> bool {
        if self.drafts.contains_key(id) {
            return false;
        }
        self.active.push(id.to_string());
        self.drafts.insert(id.to_string(), Draft::default());
        true
    }

    /// Deactivates a category and discards its draft. Returns true only when
    /// the category was active.
    pub fn deactivate(&mut self, id: &str) -> bool {
        if self.drafts.remove(id).is_none() {
            return false;
        }
        self.active.retain(|a| a != id);
        true
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.drafts.contains_key(id)
    }

    /// Active category ids in user selection order.
    pub fn active_ids(&self) -> &[String] {
        &self.active
    }

    pub fn draft(&self, id: &str) -> Option<&Draft> {
        self.drafts.get(id)
    }

    /// Replaces a category draft's text. Edits addressed to an inactive
    /// category are dropped; returns false in that case.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.drafts.get_mut(id) {
            Some(draft) => {
                draft.text = text.into();
                true
            }
            None => {
                warn!(category = id, "ignoring text edit for inactive category");
                false
            }
        }
    }

    /// Appends a file to a category draft, preserving upload order.
    pub fn add_file(&mut self, id: &str, file: AttachedFile) -> bool {
        match self.drafts.get_mut(id) {
            Some(draft) => {
                draft.add_file(file);
                true
            }
            None => {
                warn!(category = id, "ignoring file attachment for inactive category");
                false
            }
        }
    }

    pub fn remove_file(&mut self, id: &str, file_id: Uuid) -> Option<AttachedFile> {
        self.drafts.get_mut(id)?.remove_file(file_id)
    }

    pub fn combined(&self) -> &Draft {
        &self.combined
    }

    pub fn set_combined_text(&mut self, text: impl Into<String>) {
        self.combined.text = text.into();
    }

    pub fn add_combined_file(&mut self, file: AttachedFile) {
        self.combined.add_file(file);
    }

    pub fn remove_combined_file(&mut self, file_id: Uuid) -> Option<AttachedFile> {
        self.combined.remove_file(file_id)
    }

    /// Drops the combined draft's text and files. Used by the orchestrator's
    /// optimistic clear on send; category drafts are never cleared here.
    pub fn clear_combined(&mut self) {
        self.combined = Draft::default();
    }
}
