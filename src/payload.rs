//! Payload formatting: folds the combined draft and every active category
//! draft into the display string shown in the conversation and the machine
//! payload sent to the endpoint.
//!
//! Formatting is pure over the draft state; the only non-deterministic output
//! is the per-submission session id.

use uuid::Uuid;

use crate::catalog::CategoryCatalog;
use crate::draft::{Draft, DraftStore};

/// Origin tag for files attached to the combined draft.
pub const COMBINED_ORIGIN: &str = "combined";

/// One active category's raw text, in activation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub id: String,
    pub text: String,
}

/// One file in the outgoing payload, tagged with its origin (a category id or
/// [`COMBINED_ORIGIN`]) and its position within that origin's file sequence,
/// so the receiving service can reconstruct attribution.
#[derive(Debug, Clone)]
pub struct PayloadFile {
    pub origin: String,
    pub index: usize,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub content: Vec<u8>,
}

impl PayloadFile {
    /// Multipart part name: `<origin>_file_<index>`.
    pub fn part_name(&self) -> String {
        format!("{}_file_{}", self.origin, self.index)
    }
}

/// The canonical structured data for one submission.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    /// The combined draft's raw text.
    pub message: String,
    /// Unique per submission; never reused across concurrent or sequential
    /// submissions within a session.
    pub session_id: Uuid,
    pub category_inputs: Vec<CategoryInput>,
    pub files: Vec<PayloadFile>,
}

/// Display string plus machine payload for one submission.
#[derive(Debug, Clone)]
pub struct FormattedSubmission {
    pub display: String,
    pub payload: SubmissionPayload,
}

/// Builds the display string and machine payload from the current draft
/// state. Returns `None` when the combined draft and every active category
/// draft are simultaneously blank and file-less; the orchestrator treats that
/// as a validation failure rather than a submission.
pub fn format_submission(
    catalog: &CategoryCatalog,
    store: &DraftStore,
) -> Option<FormattedSubmission> {
    let combined = store.combined();
    let all_empty = combined.is_empty()
        && store
            .active_ids()
            .iter()
            .all(|id| store.draft(id).map(|d| d.is_empty()).unwrap_or(true));
    if all_empty {
        return None;
    }

    let display = render_display(catalog, store);

    let mut category_inputs = Vec::new();
    let mut files = Vec::new();
    collect_files(COMBINED_ORIGIN, combined, &mut files);
    for id in store.active_ids() {
        let Some(draft) = store.draft(id) else {
            continue;
        };
        category_inputs.push(CategoryInput {
            id: id.clone(),
            text: draft.text.clone(),
        });
        collect_files(id, draft, &mut files);
    }

    Some(FormattedSubmission {
        display,
        payload: SubmissionPayload {
            message: combined.text.clone(),
            session_id: Uuid::new_v4(),
            category_inputs,
            files,
        },
    })
}

fn collect_files(origin: &str, draft: &Draft, out: &mut Vec<PayloadFile>) {
    for (index, file) in draft.files.iter().enumerate() {
        out.push(PayloadFile {
            origin: origin.to_string(),
            index,
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size_bytes: file.size_bytes,
            content: file.content.clone(),
        });
    }
}

/// Concatenates the combined input first, then one block per non-empty active
/// category in activation order. Blocks are separated by exactly one blank
/// line; a category whose draft is blank and file-less contributes nothing,
/// including no blank line.
fn render_display(catalog: &CategoryCatalog, store: &DraftStore) -> String {
    let mut blocks = Vec::new();

    let combined = store.combined();
    let mut lines = Vec::new();
    if !combined.text.trim().is_empty() {
        lines.push(combined.text.clone());
    }
    if !combined.files.is_empty() {
        lines.push(combined.file_names().join(", "));
    }
    if !lines.is_empty() {
        blocks.push(render_block(lines));
    }

    for id in store.active_ids() {
        let Some(draft) = store.draft(id) else {
            continue;
        };
        if draft.is_empty() {
            continue;
        }
        let label = catalog.label_for(id).unwrap_or(id);
        let mut lines = vec![format!("{}:", label)];
        if !draft.text.trim().is_empty() {
            lines.push(draft.text.clone());
        }
        if !draft.files.is_empty() {
            lines.push(draft.file_names().join(", "));
        }
        blocks.push(render_block(lines));
    }

    blocks.join("\n")
}

fn render_block(lines: Vec<String>) -> String {
    let mut block = lines.join("\n");
    block.push('\n');
    block
}
