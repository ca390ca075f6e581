//! The submission client: one multipart `POST` per submission, reply-shape
//! normalization, and the typed failure surface the orchestrator consumes.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::api::http_client;
use crate::payload::SubmissionPayload;

/// Reply used when the endpoint answers with valid JSON that carries no
/// `output` field. Not an error; the service acknowledged the submission.
pub const DEFAULT_ACK_REPLY: &str = "Your request was received.";

/// Transport and protocol failures. Everything the endpoint can do wrong
/// resolves to one of these; nothing escapes the client uncaught.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("endpoint returned status {status_code}: {message}")]
    Status { status_code: u16, message: String },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Seam between the orchestrator and the transport, so tests can substitute
/// the network with a scripted reply.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Sends the payload and resolves to the normalized reply text, or a
    /// [`SubmissionError`]. Exactly one attempt; no retry, no streaming.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<String, SubmissionError>;
}

/// Production client: multipart POST to a single fixed endpoint URL.
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    client: Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    /// Client against the given endpoint, using the shared pooled transport.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: http_client::get_submit_client().clone(),
            endpoint: endpoint.into(),
        }
    }

    /// Client with explicit transport settings, for callers that configure
    /// timeouts.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Multipart form per the endpoint contract: `combinedChatInput`,
    /// `sessionId`, `categoryInputs` as a JSON-encoded text-only map, and one
    /// binary part per file named `<origin>_file_<index>`.
    fn build_form(payload: &SubmissionPayload) -> Result<Form, SubmissionError> {
        let mut inputs = serde_json::Map::new();
        for input in &payload.category_inputs {
            inputs.insert(input.id.clone(), Value::String(input.text.clone()));
        }

        let mut form = Form::new()
            .text("combinedChatInput", payload.message.clone())
            .text("sessionId", payload.session_id.to_string())
            .text("categoryInputs", Value::Object(inputs).to_string());

        for file in &payload.files {
            let part = Part::bytes(file.content.clone())
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)?;
            form = form.part(file.part_name(), part);
        }

        Ok(form)
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<String, SubmissionError> {
        let form = Self::build_form(payload)?;
        debug!(
            session_id = %payload.session_id,
            categories = payload.category_inputs.len(),
            files = payload.files.len(),
            "submitting prompt"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Status {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SubmissionError::MalformedBody(e.to_string()))?;
        let reply = normalize_reply(&body);
        debug!(session_id = %payload.session_id, "reply normalized");
        Ok(reply)
    }
}

/// Folds the endpoint's heterogeneous reply shapes into one string:
/// an array uses the first element's `output`, a single object uses its
/// `output`, and anything else becomes the generic acknowledgement.
pub fn normalize_reply(body: &Value) -> String {
    let output = match body {
        Value::Array(items) => items.first().and_then(|item| item.get("output")),
        Value::Object(_) => body.get("output"),
        _ => None,
    };
    output
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_ACK_REPLY.to_string())
}
