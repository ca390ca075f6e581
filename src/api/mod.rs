//! Remote endpoint communication.

pub mod client;
pub mod http_client;

pub use client::{
    normalize_reply, HttpSubmissionClient, SubmissionClient, SubmissionError, DEFAULT_ACK_REPLY,
};
