//! Error type for one mapling run.
//!
//! Mirrors the failure taxonomy of the pipeline: the model reply could not be
//! decoded ([`Error::MalformedResponse`]), the model call itself failed
//! ([`Error::Upstream`]), or the workbook could not be read or written.
//! The Markdown decoder has no failure path at all; malformed heading input
//! silently yields a best-effort tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The model reply could not be decoded into an outline tree
    /// (invalid JSON, or a node without a string `title`). Carries the
    /// offending raw text so the caller can log it.
    #[error("malformed model response: {message}")]
    MalformedResponse { message: String, raw: String },

    /// The model call failed (network, auth, rate limit) or returned a
    /// non-text reply. Terminal for the run; no retry.
    #[error("model request failed: {0}")]
    Upstream(String),

    /// The mind-map workbook could not be read or written (bad archive,
    /// bad content.json, zip failure).
    #[error("mind-map document error: {0}")]
    DocumentWrite(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
