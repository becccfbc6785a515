//! Model client abstraction: prompt string in, raw reply text out.
//!
//! The pipeline depends only on this text contract, not on any particular API
//! protocol. Implementations: [`OpenAiClient`] (real chat-completion calls)
//! and [`MockClient`] (canned reply for tests and offline runs).

mod mock;
mod openai;

pub use mock::MockClient;
pub use openai::{OpenAiClient, DEFAULT_MODEL};

// Re-exported so callers can build a client config without depending on
// async-openai directly.
pub use async_openai::config::OpenAIConfig;

use async_trait::async_trait;

use crate::error::Error;

/// A language-model completion endpoint.
///
/// `complete` sends one prompt and returns the assistant's raw reply text.
/// Any non-text outcome (transport failure, empty reply) is an
/// [`Error::Upstream`], which is terminal for the run.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, Error>;
}
