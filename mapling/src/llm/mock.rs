//! Canned-reply client for tests and offline runs.

use async_trait::async_trait;

use crate::error::Error;
use crate::llm::ModelClient;

/// Returns a fixed reply for every prompt, or a fixed upstream failure.
pub struct MockClient {
    reply: Result<String, String>,
}

impl MockClient {
    /// Client that answers every prompt with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
        }
    }

    /// Client whose every call fails with [`Error::Upstream`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
        }
    }
}

#[async_trait]
impl ModelClient for MockClient {
    async fn complete(&self, _prompt: &str) -> Result<String, Error> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(Error::Upstream(message.clone())),
        }
    }
}
