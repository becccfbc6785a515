//! Decode the structured reply format: a single JSON object shaped as
//! `{ "title": string, "subtopics": [ <same shape>, ... ] }` at every depth.
//!
//! A missing `subtopics` array means "no children", not an error. A missing or
//! non-string `title`, like any other JSON problem, surfaces as
//! [`Error::MalformedResponse`] with the offending text attached; the caller
//! logs it and the run aborts without writing anything. No fence stripping,
//! no repair attempts.

use serde::Deserialize;

use crate::error::Error;
use crate::outline::OutlineNode;

#[derive(Deserialize)]
struct RawTopic {
    title: String,
    #[serde(default)]
    subtopics: Vec<RawTopic>,
}

impl From<RawTopic> for OutlineNode {
    fn from(raw: RawTopic) -> Self {
        OutlineNode {
            title: raw.title,
            children: raw.subtopics.into_iter().map(OutlineNode::from).collect(),
        }
    }
}

/// Decodes a JSON model reply into an outline tree mirroring the `subtopics`
/// nesting exactly (any depth, child order preserved).
pub fn decode(text: &str) -> Result<OutlineNode, Error> {
    let raw: RawTopic = serde_json::from_str(text).map_err(|e| Error::MalformedResponse {
        message: e.to_string(),
        raw: text.to_string(),
    })?;
    Ok(raw.into())
}
