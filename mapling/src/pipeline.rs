//! One run: prompt → model → decoder → workbook.
//!
//! Control flow is straight-line with a single branch: was the reply decoded.
//! A decode failure is logged with the offending raw text and aborts the run
//! before anything touches the output file; there is no retry and no partial
//! write. The Markdown path cannot fail to decode (see [`outline::markdown`]),
//! so its runs only abort on upstream or write errors.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, trace};

use crate::error::Error;
use crate::llm::ModelClient;
use crate::outline::{self, OutlineNode};
use crate::prompt::{self, OutlineFormat};
use crate::xmind::Workbook;

/// Single-shot topic-to-mind-map pipeline.
pub struct Pipeline {
    client: Box<dyn ModelClient>,
    format: OutlineFormat,
    output: PathBuf,
}

impl Pipeline {
    pub fn new(
        client: Box<dyn ModelClient>,
        format: OutlineFormat,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            format,
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Runs the pipeline for one topic and returns the decoded tree (so the
    /// caller can print it). On success the workbook at `output` has gained
    /// one sheet titled after the tree's root.
    pub async fn run(&self, topic: &str) -> Result<OutlineNode, Error> {
        let prompt = prompt::build(self.format, topic);
        debug!(format = ?self.format, topic = %topic, "querying model");
        let reply = self.client.complete(&prompt).await?;
        trace!(reply = %reply, "raw model reply");

        let tree = match self.format {
            OutlineFormat::Json => outline::json::decode(&reply).inspect_err(|e| {
                if let Error::MalformedResponse { message, raw } = e {
                    error!(%message, %raw, "could not decode model reply");
                }
            })?,
            OutlineFormat::Markdown => {
                // The decoder's synthetic root has an empty title; the topic
                // becomes the root (and sheet) title.
                let mut tree = outline::markdown::decode(&reply);
                tree.title = topic.to_string();
                tree
            }
        };

        let mut workbook = Workbook::load_or_new(&self.output)?;
        workbook.add_outline(&tree);
        workbook.save(&self.output)?;
        info!(
            path = %self.output.display(),
            sheets = workbook.sheets().len(),
            nodes = tree.len(),
            "mind map saved"
        );
        Ok(tree)
    }
}
