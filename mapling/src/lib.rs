//! mapling: turn a topic into an LLM-generated outline and save it as an
//! XMind mind map.
//!
//! The pipeline is straight-line: build a prompt for the topic, call a
//! chat-completion model, decode the reply into an [`OutlineNode`] tree,
//! and write the tree into a `.xmind` workbook on disk. Two reply formats
//! are supported ([`OutlineFormat::Json`] and [`OutlineFormat::Markdown`]);
//! both decoders converge on the same tree shape before the write.
//!
//! Components:
//! - [`prompt`]: embedded prompt templates, one per reply format.
//! - [`llm`]: [`llm::ModelClient`] trait with OpenAI and mock implementations.
//! - [`outline`]: the tree type and both decoders.
//! - [`xmind`]: workbook reader/writer for the XMind zip container.
//! - [`pipeline`]: wires the above into one run.

pub mod error;
pub mod llm;
pub mod outline;
pub mod pipeline;
pub mod prompt;
pub mod xmind;

pub use error::Error;
pub use outline::OutlineNode;
pub use pipeline::Pipeline;
pub use prompt::OutlineFormat;
