//! Prompt templates for the two reply formats.
//!
//! Templates are embedded at compile time (canonical source:
//! `mapling/prompts/*.txt`) and take a single `{topic}` substitution.

use std::str::FromStr;

const JSON_TEMPLATE: &str = include_str!("../prompts/json_outline.txt");
const MARKDOWN_TEMPLATE: &str = include_str!("../prompts/markdown_outline.txt");

const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Which reply format to request from the model and decode afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutlineFormat {
    /// Structured `{title, subtopics}` JSON object.
    #[default]
    Json,
    /// `#`-heading outline, one heading per line.
    Markdown,
}

impl FromStr for OutlineFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("unknown outline format: {} (use json or markdown)", s)),
        }
    }
}

/// Builds the instruction prompt for the given format and topic.
pub fn build(format: OutlineFormat, topic: &str) -> String {
    let template = match format {
        OutlineFormat::Json => JSON_TEMPLATE,
        OutlineFormat::Markdown => MARKDOWN_TEMPLATE,
    };
    template.replace(TOPIC_PLACEHOLDER, topic)
}
