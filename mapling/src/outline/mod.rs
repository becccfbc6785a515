//! Normalized outline tree shared by both decoders.
//!
//! [`OutlineNode`] is the only entity in the system: a title plus an ordered
//! list of children (insertion order is document order and carries meaning;
//! it becomes the visual order in the final map). An empty `children` vec is
//! a leaf; the structure is a strict tree by construction.
//!
//! Decoders: [`json::decode`] for the `{title, subtopics}` reply shape,
//! [`markdown::decode`] for `#`-heading outlines.

pub mod json;
pub mod markdown;

use std::fmt;

/// One node of the outline tree: a title and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub title: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Node with no children (a leaf, until children are pushed).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total node count including self.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::len).sum::<usize>()
    }

    /// Re-serializes the tree as a heading outline: a node at depth `d` below
    /// this one gets `d` marker characters. The node itself (the root) is not
    /// emitted, matching the decoder's synthetic-root convention.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_markdown(1, &mut out);
        }
        out
    }

    fn write_markdown(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push(markdown::MARKER);
        }
        out.push(' ');
        out.push_str(&self.title);
        out.push('\n');
        for child in &self.children {
            child.write_markdown(depth + 1, out);
        }
    }

    fn fmt_at_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}{}", "  ".repeat(depth), self.title)?;
        for child in &self.children {
            child.fmt_at_depth(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented plain-text rendering (two spaces per level), used for the
/// console printout of the decoded tree.
impl fmt::Display for OutlineNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at_depth(f, 0)
    }
}
