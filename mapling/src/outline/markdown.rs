//! Decode the heading-outline reply format: one topic per line, nesting depth
//! signaled by repeated `#` markers.
//!
//! The algorithm is a single scan with a stack of currently open nodes,
//! seeded with a synthetic empty-titled root. Two behaviors here are
//! deliberate and must not be "fixed" to a canonical depth-tracking model:
//!
//! 1. `level` is the count of `#` characters **anywhere** in the line, not
//!    just the leading run.
//! 2. The pop rule compares stack length against that raw count
//!    (`pop while stack_len > level`, with the root always occupying slot 1),
//!    so a level jump such as `#` directly to `###` nests the `###` heading
//!    under the `#` one, and the next `###` heading nests under *that*.
//!
//! Downstream consumers may depend on the exact shapes these rules produce.
//! There is no rejection path: a non-blank line with zero markers attaches to
//! the root, irregular nesting yields whatever the stack rule yields.
//!
//! Ownership: every node is owned by its parent's `children` vec; the "stack"
//! is a transient path of child indices from the root, discarded after the scan.

use crate::outline::OutlineNode;

/// Heading marker character.
pub const MARKER: char = '#';

/// Decodes a heading outline into a tree under a synthetic root with an empty
/// title (callers overwrite the title from other context, e.g. the user topic).
/// Blank lines have no effect. Infallible by design.
pub fn decode(text: &str) -> OutlineNode {
    let mut root = OutlineNode::new("");
    // Child-index path from the root to the innermost open node; the open-node
    // stack is conceptually [root, ..path] with length path.len() + 1.
    let mut path: Vec<usize> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let level = line.chars().filter(|&c| c == MARKER).count();
        let title = line
            .trim_matches(|c: char| c == MARKER || c.is_whitespace())
            .to_string();

        // Pop open nodes while the stack is longer than the heading level.
        // The root is never popped, so level 0 lines attach directly to it.
        path.truncate(level.saturating_sub(1));

        let parent = node_at_mut(&mut root, &path);
        parent.children.push(OutlineNode::new(title));
        path.push(parent.children.len() - 1);
    }
    root
}

fn node_at_mut<'a>(root: &'a mut OutlineNode, path: &[usize]) -> &'a mut OutlineNode {
    path.iter().fold(root, |node, &i| &mut node.children[i])
}
