//! Row model: the ordered, flattened sequence of currently visible nodes.

use tracing::instrument;

use crate::domain::entities::Node;
use crate::domain::expansion::ExpansionState;

/// One visible table row.
///
/// Borrows its node; the whole sequence is rebuilt after every expansion-state
/// change and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub node: &'a Node,
    /// Number of ancestors; roots are 0
    pub depth: usize,
    /// The node has at least one child
    pub can_expand: bool,
    /// Current flag from [`ExpansionState`]
    pub is_expanded: bool,
}

/// Depth-first pre-order flattening of the currently visible nodes.
///
/// A node's children are walked only when the node is expanded, so descendants
/// of a collapsed ancestor stay hidden regardless of their own flags. The
/// traversal is deterministic: identical forest and state always produce the
/// identical sequence. Explicit stack, no call-stack recursion.
#[instrument(level = "debug", skip_all)]
pub fn visible_rows<'a>(forest: &'a [Node], state: &ExpansionState) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    // Reverse so siblings pop in their given order
    let mut stack: Vec<(&'a Node, usize)> = forest.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let can_expand = !node.children.is_empty();
        let is_expanded = state.is_expanded(&node.id);
        rows.push(Row {
            node,
            depth,
            can_expand,
            is_expanded,
        });

        if can_expand && is_expanded {
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    rows
}
