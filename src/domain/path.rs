//! Path attachment: annotate every node with its ancestor-name path.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::entities::Node;
use crate::domain::error::{DomainError, DomainResult};

/// Returns a new forest where every node carries its ancestor-name path.
///
/// Roots get an empty path; every child's path is the parent's path plus the
/// parent's name. The input is not mutated. Traversal uses an explicit work
/// stack: hierarchy depth is unbounded and must not be limited by the call
/// stack.
///
/// Fails fast on the first duplicate id found anywhere in the forest.
#[instrument(level = "debug", skip(forest))]
pub fn attach_paths(forest: &[Node]) -> DomainResult<Vec<Node>> {
    let mut annotated = forest.to_vec();
    let mut seen_ids: HashSet<String> = HashSet::new();

    // Push roots in reverse for left-to-right visitation order
    let mut stack: Vec<(&mut Node, Vec<String>)> = annotated
        .iter_mut()
        .rev()
        .map(|node| (node, Vec::new()))
        .collect();

    while let Some((node, path)) = stack.pop() {
        if !seen_ids.insert(node.id.clone()) {
            return Err(DomainError::DuplicateId(node.id.clone()));
        }

        let mut child_path = path.clone();
        child_path.push(node.name.clone());
        node.path = path;

        for child in node.children.iter_mut().rev() {
            stack.push((child, child_path.clone()));
        }
    }

    Ok(annotated)
}
