//! Expansion state: which nodes currently show their children.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::instrument;

use crate::domain::entities::Node;

/// Per-node expanded/collapsed record.
///
/// Absence means collapsed; only explicitly set or pre-seeded ids are present.
/// Entries whose id no longer occurs in the tree are inert (reads return
/// false); callers that reload trees can drop them with [`ExpansionState::prune`].
///
/// All tree state mutation goes through this type. Each mutation is expected
/// to be followed by a full [`visible_rows`](crate::domain::visible_rows)
/// rebuild, so no stale row sequence is ever observable.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from an initial `id -> expanded` mapping, e.g. to pre-open branches.
    pub fn from_seed(seed: impl IntoIterator<Item = (String, bool)>) -> Self {
        Self {
            expanded: seed.into_iter().collect(),
        }
    }

    /// Flip the flag for `id`; an absent entry flips to expanded.
    ///
    /// Ids not present in any tree are accepted: the surrounding application
    /// may reference nodes that have not arrived yet.
    pub fn toggle(&mut self, id: &str) {
        let flag = self.expanded.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
    }

    /// Mark every node in the forest expanded, intermediate and leaf alike.
    #[instrument(level = "debug", skip_all)]
    pub fn expand_all(&mut self, forest: &[Node]) {
        let mut stack: Vec<&Node> = forest.iter().collect();
        while let Some(node) = stack.pop() {
            self.expanded.insert(node.id.clone(), true);
            stack.extend(node.children.iter());
        }
    }

    /// Clear the record; equivalent to "all collapsed".
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Stored flag, or false when the id was never set.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Drop entries whose id no longer occurs in the forest.
    #[instrument(level = "debug", skip_all)]
    pub fn prune(&mut self, forest: &[Node]) {
        let mut live: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&Node> = forest.iter().collect();
        while let Some(node) = stack.pop() {
            live.insert(node.id.as_str());
            stack.extend(node.children.iter());
        }
        self.expanded.retain(|id, _| live.contains(id.as_str()));
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
