//! Domain entities: core data structures

use serde::Deserialize;

/// A group in the organizational hierarchy.
///
/// Deserialized once from external input and treated as immutable afterwards.
/// `path` is derived by [`attach_paths`](crate::domain::attach_paths), never
/// authored: input data cannot set it. Children are exclusively owned by their
/// parent, which makes sharing and cycles unrepresentable.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Globally unique identifier, immutable once created
    pub id: String,
    /// Display label
    pub name: String,
    /// Number of users, 0 when absent in the input
    #[serde(default)]
    pub users: u64,
    /// Number of courses, 0 when absent in the input
    #[serde(default)]
    pub courses: u64,
    /// Ancestor names in root-to-parent order; empty for roots
    #[serde(skip)]
    pub path: Vec<String>,
    /// Child nodes in display order; absent in input means leaf
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            users: 0,
            courses: 0,
            path: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_metrics(mut self, users: u64, courses: u64) -> Self {
        self.users = users;
        self.courses = courses;
        self
    }

    /// Number of ancestors; equals `path.len()` once paths are attached.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
