//! Flat table row model for arbitrarily deep hierarchies.
//!
//! Instead of indenting labels, depth is conveyed by a fixed-width *gutter*
//! (dot markers plus the expand/collapse control) and the label column shows a
//! compact *breadcrumb tail* of ancestor names. Text therefore never overflows
//! the column, no matter how deep the tree goes.
//!
//! The pipeline:
//!
//! 1. [`domain::attach_paths`] annotates every node with its ancestor-name path.
//! 2. [`domain::ExpansionState`] records which nodes currently show children.
//! 3. [`domain::visible_rows`] flattens the visible subset into ordered rows.
//! 4. [`render::gutter`] and [`render::collapse`] compute the bounded-width
//!    gutter and breadcrumb descriptors per row; [`render::columns`] fixes the
//!    column contract a renderer consumes.
//!
//! All traversals use explicit work stacks, so hierarchy depth is limited by
//! memory, not by the call stack.

pub mod cli;
pub mod domain;
pub mod render;
pub mod util;
