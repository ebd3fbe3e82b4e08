//! Presentation descriptors consumed by the rendering collaborator.
//!
//! Everything here is a pure function of a row: no state, no side effects.

pub mod breadcrumb;
pub mod columns;
pub mod gutter;

pub use breadcrumb::{canonical_breadcrumb, collapse, Breadcrumb, KEEP, MAX_SEGMENT_CHARS};
pub use columns::{cell, columns, CellValue, ColumnKind, ColumnSpec, ColumnWidth};
pub use gutter::{gutter, GutterCell, Toggle, MAX_GUIDES};
