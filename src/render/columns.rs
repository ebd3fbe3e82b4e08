//! Column contract: the closed set of columns a table renderer consumes.

use crate::domain::rows::Row;
use crate::render::breadcrumb::{self, Breadcrumb, KEEP};
use crate::render::gutter::{self, GutterCell};

/// The table columns. A closed set: renderers match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Gutter,
    Name,
    Users,
    Courses,
}

/// Sizing hint for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Character budget for terminal rendering
    Fixed(usize),
    Flexible,
}

/// Descriptor handed to the rendering collaborator.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    /// None renders an empty header cell
    pub header: Option<&'static str>,
    pub width: ColumnWidth,
}

/// Column order and sizing.
///
/// The gutter width covers [`MAX_GUIDES`](crate::render::MAX_GUIDES) dots, a
/// two-digit overflow badge and the toggle glyph, so it is constant no matter
/// how deep the tree nests.
pub fn columns() -> [ColumnSpec; 4] {
    [
        ColumnSpec {
            kind: ColumnKind::Gutter,
            header: None,
            width: ColumnWidth::Fixed(10),
        },
        ColumnSpec {
            kind: ColumnKind::Name,
            header: Some("Group"),
            width: ColumnWidth::Flexible,
        },
        ColumnSpec {
            kind: ColumnKind::Users,
            header: Some("Users"),
            width: ColumnWidth::Fixed(8),
        },
        ColumnSpec {
            kind: ColumnKind::Courses,
            header: Some("Courses"),
            width: ColumnWidth::Fixed(8),
        },
    ]
}

/// Typed value for one row/column intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Gutter(GutterCell),
    Name {
        breadcrumb: Breadcrumb,
        /// Shown in full, never truncated away
        name: String,
        /// Full ancestor chain incl. the name, for hover/inspection
        canonical: String,
    },
    Count(u64),
}

/// Produce the cell for `row` in column `kind`.
pub fn cell(row: &Row<'_>, kind: ColumnKind) -> CellValue {
    match kind {
        ColumnKind::Gutter => CellValue::Gutter(gutter::gutter(
            row.depth,
            row.can_expand,
            row.is_expanded,
        )),
        ColumnKind::Name => CellValue::Name {
            breadcrumb: breadcrumb::collapse(&row.node.path, KEEP),
            name: row.node.name.clone(),
            canonical: breadcrumb::canonical_breadcrumb(&row.node.path, &row.node.name),
        },
        ColumnKind::Users => CellValue::Count(row.node.users),
        ColumnKind::Courses => CellValue::Count(row.node.courses),
    }
}
