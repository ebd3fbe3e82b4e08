//! Breadcrumb tail: the truncated ancestor suffix shown before a node's name.

use itertools::Itertools;

/// Number of trailing ancestors kept when a path is collapsed.
pub const KEEP: usize = 2;

/// Per-segment display budget in characters; longer segments are cut with an
/// ellipsis. The node's own name is never subject to this.
pub const MAX_SEGMENT_CHARS: usize = 14;

/// Result of collapsing an ancestor path for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// True when leading ancestors were dropped; render an `… /` marker
    pub collapsed: bool,
    /// Trailing ancestors, order preserved, nearest-to-node last
    pub tail: Vec<String>,
}

/// Keep the last `keep` ancestors of `path`, flagging whether any were dropped.
pub fn collapse(path: &[String], keep: usize) -> Breadcrumb {
    let collapsed = path.len() > keep;
    let tail = if collapsed {
        path[path.len() - keep..].to_vec()
    } else {
        path.to_vec()
    };
    Breadcrumb { collapsed, tail }
}

/// Full `path + name` joined with ` / `.
///
/// This is the canonical breadcrumb, exposed as the auxiliary/accessible value
/// even when the visible tail is truncated.
pub fn canonical_breadcrumb(path: &[String], name: &str) -> String {
    path.iter().map(String::as_str).chain([name]).join(" / ")
}

impl Breadcrumb {
    /// Tail segments cut to [`MAX_SEGMENT_CHARS`] for display.
    pub fn display_tail(&self) -> Vec<String> {
        self.tail
            .iter()
            .map(|segment| truncate_segment(segment, MAX_SEGMENT_CHARS))
            .collect()
    }
}

/// Cut a segment to `max_chars` characters, ellipsis included when cut.
pub fn truncate_segment(segment: &str, max_chars: usize) -> String {
    if segment.chars().count() <= max_chars {
        return segment.to_string();
    }
    let kept: String = segment.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
