//! Gutter: the fixed-width depth indicator that replaces indentation.

/// Upper bound on depth dots; deeper rows get a `+N` badge instead.
///
/// This bound is what keeps the gutter column at a constant maximum width
/// no matter how deep the tree nests.
pub const MAX_GUIDES: usize = 6;

/// Expand/collapse control shown when a row has children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Collapsed,
    Expanded,
}

/// Descriptor for one row's gutter cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GutterCell {
    /// Depth dots to draw, at most [`MAX_GUIDES`]
    pub visible_dots: usize,
    /// Depth beyond [`MAX_GUIDES`]; rendered as a `+N` badge when > 0
    pub overflow: usize,
    /// Control glyph, present only when the node has children
    pub toggle: Option<Toggle>,
}

/// Compute the gutter descriptor for a row.
pub fn gutter(depth: usize, can_expand: bool, is_expanded: bool) -> GutterCell {
    let toggle = if can_expand {
        Some(if is_expanded {
            Toggle::Expanded
        } else {
            Toggle::Collapsed
        })
    } else {
        None
    };

    GutterCell {
        visible_dots: depth.min(MAX_GUIDES),
        overflow: depth.saturating_sub(MAX_GUIDES),
        toggle,
    }
}

impl GutterCell {
    /// Compact terminal rendition: dots, optional badge, control glyph.
    pub fn to_terminal(&self) -> String {
        let mut out = "·".repeat(self.visible_dots);
        if self.overflow > 0 {
            out.push_str(&format!("+{}", self.overflow));
        }
        match self.toggle {
            Some(Toggle::Expanded) => out.push('▾'),
            Some(Toggle::Collapsed) => out.push('▸'),
            None => {}
        }
        out
    }
}
