//! Command dispatch for the demo binary.
//!
//! This is the rendering collaborator: it consumes the row sequence and the
//! per-row gutter/breadcrumb descriptors and draws a terminal table. All tree
//! logic lives in the domain and render layers.

use std::fs;
use std::path::Path;

use colored::Colorize;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{attach_paths, visible_rows, ExpansionState, Node};
use crate::render::{canonical_breadcrumb, cell, columns, CellValue, ColumnWidth};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Table {
            file,
            expand,
            expand_all,
            state,
        }) => _table(file, expand, *expand_all, state.as_deref()),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Paths { file }) => _paths(file),
        None => Ok(()),
    }
}

/// Read and annotate a forest from a JSON file.
fn load_forest(path: &Path) -> CliResult<Vec<Node>> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let forest: Vec<Node> = serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(attach_paths(&forest)?)
}

fn load_state(path: &Path) -> CliResult<ExpansionState> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// One formatted table cell: colored text plus its visible width.
/// ANSI escapes defeat format-width padding, so padding happens manually.
struct RenderedCell {
    text: String,
    width: usize,
}

fn render_cell(value: CellValue) -> RenderedCell {
    match value {
        CellValue::Gutter(gutter) => {
            let plain = gutter.to_terminal();
            RenderedCell {
                width: plain.chars().count(),
                text: plain.dimmed().to_string(),
            }
        }
        CellValue::Name {
            breadcrumb, name, ..
        } => {
            let mut plain = String::new();
            let mut text = String::new();
            if breadcrumb.collapsed {
                plain.push_str("… / ");
                text.push_str(&"… / ".dimmed().to_string());
            }
            for segment in breadcrumb.display_tail() {
                let part = format!("{} / ", segment);
                plain.push_str(&part);
                text.push_str(&part.dimmed().to_string());
            }
            plain.push_str(&name);
            text.push_str(&name.bold().to_string());
            RenderedCell {
                width: plain.chars().count(),
                text,
            }
        }
        CellValue::Count(n) => {
            let plain = n.to_string();
            RenderedCell {
                width: plain.chars().count(),
                text: plain,
            }
        }
    }
}

#[instrument]
fn _table(
    file: &Path,
    expand: &[String],
    expand_all: bool,
    state_file: Option<&Path>,
) -> CliResult<()> {
    debug!("file: {:?}, expand_all: {}", file, expand_all);
    let forest = load_forest(file)?;

    let mut state = match state_file {
        Some(path) => load_state(path)?,
        None => ExpansionState::from_seed(expand.iter().map(|id| (id.clone(), true))),
    };
    if expand_all {
        state.expand_all(&forest);
    }

    let rows = visible_rows(&forest, &state);
    let specs = columns();

    let rendered: Vec<Vec<RenderedCell>> = rows
        .iter()
        .map(|row| {
            specs
                .iter()
                .map(|spec| render_cell(cell(row, spec.kind)))
                .collect()
        })
        .collect();

    // Fixed columns keep their budget; flexible ones grow to the widest cell
    let widths: Vec<usize> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| match spec.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flexible => rendered
                .iter()
                .map(|cells| cells[i].width)
                .chain(spec.header.map(str::len))
                .max()
                .unwrap_or(0),
        })
        .collect();

    let header_line: Vec<String> = specs
        .iter()
        .zip(&widths)
        .map(|(spec, width)| {
            let label = spec.header.unwrap_or("");
            format!("{}{}", label.bold(), " ".repeat(width.saturating_sub(label.len())))
        })
        .collect();
    output::info(&header_line.join("  "));

    for cells in &rendered {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                format!("{}{}", cell.text, " ".repeat(width.saturating_sub(cell.width)))
            })
            .collect();
        output::info(&line.join("  ").trim_end());
    }

    Ok(())
}

fn to_termtree(node: &Node) -> Tree<String> {
    Tree::new(node.name.clone()).with_leaves(node.children.iter().map(to_termtree))
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let forest = load_forest(file)?;
    output::header(&format!("Found {} trees:\n", forest.len()));
    for root in &forest {
        output::info(&to_termtree(root));
    }
    Ok(())
}

#[instrument]
fn _paths(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let forest = load_forest(file)?;

    let mut stack: Vec<&Node> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            output::info(&canonical_breadcrumb(&node.path, &node.name));
        } else {
            stack.extend(node.children.iter().rev());
        }
    }
    Ok(())
}
