//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Render deep hierarchies as flat tables: depth gutter + breadcrumb tails
#[derive(Parser, Debug)]
#[command(name = "treegrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the flat table for a group hierarchy
    Table {
        /// JSON file holding the group forest
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Expand these node ids (repeatable)
        #[arg(short, long = "expand", conflicts_with_all = ["expand_all", "state"])]
        expand: Vec<String>,

        /// Expand every node
        #[arg(long, conflicts_with_all = ["expand", "state"])]
        expand_all: bool,

        /// Seed expansion state from a JSON id->bool map
        #[arg(long, value_hint = ValueHint::FilePath, conflicts_with_all = ["expand", "expand_all"])]
        state: Option<PathBuf>,
    },

    /// Show the raw hierarchy as a tree
    Tree {
        /// JSON file holding the group forest
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print each leaf's full breadcrumb
    Paths {
        /// JSON file holding the group forest
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}
