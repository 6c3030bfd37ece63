//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::LayoutKind;

/// Rebuild binary trees from pre-order and in-order traversals and draw them as ASCII art
#[derive(Parser, Debug)]
#[command(name = "retree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Read settings from this file instead of the global config
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the tree and draw it
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Layout to draw (default from settings)
        #[arg(short, long, value_enum)]
        layout: Option<LayoutKind>,
    },

    /// Print the four linearizations of the rebuilt tree
    Orders {
        #[command(flatten)]
        input: InputArgs,

        /// Print a single linearization, without its label
        #[arg(long, value_enum)]
        only: Option<OrderKind>,
    },

    /// Validate a pre-order/in-order pair without drawing anything
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where the two label sequences come from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file, "-" for stdin: first significant line holds the
    /// pre-order labels, the second the in-order labels
    #[arg(value_hint = ValueHint::FilePath, conflicts_with_all = ["pre", "inorder"])]
    pub file: Option<PathBuf>,

    /// Pre-order labels, split on whitespace and commas
    #[arg(long, requires = "inorder")]
    pub pre: Option<String>,

    /// In-order labels, split on whitespace and commas
    #[arg(long = "in", requires = "pre")]
    pub inorder: Option<String>,
}

/// Linearization selectable for `orders --only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderKind {
    /// Breadth-first, left to right per level
    Level,
    /// Visit, left, right
    Pre,
    /// Left, visit, right
    In,
    /// Left, right, visit
    Post,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Show config file path
    Path,
}
