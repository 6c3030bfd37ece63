//! Command dispatch

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::builder::TreeBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs, OrderKind};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, LayoutKind, Settings};
use crate::tree::BinaryTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Render { input, layout } => {
            let settings = load_settings(cli)?;
            render(&settings, input, *layout)
        }
        Commands::Orders { input, only } => {
            let settings = load_settings(cli)?;
            orders(&settings, input, *only)
        }
        Commands::Check { input } => {
            let settings = load_settings(cli)?;
            check(&settings, input)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_show(cli),
            ConfigCommands::Path => config_path(),
        },
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = match cli.config.as_deref() {
        Some(path) => Settings::load_from(Some(path)),
        None => Settings::load(),
    }
    .map_err(config_err)?;
    debug!(?settings, "effective settings");
    Ok(settings)
}

#[instrument(skip(settings))]
fn render(settings: &Settings, input: &InputArgs, layout: Option<LayoutKind>) -> CliResult<()> {
    let (pre, inorder) = read_orders(input)?;
    let tree = build_tree(settings, &pre, &inorder)?;
    let rendered = match layout.unwrap_or(settings.layout) {
        LayoutKind::Vertical => tree.render_vertical(),
        LayoutKind::Horizontal => tree.render_horizontal(),
        LayoutKind::Symmetric => tree.render_symmetric(),
    };
    output::block(&rendered);
    Ok(())
}

#[instrument(skip(settings))]
fn orders(settings: &Settings, input: &InputArgs, only: Option<OrderKind>) -> CliResult<()> {
    let (pre, inorder) = read_orders(input)?;
    let tree = build_tree(settings, &pre, &inorder)?;
    match only {
        Some(kind) => output::info(sequence(&tree, kind).trim_end()),
        None => {
            output::action("level", tree.level_order().trim_end());
            output::action("pre", tree.pre_order().trim_end());
            output::action("in", tree.in_order().trim_end());
            output::action("post", tree.post_order().trim_end());
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn check(settings: &Settings, input: &InputArgs) -> CliResult<()> {
    let (pre, inorder) = read_orders(input)?;
    let tree = build_tree(settings, &pre, &inorder)?;
    output::success(&format!(
        "{} labels form a valid tree (depth {})",
        tree.node_count(),
        tree.depth()
    ));
    Ok(())
}

fn config_show(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let toml = settings.to_toml().map_err(config_err)?;
    output::block(&toml);
    Ok(())
}

fn config_path() -> CliResult<()> {
    let path = config::global_config_path().ok_or_else(|| CliError::Config {
        message: "cannot determine the configuration directory".to_string(),
    })?;
    output::info(&path.display());
    Ok(())
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn build_tree(settings: &Settings, pre: &[String], inorder: &[String]) -> CliResult<BinaryTree> {
    let builder = TreeBuilder::with_max_depth(settings.max_depth);
    Ok(BinaryTree::from_orders_with(&builder, pre, inorder)?)
}

fn sequence(tree: &BinaryTree, kind: OrderKind) -> String {
    match kind {
        OrderKind::Level => tree.level_order(),
        OrderKind::Pre => tree.pre_order(),
        OrderKind::In => tree.in_order(),
        OrderKind::Post => tree.post_order(),
    }
}

/// Resolve the two label sequences from the flags, a file, or stdin.
fn read_orders(input: &InputArgs) -> CliResult<(Vec<String>, Vec<String>)> {
    if let (Some(pre), Some(inorder)) = (&input.pre, &input.inorder) {
        return Ok((parse_labels(pre), parse_labels(inorder)));
    }

    let Some(path) = &input.file else {
        return Err(CliError::Usage(
            "provide an input file or both --pre and --in".to_string(),
        ));
    };

    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| io_err(path, source))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| io_err(path, source))?
    };
    parse_order_file(&content)
}

/// Parse an order file: comment (`#`) and blank lines are skipped, the
/// first significant line holds the pre-order labels, the second the
/// in-order labels. A file without significant lines is the empty tree.
fn parse_order_file(content: &str) -> CliResult<(Vec<String>, Vec<String>)> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    match (lines.next(), lines.next()) {
        (Some(pre), Some(inorder)) => Ok((parse_labels(pre), parse_labels(inorder))),
        (None, _) => Ok((Vec::new(), Vec::new())),
        (Some(_), None) => Err(CliError::Input(
            "expected two label lines, found only one".to_string(),
        )),
    }
}

/// Split a label line on whitespace and commas.
fn parse_labels(line: &str) -> Vec<String> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn config_err(e: impl std::fmt::Display) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}

fn io_err(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}
