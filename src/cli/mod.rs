//! CLI argument parsing for tfprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tfprompt::config::CONFIG_ENV;

/// tfprompt: prompt catalog for agent-driven Terraform provider workflows.
///
/// Renders the system and task prompts an LLM agent is given when it
/// documents AWS provider resources or builds AWSCC provider examples.
#[derive(Parser, Debug)]
#[command(name = "tfprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: tfprompt.yaml in the current directory, if present).
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tfprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a prompt.
    ///
    /// Prints the rendered text to stdout, or writes it to --output.
    Render(RenderArgs),

    /// List catalog entries and the slots each one needs.
    List(ListArgs),

    /// Print a raw template, slots unexpanded.
    Show(ShowArgs),

    /// Render every catalog entry with sample values and report problems.
    Check,

    /// Show recent entries from the render log.
    History(HistoryArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Operation to render (system, create, update, delete, review, cleanup, summary).
    pub operation: String,

    /// Provider variant (standard or cloud-control). Defaults to the config's default_variant.
    #[arg(short, long)]
    pub variant: Option<String>,

    /// Terraform resource type, e.g. aws_batch_job_queue.
    #[arg(short, long)]
    pub resource_name: Option<String>,

    /// Directory the agent works in.
    #[arg(short, long)]
    pub working_directory: Option<String>,

    /// Extra slot value.
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Write the prompt to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Date to render instead of today (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Architecture to render instead of the host's.
    #[arg(long)]
    pub machine: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list this variant.
    #[arg(short, long)]
    pub variant: Option<String>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Operation to show.
    pub operation: String,

    /// Provider variant. Defaults to the config's default_variant.
    #[arg(short, long)]
    pub variant: Option<String>,
}

/// Arguments for the `history` command.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Number of most recent entries to show.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,
}

/// Parse a `KEY=VALUE` pair. The value may contain `=`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }

    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
