//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;
pub mod render;

/// Cookrank - fuzzy search and "more like this" ranking for recipes and blog posts
#[derive(Parser, Debug)]
#[command(name = "cookrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/cookrank/config.toml, then ./cookrank.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Content store: a .json file or a SQLite database (overrides store.path)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective output format.
    ///
    /// `--output-format` wins over `--machine`; the default is human.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if let Some(fmt) = self.output_format {
            return fmt;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search recipes or blog posts (blank query lists newest first)
    Search(commands::search::SearchArgs),

    /// Show items similar to a recipe or blog post
    Recommend(commands::recommend::RecommendArgs),

    /// List recipes or blog posts, newest first
    Browse(commands::browse::BrowseArgs),

    /// Score the similarity of two strings
    Score(commands::score::ScoreArgs),

    /// Import a JSON array of content into the SQLite store
    Import(commands::import::ImportArgs),

    /// Print the effective configuration
    Config(commands::config::ConfigArgs),
}
