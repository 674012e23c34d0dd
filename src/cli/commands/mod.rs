//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod browse;
pub mod config;
pub mod import;
pub mod recommend;
pub mod score;
pub mod search;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Recommend(args) => recommend::run(ctx, args),
        Commands::Browse(args) => browse::run(ctx, args),
        Commands::Score(args) => score::run(ctx, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
