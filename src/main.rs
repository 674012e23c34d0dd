//! cookrank - fuzzy search and similar-content ranking for recipes and blog posts

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cookrank::Result;
use cookrank::app::AppContext;
use cookrank::cli::output::{emit_json, robot_error_structured};
use cookrank::cli::{Cli, OutputFormat};
use cookrank::error::RankError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.output_format();
    if !format.use_colors() {
        colored::control::set_override(false);
    }
    init_tracing(&cli, format);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    cookrank::cli::commands::run(&ctx, &cli.command)
}

fn report(err: &RankError, format: OutputFormat) {
    if format.is_machine_readable() {
        // JSON errors go to stdout so scripts read one stream
        if emit_json(&robot_error_structured(err)).is_ok() {
            return;
        }
    }

    let structured = err.to_structured();
    eprintln!("{} {err}", "error:".red().bold());
    eprintln!("  {} {}", "hint:".dimmed(), structured.suggestion);
}

fn init_tracing(cli: &Cli, format: OutputFormat) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,cookrank=warn",
        1 => "info,cookrank=debug",
        2 => "debug,cookrank=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if format.is_machine_readable() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_ansi(format.use_colors())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
