//! cookrank config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output;
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the config file locations that are searched instead
    #[arg(long)]
    pub paths: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if args.paths {
        let global = Config::global_path()
            .map_or_else(|| "(no config dir)".to_string(), |p| p.display().to_string());
        let paths = serde_json::json!({
            "global": global,
            "project": PROJECT_CONFIG_FILE,
            "env": "COOKRANK_CONFIG",
        });
        return output::emit_formatted(
            &paths,
            ctx.format,
            |_| format!("global:  {global}\nproject: ./{PROJECT_CONFIG_FILE}\nenv:     COOKRANK_CONFIG"),
            |_| format!("{global}\n{PROJECT_CONFIG_FILE}"),
        );
    }

    let rendered = ctx.config.to_toml()?;
    output::emit_formatted(
        &ctx.config,
        ctx.format,
        |_| rendered.trim_end().to_string(),
        |_| rendered.trim_end().to_string(),
    )
}
