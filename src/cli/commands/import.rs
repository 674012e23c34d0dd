//! cookrank import - Load a JSON array of content into the SQLite store

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output;
use crate::content::ContentKind;
use crate::error::{RankError, Result};
use crate::storage::memory::parse_items;
use crate::storage::{SqliteStore, is_json_path};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file holding an array of recipes and blog posts
    pub file: PathBuf,
}

#[derive(Serialize)]
struct ImportOutput {
    store: PathBuf,
    imported: usize,
    recipes: usize,
    blogs: usize,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let target = ctx.store_path();
    if is_json_path(target) {
        return Err(RankError::InvalidArgument(format!(
            "import needs a SQLite store, but store.path is {}",
            target.display()
        )));
    }

    let raw = std::fs::read_to_string(&args.file).map_err(|err| {
        RankError::NotFound(format!("import file {}: {err}", args.file.display()))
    })?;
    let items = parse_items(&raw)?;

    let store = SqliteStore::open(target)?;
    let imported = store.import(&items)?;

    let result = ImportOutput {
        store: target.to_path_buf(),
        imported,
        recipes: items.iter().filter(|i| i.kind() == ContentKind::Recipe).count(),
        blogs: items.iter().filter(|i| i.kind() == ContentKind::Blog).count(),
    };

    output::emit_formatted(
        &result,
        ctx.format,
        |out| {
            format!(
                "{} Imported {} items ({} recipes, {} blogs) into {}",
                "✓".green(),
                out.imported.to_string().bold(),
                out.recipes,
                out.blogs,
                out.store.display()
            )
        },
        |out| out.imported.to_string(),
    )
}
