//! cookrank search - Search recipes or blog posts
//!
//! Merges full-text, substring and fuzzy matches; a blank query lists the
//! newest items instead.

use clap::Args;

use crate::app::AppContext;
use crate::catalog::Catalog;
use crate::cli::{output, render};
use crate::content::ContentKind;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// What to search: recipe or blog
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Search query (omit to list newest first)
    #[arg(default_value = "")]
    pub query: String,

    /// Page number (1-based)
    #[arg(long, short, default_value_t = 1)]
    pub page: usize,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let catalog = Catalog::new(store.as_ref(), ctx.config.clone());
    let page = catalog.search(args.kind, &args.query, args.page)?;

    let query = args.query.trim();
    let shown_query = (!query.is_empty()).then_some(query);

    output::emit_formatted(
        &page,
        ctx.format,
        |page| render::page_human(page, args.kind, shown_query),
        render::page_plain,
    )
}
