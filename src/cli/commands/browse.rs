//! cookrank browse - List recipes or blog posts, newest first

use clap::Args;

use crate::app::AppContext;
use crate::catalog::Catalog;
use crate::cli::{output, render};
use crate::content::ContentKind;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// What to list: recipe or blog
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Page number (1-based)
    #[arg(long, short, default_value_t = 1)]
    pub page: usize,
}

pub fn run(ctx: &AppContext, args: &BrowseArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let catalog = Catalog::new(store.as_ref(), ctx.config.clone());
    let page = catalog.browse(args.kind, args.page)?;

    output::emit_formatted(
        &page,
        ctx.format,
        |page| render::page_human(page, args.kind, None),
        render::page_plain,
    )
}
