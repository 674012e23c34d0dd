//! cookrank recommend - Items similar to a recipe or blog post

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::catalog::{Catalog, Recommendation};
use crate::cli::{output, render};
use crate::content::ContentKind;
use crate::error::Result;
use crate::recommend::checked_limit;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Kind of the reference item: recipe or blog
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Slug or id of the reference item
    pub handle: String,

    /// Number of recommendations (default: recommend.limit)
    #[arg(long, short, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

#[derive(Serialize)]
struct RecommendOutput<'a> {
    reference: &'a str,
    kind: ContentKind,
    recommendations: Vec<Recommendation>,
}

pub fn run(ctx: &AppContext, args: &RecommendArgs) -> Result<()> {
    let limit = args.limit.map(checked_limit).transpose()?;

    let store = ctx.open_store()?;
    let catalog = Catalog::new(store.as_ref(), ctx.config.clone());
    let recommendations = catalog.recommend(args.kind, &args.handle, limit)?;

    let result = RecommendOutput {
        reference: &args.handle,
        kind: args.kind,
        recommendations,
    };

    output::emit_formatted(
        &result,
        ctx.format,
        |out| render::recommendations_human(out.reference, &out.recommendations),
        |out| render::recommendations_plain(&out.recommendations),
    )
}
