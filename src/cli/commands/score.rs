//! cookrank score - Similarity of two strings

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output;
use crate::error::Result;
use crate::similarity::{SimilarityMeasure, normalize};

#[derive(Args, Debug)]
pub struct ScoreArgs {
    pub left: String,

    pub right: String,

    /// Measure: partial (best-aligned window) or ratio (whole string)
    #[arg(long, value_enum, default_value_t = SimilarityMeasure::Partial)]
    pub measure: SimilarityMeasure,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    left: &'a str,
    right: &'a str,
    measure: SimilarityMeasure,
    score: u8,
}

pub fn run(ctx: &AppContext, args: &ScoreArgs) -> Result<()> {
    let result = ScoreOutput {
        left: &args.left,
        right: &args.right,
        measure: args.measure,
        score: args.measure.score(&args.left, &args.right),
    };

    output::emit_formatted(
        &result,
        ctx.format,
        |out| {
            format!(
                "{} ({}): '{}' vs '{}'",
                out.score.to_string().bold(),
                out.measure.as_str(),
                normalize(out.left),
                normalize(out.right)
            )
        },
        |out| out.score.to_string(),
    )
}
