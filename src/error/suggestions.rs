//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints built
//! from the error context (e.g. near-miss slugs for an unknown id).

use serde_json::Value;

use super::codes::ErrorCode;
use crate::similarity::partial_ratio;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::ContentNotFound => suggest_content_not_found(context),
        ErrorCode::InvalidArgument => suggest_invalid_argument(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_content_not_found(context: Option<&Value>) -> String {
    let similar: Vec<&str> = context
        .and_then(|c| c.get("similar"))
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if similar.is_empty() {
        return ErrorCode::ContentNotFound.suggestion().to_string();
    }

    format!("Did you mean: {}?", similar.join(", "))
}

fn suggest_invalid_argument(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("reason")).and_then(Value::as_str) {
        Some(reason) => format!("{reason}. {}", ErrorCode::InvalidArgument.suggestion()),
        None => ErrorCode::InvalidArgument.suggestion().to_string(),
    }
}

/// Suggest known ids or slugs close to a misspelled one.
///
/// Candidates scoring at least `min_score` are returned best first, ties in
/// input order.
pub fn suggest_similar_ids(
    query: &str,
    available: &[&str],
    min_score: u8,
    max_suggestions: usize,
) -> Vec<String> {
    let mut scored: Vec<_> = available
        .iter()
        .map(|candidate| (*candidate, partial_ratio(query, candidate)))
        .filter(|(_, score)| *score >= min_score)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(candidate, _)| candidate.to_string())
        .collect()
}
