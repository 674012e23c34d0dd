//! Human and plain renderings of catalog results

use colored::Colorize;

use crate::catalog::{CatalogEntry, Recommendation};
use crate::content::{ContentItem, ContentKind};
use crate::paginate::Page;
use crate::search::MatchSource;

/// Longest description shown in human listings, in characters.
const DESCRIPTION_WIDTH: usize = 96;

pub fn page_human(page: &Page<CatalogEntry>, kind: ContentKind, query: Option<&str>) -> String {
    let mut lines = Vec::new();

    if page.items.is_empty() {
        match query {
            Some(query) => lines.push(format!(
                "{} No {kind}s found for '{}'",
                "!".yellow(),
                query.cyan()
            )),
            None => lines.push(format!("{} No {kind}s yet", "!".yellow())),
        }
        if page.total > 0 {
            lines.push(format!(
                "  page {} is past the end ({} pages)",
                page.page, page.total_pages
            ));
        }
        return lines.join("\n");
    }

    let heading = match query {
        Some(query) => format!(
            "{} results for '{}'",
            page.total.to_string().bold(),
            query.cyan()
        ),
        None => format!("{} {kind}s", page.total.to_string().bold()),
    };
    lines.push(format!(
        "{heading} (page {}/{})",
        page.page,
        page.total_pages.max(1)
    ));
    lines.push(String::new());

    let first_rank = (page.page - 1) * page.page_size + 1;
    for (offset, entry) in page.items.iter().enumerate() {
        let tag = entry.source.map_or_else(String::new, |source| {
            let label = match entry.fuzzy_score {
                Some(score) => format!("[{} {score}]", source.as_str()),
                None => format!("[{}]", source.as_str()),
            };
            format!("  {}", source_color(source, &label))
        });
        lines.push(format!(
            "{:>3}. {}{tag}",
            first_rank + offset,
            entry.item.title.bold()
        ));
        push_details(&mut lines, &entry.item);
    }

    let mut nav = Vec::new();
    if let Some(prev) = page.prev_page {
        nav.push(format!("--page {prev} for previous"));
    }
    if let Some(next) = page.next_page {
        nav.push(format!("--page {next} for more"));
    }
    if !nav.is_empty() {
        lines.push(nav.join(", ").dimmed().to_string());
    }

    lines.join("\n")
}

pub fn page_plain(page: &Page<CatalogEntry>) -> String {
    page.items
        .iter()
        .map(|entry| {
            let source = entry.source.map_or("-", MatchSource::as_str);
            let score = entry
                .fuzzy_score
                .map_or_else(|| "-".to_string(), |score| score.to_string());
            format!("{}\t{}\t{source}\t{score}", entry.item.id, entry.item.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recommendations_human(reference: &str, recs: &[Recommendation]) -> String {
    if recs.is_empty() {
        return format!("{} Nothing similar to '{}'", "!".yellow(), reference.cyan());
    }

    let mut lines = vec![format!("Similar to '{}':", reference.cyan()), String::new()];
    for (rank, rec) in recs.iter().enumerate() {
        lines.push(format!(
            "{:>3}. {}  {}",
            rank + 1,
            rec.item.title.bold(),
            format!("{:.1}", rec.similarity_score).green()
        ));
        push_details(&mut lines, &rec.item);
    }
    lines.join("\n")
}

pub fn recommendations_plain(recs: &[Recommendation]) -> String {
    recs.iter()
        .map(|rec| {
            format!(
                "{}\t{}\t{:.2}",
                rec.item.id, rec.item.title, rec.similarity_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_details(lines: &mut Vec<String>, item: &ContentItem) {
    if !item.description.is_empty() {
        lines.push(format!("     {}", truncate(&item.description, DESCRIPTION_WIDTH)));
    }
    let votes = item.votes.score();
    lines.push(
        format!("     {}  votes {votes:+}", item.handle())
            .dimmed()
            .to_string(),
    );
}

fn source_color(source: MatchSource, label: &str) -> colored::ColoredString {
    match source {
        MatchSource::Indexed => label.blue(),
        MatchSource::Substring => label.green(),
        MatchSource::Fuzzy => label.yellow(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}
