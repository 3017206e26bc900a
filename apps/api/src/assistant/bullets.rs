use std::sync::LazyLock;

use regex::Regex;

use crate::assistant::feedback::strip_leading_markers;

/// A line starting with `*`, `•` or `-`, capturing the rest of the line.
static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[*•-][ \t]*(.*)$").expect("valid regex"));

pub const MAX_BULLETS: usize = 5;
pub const MIN_BULLET_WORDS: usize = 5;

/// All bullet lines in document order, marker removed.
pub fn extract_bullets(text: &str) -> Vec<String> {
    BULLET_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|b| !b.is_empty())
        .collect()
}

/// The bullets worth rewriting: the first five with at least five words.
pub fn rewrite_candidates(text: &str) -> Vec<String> {
    extract_bullets(text)
        .into_iter()
        .filter(|b| b.split_whitespace().count() >= MIN_BULLET_WORDS)
        .take(MAX_BULLETS)
        .collect()
}

/// Cleans a model rewrite and keeps it only if it says something different.
pub fn accept_rewrite(original: &str, reply: &str) -> Option<String> {
    let cleaned = strip_leading_markers(reply);
    let cleaned = cleaned
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(cleaned)
        .trim();

    if cleaned.is_empty() || cleaned.to_lowercase() == original.trim().to_lowercase() {
        return None;
    }
    Some(cleaned.to_string())
}
