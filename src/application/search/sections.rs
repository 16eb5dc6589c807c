//! Section selector - parses the caller's requested subset of domains

use std::collections::HashSet;

/// Parse the raw `sections` parameter into a set of lower-cased tokens.
///
/// Empty or absent input yields an empty set, which the dispatcher reads as
/// "include every domain". Unknown tokens are kept in the set but never match
/// a section key, so the corresponding fetch is simply skipped.
pub fn parse_sections(raw: Option<&str>) -> HashSet<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
