// Query Normalizer
// Turns raw user input into a recent-search query expression

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "en";
/// Per-request window accepted by the recent-search endpoint.
pub const MIN_RESULTS: u32 = 10;
pub const MAX_RESULTS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilters {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_true")]
    pub exclude_retweets: bool,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            exclude_retweets: true,
        }
    }
}

impl QueryFilters {
    pub fn effective_language(&self) -> &str {
        resolve_language(&self.language)
    }
}

fn default_language() -> String { DEFAULT_LANGUAGE.to_string() }
fn default_true() -> bool { true }

/// Normalize with the default filters (`lang:en -is:retweet`).
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, &QueryFilters::default())
}

/// Hashtags and mentions pass through; anything else becomes an exact phrase.
pub fn normalize_with(raw: &str, filters: &QueryFilters) -> String {
    let term = raw.trim();

    let mut query = if term.starts_with('#') || term.starts_with('@') {
        term.to_string()
    } else {
        format!("\"{}\"", term)
    };

    query.push_str(" lang:");
    query.push_str(filters.effective_language());

    if filters.exclude_retweets {
        query.push_str(" -is:retweet");
    }

    query
}

/// Trimmed language code; blank falls back to the default.
pub fn resolve_language(raw: &str) -> &str {
    let language = raw.trim();
    if language.is_empty() { DEFAULT_LANGUAGE } else { language }
}

/// Bound a requested fetch size to the endpoint's per-request window.
pub fn clamp_fetch_limit(requested: u32) -> u32 {
    requested.clamp(MIN_RESULTS, MAX_RESULTS)
}
