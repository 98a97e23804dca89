//! Fixed word and domain tables used by the analysis heuristics.

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
    "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "them",
    "their", "what", "which", "who", "when", "where", "why", "how", "all", "each", "every",
    "some", "any", "few", "more", "most", "other", "such", "no", "not", "only", "own", "same",
    "so", "than", "too", "very", "just", "now",
];

// Temporal pattern lists, matched as substrings of "title content".
pub const RECENT_WORDS: &[&str] = &[
    "recent", "latest", "new", "now", "today", "current", "breaking",
];
pub const HISTORICAL_WORDS: &[&str] = &["history", "historical", "past", "former", "previous", "old"];
pub const TIME_SENSITIVE_WORDS: &[&str] = &[
    "deadline", "schedule", "timeline", "date", "when", "soon", "upcoming",
];

/// Subset of recency words checked against content alone for the trend insight.
pub const TIMELY_CONTENT_WORDS: &[&str] = &["recent", "latest", "new", "now"];

// Freshness lists.
pub const FRESH_WORDS: &[&str] = &["2023", "2024", "2025", "recently", "just", "new", "latest"];
pub const EVERGREEN_WORDS: &[&str] = &[
    "guide", "tutorial", "how to", "basics", "fundamentals", "introduction",
];
pub const OUTDATED_WORDS: &[&str] = &["2020", "2021", "2022", "old", "previous", "former"];

/// Well-known reference, news and academic domains.
pub const CREDIBLE_DOMAINS: &[&str] = &[
    "wikipedia.org",
    "github.com",
    "stackoverflow.com",
    "medium.com",
    "techcrunch.com",
    "bbc.com",
    "cnn.com",
    "reuters.com",
    "apnews.com",
    "nature.com",
    "science.org",
    "arxiv.org",
    "ieee.org",
    "acm.org",
];

pub const SUSPECT_DOMAINS: &[&str] = &["clickbait.com", "fakenews.com", "unreliablesource.com"];

pub const INSTITUTIONAL_SUFFIXES: &[&str] = &[".edu", ".gov", ".org"];
pub const COMMERCIAL_SUFFIXES: &[&str] = &[".com", ".net", ".co"];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// True if any entry of `words` occurs as a substring of `text`.
pub fn mentions_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}
