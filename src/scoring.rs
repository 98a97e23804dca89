//! Per-record and per-domain scoring heuristics.
//!
//! Every score returned from here lies in `[0.0, 1.0]`.

use std::collections::HashSet;

use crate::domain::has_suffix;
use crate::domain_lists::DomainLists;
use crate::keywords::Tally;
use crate::lexicon::{COMMERCIAL_SUFFIXES, INSTITUTIONAL_SUFFIXES};
use crate::record::SearchRecord;

pub const CREDIBLE_SCORE: f64 = 0.9;
pub const SUSPECT_SCORE: f64 = 0.2;
pub const INSTITUTIONAL_SCORE: f64 = 0.8;
pub const COMMERCIAL_SCORE: f64 = 0.6;
pub const NEUTRAL_SCORE: f64 = 0.5;

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Scores below are summed in whole tenths so that band edges such as 0.8
/// are hit exactly.
fn from_tenths(tenths: u8) -> f64 {
    f64::from(tenths.min(10)) / 10.0
}

/// How complete a record is: title, URL and a non-trivial snippet.
pub fn completeness(record: &SearchRecord) -> f64 {
    let mut tenths = 0u8;

    if !record.title().is_empty() {
        tenths += 3;
    }
    if !record.url().is_empty() {
        tenths += 2;
    }
    if char_len(record.content()) > 50 {
        tenths += 5;
    }

    from_tenths(tenths)
}

/// Mean completeness over the batch, 0 for an empty batch.
pub fn coverage(records: &[SearchRecord]) -> f64 {
    mean(records.iter().map(completeness))
}

pub fn relevance(record: &SearchRecord) -> f64 {
    let mut tenths = 0u8;
    let content = record.content();
    let length = char_len(content);

    if !record.title().is_empty() {
        tenths += 3;
    }
    if length > 100 {
        tenths += 2;
    }
    if length > 300 {
        tenths += 2;
    }

    let url = record.url();
    if url.starts_with("http://") || url.starts_with("https://") {
        tenths += 1;
    }

    let distinct_tokens: HashSet<&str> = content.split_whitespace().collect();
    if distinct_tokens.len() > 20 {
        tenths += 2;
    }

    from_tenths(tenths)
}

pub fn quality(record: &SearchRecord) -> f64 {
    let content = record.content();
    if content.is_empty() {
        return 0.0;
    }

    let mut tenths = 0u8;
    let length = char_len(content);

    if (50..=1000).contains(&length) {
        tenths += 3;
    } else if (1001..=3000).contains(&length) {
        tenths += 4;
    }

    if content.split('.').count() > 3 {
        tenths += 2;
    }
    if content.split_whitespace().count() > 20 {
        tenths += 2;
    }
    if content.contains([',', ';', ':', '-']) {
        tenths += 1;
    }

    from_tenths(tenths)
}

/// Credibility of a domain: the curated lists win over TLD heuristics.
pub fn credibility(domain: &str, lists: &DomainLists) -> f64 {
    if lists.is_credible(domain) {
        CREDIBLE_SCORE
    } else if lists.is_suspect(domain) {
        SUSPECT_SCORE
    } else if has_suffix(domain, INSTITUTIONAL_SUFFIXES) {
        INSTITUTIONAL_SCORE
    } else if has_suffix(domain, COMMERCIAL_SUFFIXES) {
        COMMERCIAL_SCORE
    } else {
        NEUTRAL_SCORE
    }
}

/// `0.7 * freq / max_freq + 0.3 * freq / record_count`, capped at 1.0 and
/// rounded to 3 places. A keyword repeated within records can push the
/// per-record term past 1.
pub fn keyword_importance(freq: usize, max_freq: usize, record_count: usize) -> f64 {
    if max_freq == 0 || record_count == 0 {
        return 0.0;
    }

    let normalized = freq as f64 / max_freq as f64;
    let per_record = freq as f64 / record_count as f64;
    round3(f64::min(normalized * 0.7 + per_record * 0.3, 1.0))
}

/// Herfindahl–Hirschman index over the tallied shares.
pub fn herfindahl_index(tally: &Tally) -> f64 {
    let total = tally.total();
    if total == 0 {
        return 0.0;
    }

    tally
        .entries()
        .iter()
        .map(|(_, count)| {
            let share = *count as f64 / total as f64;
            share * share
        })
        .sum()
}

/// Share of all mentions held by the `n` largest entries.
pub fn top_share(tally: &Tally, n: usize) -> f64 {
    let total = tally.total();
    if total == 0 {
        return 0.0;
    }

    let top: usize = tally.most_common(n).iter().map(|(_, count)| count).sum();
    top as f64 / total as f64
}

pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
