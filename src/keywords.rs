use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::lexicon::is_stop_word;
use crate::record::SearchRecord;

static KEYWORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("KEYWORD_TOKEN regex is valid"));

static THEME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{4,}\b").expect("THEME_TOKEN regex is valid"));

/// Occurrence counter that remembers first-seen order, so rankings break
/// ties the same way every time.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str) {
        self.total += 1;
        match self.index.get(item) {
            Some(&pos) => self.order[pos].1 += 1,
            None => {
                self.index.insert(item.to_string(), self.order.len());
                self.order.push((item.to_string(), 1));
            }
        }
    }

    /// Number of items added, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct items.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.order
    }

    /// The `n` most frequent entries; equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.order.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// A copy keeping only entries counted at least `min` times.
    pub fn at_least(&self, min: usize) -> Tally {
        let mut kept = Tally::new();
        for (item, count) in self.order.iter().filter(|(_, count)| *count >= min) {
            kept.index.insert(item.clone(), kept.order.len());
            kept.order.push((item.clone(), *count));
            kept.total += count;
        }
        kept
    }

    pub fn max_count(&self) -> usize {
        self.order.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for item in iter {
            tally.add(item.as_ref());
        }
        tally
    }
}

fn tokens<'a>(pattern: &'a Regex, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| !is_stop_word(word))
}

/// Keywords of one text: lowercase runs of 3+ letters that are not stop words.
pub fn keywords_in(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    tokens(&KEYWORD_TOKEN, &lowered).map(str::to_string).collect()
}

/// Keywords across all records, title before content, in occurrence order.
pub fn extract_keywords(records: &[SearchRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| {
            let mut words = keywords_in(record.title());
            words.extend(keywords_in(record.content()));
            words
        })
        .collect()
}

/// Up to five title words of 4+ letters that occur at least twice.
pub fn identify_themes(records: &[SearchRecord]) -> Vec<String> {
    let mut tally = Tally::new();
    for record in records {
        let title = record.title().to_lowercase();
        for word in tokens(&THEME_TOKEN, &title) {
            tally.add(word);
        }
    }

    tally
        .most_common(5)
        .into_iter()
        .filter(|(_, freq)| *freq >= 2)
        .map(|(word, _)| word)
        .collect()
}

/// Groups keywords by their first four characters, dropping singletons.
/// Members keep the order in which they were given.
pub fn cluster_by_prefix<'a, I>(keywords: I) -> Vec<(String, Vec<String>)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut clusters: Vec<(String, Vec<String>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for keyword in keywords {
        let key: String = keyword.chars().take(4).collect();
        match index.get(&key) {
            Some(&pos) => clusters[pos].1.push(keyword.to_string()),
            None => {
                index.insert(key.clone(), clusters.len());
                clusters.push((key, vec![keyword.to_string()]));
            }
        }
    }

    clusters.retain(|(_, members)| members.len() > 1);
    clusters
}
