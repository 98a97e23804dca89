use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// One search result as handed over by the search collaborator.
///
/// Every field may be missing or `null`; the accessors hand out `""` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl SearchRecord {
    pub fn new(title: &str, url: &str, content: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            content: Some(content.to_string()),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Lowercased `"title content"`, the haystack for substring heuristics.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title(), self.content()).to_lowercase()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsPayload {
    Bare(Vec<SearchRecord>),
    Response { results: Vec<SearchRecord> },
}

/// Parses either a bare JSON array of records or a SearXNG-style response
/// object carrying them under `results`.
pub fn parse_records(json: &str) -> Result<Vec<SearchRecord>> {
    let payload: RecordsPayload = serde_json::from_str(json)
        .context("Input must be a JSON array of results or an object with a `results` array")?;

    Ok(match payload {
        RecordsPayload::Bare(records) => records,
        RecordsPayload::Response { results } => results,
    })
}

/// Reads records from `path`, or from stdin when the path is absent or `-`.
pub fn load_records(path: Option<&Path>) -> Result<Vec<SearchRecord>> {
    let start_time = Instant::now();

    let json = match path {
        Some(path) if path != Path::new("-") => {
            info!(action = "load", component = "record_input", file_path = ?path, "Reading search results from file");
            if !path.exists() {
                anyhow::bail!("Input file not found: {:?}", path);
            }
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
        }
        _ => {
            info!(action = "load", component = "record_input", "Reading search results from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read search results from stdin")?;
            buffer
        }
    };

    let records = parse_records(&json)?;

    info!(
        action = "loaded",
        component = "record_input",
        record_count = records.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded search results"
    );
    Ok(records)
}
