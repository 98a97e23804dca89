use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::domain::normalize_domain;
use crate::lexicon::{CREDIBLE_DOMAINS, SUSPECT_DOMAINS};

pub const DEFAULT_LIST_FILE: &str = "domain_lists.txt";

/// Curated domains that override the TLD-based credibility heuristics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainLists {
    credible: HashSet<String>,
    suspect: HashSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Credible,
    Suspect,
}

impl DomainLists {
    /// The compiled-in tables from [`crate::lexicon`].
    pub fn builtin() -> Self {
        Self {
            credible: CREDIBLE_DOMAINS.iter().map(|d| d.to_string()).collect(),
            suspect: SUSPECT_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn add_credible(&mut self, domain: &str) {
        self.credible.insert(normalize_domain(domain));
    }

    pub fn add_suspect(&mut self, domain: &str) {
        self.suspect.insert(normalize_domain(domain));
    }

    pub fn is_credible(&self, domain: &str) -> bool {
        self.credible.contains(domain)
    }

    pub fn is_suspect(&self, domain: &str) -> bool {
        self.suspect.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.credible.len() + self.suspect.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the lists in the format [`parse_domain_lists`] reads.
    pub fn to_file_contents(&self) -> String {
        let mut credible: Vec<&String> = self.credible.iter().collect();
        let mut suspect: Vec<&String> = self.suspect.iter().collect();
        credible.sort();
        suspect.sort();

        let mut out = String::from(
            "# Domain credibility lists\n# Each line: `credible <domain>` or `suspect <domain>`\n\n",
        );
        for domain in credible {
            out.push_str(&format!("credible {domain}\n"));
        }
        out.push('\n');
        for domain in suspect {
            out.push_str(&format!("suspect {domain}\n"));
        }
        out
    }

    fn insert(&mut self, kind: ListKind, domain: &str) {
        match kind {
            ListKind::Credible => self.add_credible(domain),
            ListKind::Suspect => self.add_suspect(domain),
        }
    }
}

fn parse_line(line: &str) -> std::result::Result<(ListKind, &str), String> {
    let mut parts = line.split_whitespace();
    let kind = match parts.next() {
        Some("credible") => ListKind::Credible,
        Some("suspect") => ListKind::Suspect,
        Some(other) => return Err(format!("unknown list '{other}'")),
        None => return Err("empty entry".to_string()),
    };
    let domain = parts.next().ok_or("missing domain")?;
    if parts.next().is_some() {
        return Err("expected exactly one domain".to_string());
    }
    Ok((kind, domain))
}

/// Parses list file contents. With `strict`, the first malformed line is an
/// error; otherwise malformed lines are logged and skipped.
pub fn parse_domain_lists(content: &str, strict: bool) -> Result<DomainLists> {
    let mut lists = DomainLists::default();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Ok((kind, domain)) => lists.insert(kind, domain),
            Err(e) if strict => {
                anyhow::bail!("Invalid domain list entry at line {}: {}", line_num + 1, e)
            }
            Err(e) => {
                warn!(action = "parse", component = "domain_list_entry", line_number = line_num + 1, error = %e, "Skipping invalid domain list entry")
            }
        }
    }

    Ok(lists)
}

/// Resolves the domain lists: the explicit file if given, else
/// `domain_lists.txt` in the working directory, else the built-in tables.
pub fn load_domain_lists(list_file_path: Option<&Path>) -> Result<DomainLists> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "domain_list_loading",
        "Starting domain list loading"
    );

    let mut lists = DomainLists::default();

    if let Some(path) = list_file_path {
        info!(action = "load", component = "domain_list_file", file_path = ?path, "Loading domain lists from specified file");
        if !path.exists() {
            anyhow::bail!("Domain list file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read domain list file {:?}", path))?;
        lists = parse_domain_lists(&content, true)?;
        info!(action = "loaded", component = "domain_list_file", entry_count = lists.len(), file_path = ?path, "Loaded domain lists from file");
    } else {
        let default_file = Path::new(DEFAULT_LIST_FILE);
        if default_file.exists() {
            info!(action = "load", component = "default_domain_list_file", file_path = ?default_file, "Loading domain lists from default file");
            let content = fs::read_to_string(default_file)?;
            lists = parse_domain_lists(&content, false)?;
            info!(action = "loaded", component = "default_domain_list_file", entry_count = lists.len(), file_path = ?default_file, "Loaded domain lists from default file");
        }
    }

    if lists.is_empty() {
        info!(
            action = "load",
            component = "builtin_domain_lists",
            "Using built-in domain lists"
        );
        lists = DomainLists::builtin();
    }

    info!(
        action = "complete",
        component = "domain_list_loading",
        entry_count = lists.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Domain lists ready"
    );
    Ok(lists)
}

/// Writes the built-in tables to `domain_lists.txt` in `dir`.
pub fn init_default_domain_lists(dir: &Path) -> Result<()> {
    let default_file = dir.join(DEFAULT_LIST_FILE);

    if default_file.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first if you want to reinitialize.",
            DEFAULT_LIST_FILE
        );
    }

    fs::write(&default_file, DomainLists::builtin().to_file_contents())
        .with_context(|| format!("Failed to write {:?}", default_file))?;
    info!(action = "init", component = "domain_list_file", file_path = ?default_file, "Created domain list file with built-in entries");

    Ok(())
}
