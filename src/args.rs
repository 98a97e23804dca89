use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::analyzer::{AnalysisConfig, DEFAULT_MAX_RESULTS, DEFAULT_MIN_KEYWORD_FREQ};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "searchlens",
    about = "Summarize a batch of search results: themes, trends, sources, keywords and relevance",
    version,
    long_about = None
)]
pub struct Args {
    /// JSON file with search results (`-` or omitted reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Analysis to run: summary, trends, sources, keywords or relevance
    #[arg(short, long, default_value = "summary")]
    pub analysis_type: String,

    /// Maximum number of results to analyze
    #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Minimum keyword frequency for the keywords analysis
    #[arg(long, default_value_t = DEFAULT_MIN_KEYWORD_FREQ)]
    pub min_keyword_freq: usize,

    /// Path to custom credible/suspect domain list file
    #[arg(short, long)]
    pub domain_lists: Option<PathBuf>,

    /// Ignore domain list files and use the built-in lists
    #[arg(long)]
    pub no_domain_lists: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Initialize domain_lists.txt with the built-in lists
    #[arg(long)]
    pub init: bool,
}

impl Args {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            max_results: self.max_results,
            min_keyword_freq: self.min_keyword_freq,
        }
    }
}
