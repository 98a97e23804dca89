pub mod analyzer;
pub mod args;
pub mod domain;
pub mod domain_lists;
pub mod error;
pub mod insights;
pub mod keywords;
pub mod lexicon;
pub mod record;
pub mod render;
pub mod report;
pub mod scoring;
pub mod utils;

pub use analyzer::{AnalysisConfig, AnalysisMode, ResultAnalyzer};
pub use args::Args;
pub use domain_lists::{init_default_domain_lists, load_domain_lists, DomainLists};
pub use error::AnalyzerError;
pub use record::{load_records, parse_records, SearchRecord};
pub use report::{AnalysisOutcome, Report};
