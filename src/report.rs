//! Report shapes produced by the analyzer, one per analysis mode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

pub const EMPTY_INPUT_MESSAGE: &str = "No search results provided for analysis";

/// Result of one analyzer call: a report, or the empty-input marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(Report),
    Empty(EmptyInput),
}

impl AnalysisOutcome {
    pub fn empty() -> Self {
        AnalysisOutcome::Empty(EmptyInput {
            error: EMPTY_INPUT_MESSAGE.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AnalysisOutcome::Empty(_))
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::Empty(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyInput {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "analysis_type", rename_all = "lowercase")]
pub enum Report {
    Summary(SummaryReport),
    Trends(TrendsReport),
    Sources(SourcesReport),
    Keywords(KeywordsReport),
    Relevance(RelevanceReport),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub metrics: SummaryMetrics,
    pub themes: Vec<String>,
    pub top_keywords: Vec<KeywordCount>,
    pub top_domains: Vec<(String, usize)>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_results: usize,
    pub unique_domains: usize,
    pub domain_diversity: f64,
    pub coverage_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsReport {
    pub temporal_patterns: TemporalPatterns,
    pub emerging_topics: Vec<TopicScore>,
    pub freshness_indicators: FreshnessIndicators,
    pub trend_insights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalPatterns {
    pub recent_indicators: usize,
    pub historical_references: usize,
    pub time_sensitive_content: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: String,
    pub score: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessIndicators {
    pub fresh_content: usize,
    pub evergreen_content: usize,
    pub outdated_indicators: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesReport {
    /// `None` when no record carried a usable URL; serialized as `{}`.
    #[serde(with = "empty_object")]
    pub domain_distribution: Option<DomainDistribution>,
    pub credibility_scores: BTreeMap<String, f64>,
    pub diversity_metrics: DiversityMetrics,
    pub source_recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainDistribution {
    pub total_domains: usize,
    pub unique_domains: usize,
    pub domain_concentration: f64,
    pub top_domains: Vec<(String, usize)>,
    pub domain_distribution: BTreeMap<String, usize>,
}

/// Maps an absent distribution to and from an empty JSON object.
mod empty_object {
    use super::*;
    use serde::ser::SerializeMap;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Present(DomainDistribution),
        Empty {},
    }

    pub fn serialize<S>(value: &Option<DomainDistribution>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(distribution) => distribution.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DomainDistribution>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Stored::deserialize(deserializer)? {
            Stored::Present(distribution) => Some(distribution),
            Stored::Empty {} => None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiversityMetrics {
    pub diversity_score: f64,
    pub concentration_ratio: f64,
    pub unique_source_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordsReport {
    pub keyword_frequency: BTreeMap<String, usize>,
    pub keyword_clusters: BTreeMap<String, Vec<String>>,
    pub importance_scores: BTreeMap<String, f64>,
    pub keyword_insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceReport {
    pub relevance_scores: Vec<f64>,
    pub quality_metrics: Vec<f64>,
    pub average_relevance: f64,
    pub average_quality: f64,
    pub relevance_distribution: RelevanceDistribution,
    pub quality_insights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceDistribution {
    pub high_relevance: usize,
    pub medium_relevance: usize,
    pub low_relevance: usize,
}
