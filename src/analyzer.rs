use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::domain::extract_domains;
use crate::domain_lists::DomainLists;
use crate::error::AnalyzerError;
use crate::insights;
use crate::keywords::{cluster_by_prefix, extract_keywords, identify_themes, Tally};
use crate::lexicon::{
    mentions_any, EVERGREEN_WORDS, FRESH_WORDS, HISTORICAL_WORDS, OUTDATED_WORDS, RECENT_WORDS,
    TIME_SENSITIVE_WORDS,
};
use crate::record::SearchRecord;
use crate::report::*;
use crate::scoring;

pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_MIN_KEYWORD_FREQ: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisMode {
    Summary,
    Trends,
    Sources,
    Keywords,
    Relevance,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 5] = [
        AnalysisMode::Summary,
        AnalysisMode::Trends,
        AnalysisMode::Sources,
        AnalysisMode::Keywords,
        AnalysisMode::Relevance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Summary => "summary",
            AnalysisMode::Trends => "trends",
            AnalysisMode::Sources => "sources",
            AnalysisMode::Keywords => "keywords",
            AnalysisMode::Relevance => "relevance",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| AnalyzerError::UnsupportedMode(s.to_string()))
    }
}

/// Per-call tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Records past this many are ignored (default: 10)
    pub max_results: usize,
    /// Keywords mode drops keywords seen fewer times than this (default: 2)
    pub min_keyword_freq: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_keyword_freq: DEFAULT_MIN_KEYWORD_FREQ,
        }
    }
}

/// Re-summarizes a batch of search results.
///
/// The analyzer holds no mutable state; a single instance can serve any
/// number of callers, and [`ResultAnalyzer::analyze_with`] takes a one-off
/// configuration without touching the instance defaults.
#[derive(Debug, Clone)]
pub struct ResultAnalyzer {
    config: AnalysisConfig,
    domain_lists: DomainLists,
}

impl Default for ResultAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl ResultAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            domain_lists: DomainLists::builtin(),
        }
    }

    pub fn with_domain_lists(mut self, domain_lists: DomainLists) -> Self {
        self.domain_lists = domain_lists;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, records: &[SearchRecord], mode: AnalysisMode) -> AnalysisOutcome {
        self.analyze_with(records, mode, &self.config)
    }

    /// Like [`analyze`](Self::analyze) but with the mode given by name.
    ///
    /// An empty batch yields the empty outcome even for an unknown mode name;
    /// only a non-empty batch gets its mode validated.
    pub fn analyze_named(
        &self,
        records: &[SearchRecord],
        mode: &str,
    ) -> Result<AnalysisOutcome, AnalyzerError> {
        if records.is_empty() {
            warn!(action = "analyze", component = "analyzer", mode, "Empty search results received for analysis");
            return Ok(AnalysisOutcome::empty());
        }

        let mode = mode.parse::<AnalysisMode>()?;
        Ok(self.analyze(records, mode))
    }

    pub fn analyze_with(
        &self,
        records: &[SearchRecord],
        mode: AnalysisMode,
        config: &AnalysisConfig,
    ) -> AnalysisOutcome {
        if records.is_empty() {
            warn!(action = "analyze", component = "analyzer", mode = %mode, "Empty search results received for analysis");
            return AnalysisOutcome::empty();
        }

        let records = &records[..records.len().min(config.max_results)];
        debug!(
            action = "analyze",
            component = "analyzer",
            mode = %mode,
            record_count = records.len(),
            max_results = config.max_results,
            "Performing analysis"
        );

        let report = match mode {
            AnalysisMode::Summary => Report::Summary(self.summary(records)),
            AnalysisMode::Trends => Report::Trends(self.trends(records)),
            AnalysisMode::Sources => Report::Sources(self.sources(records)),
            AnalysisMode::Keywords => Report::Keywords(self.keywords(records, config)),
            AnalysisMode::Relevance => Report::Relevance(self.relevance(records)),
        };

        AnalysisOutcome::Report(report)
    }

    fn summary(&self, records: &[SearchRecord]) -> SummaryReport {
        let total_results = records.len();
        let domains: Tally = extract_domains(records).into_iter().collect();
        let unique_domains = domains.distinct();

        let keywords: Tally = extract_keywords(records).into_iter().collect();
        let top_keywords = keywords.most_common(10);
        let themes = identify_themes(records);

        let domain_diversity = if total_results > 0 {
            unique_domains as f64 / total_results as f64
        } else {
            0.0
        };

        let insights =
            insights::summary_insights(total_results, unique_domains, &themes, &top_keywords);

        SummaryReport {
            metrics: SummaryMetrics {
                total_results,
                unique_domains,
                domain_diversity,
                coverage_score: scoring::coverage(records),
            },
            themes,
            top_keywords: top_keywords
                .into_iter()
                .map(|(keyword, frequency)| KeywordCount { keyword, frequency })
                .collect(),
            top_domains: domains.most_common(5),
            insights,
        }
    }

    fn trends(&self, records: &[SearchRecord]) -> TrendsReport {
        let mut temporal = TemporalPatterns::default();
        let mut freshness = FreshnessIndicators::default();

        for record in records {
            let text = record.combined_text();

            temporal.recent_indicators += usize::from(mentions_any(&text, RECENT_WORDS));
            temporal.historical_references += usize::from(mentions_any(&text, HISTORICAL_WORDS));
            temporal.time_sensitive_content +=
                usize::from(mentions_any(&text, TIME_SENSITIVE_WORDS));

            freshness.fresh_content += usize::from(mentions_any(&text, FRESH_WORDS));
            freshness.evergreen_content += usize::from(mentions_any(&text, EVERGREEN_WORDS));
            freshness.outdated_indicators += usize::from(mentions_any(&text, OUTDATED_WORDS));
        }

        let keywords: Tally = extract_keywords(records).into_iter().collect();
        let trending = keywords.most_common(15);
        let trend_insights = insights::trend_insights(records, &trending);

        TrendsReport {
            temporal_patterns: temporal,
            emerging_topics: trending
                .into_iter()
                .map(|(topic, score)| TopicScore { topic, score })
                .collect(),
            freshness_indicators: freshness,
            trend_insights,
        }
    }

    fn sources(&self, records: &[SearchRecord]) -> SourcesReport {
        let domains: Tally = extract_domains(records).into_iter().collect();
        let total = domains.total();

        let scored: Vec<(String, f64)> = domains
            .entries()
            .iter()
            .map(|(domain, _)| {
                (
                    domain.clone(),
                    scoring::credibility(domain, &self.domain_lists),
                )
            })
            .collect();

        let (domain_distribution, diversity_metrics) = if total == 0 {
            (None, DiversityMetrics::default())
        } else {
            let distribution = DomainDistribution {
                total_domains: total,
                unique_domains: domains.distinct(),
                domain_concentration: domains.max_count() as f64 / total as f64,
                top_domains: domains.most_common(10),
                domain_distribution: domains.entries().iter().cloned().collect(),
            };
            let diversity = DiversityMetrics {
                diversity_score: 1.0 - scoring::herfindahl_index(&domains),
                concentration_ratio: scoring::top_share(&domains, 3),
                unique_source_ratio: domains.distinct() as f64 / total as f64,
            };
            (Some(distribution), diversity)
        };

        SourcesReport {
            domain_distribution,
            source_recommendations: insights::source_recommendations(&scored),
            credibility_scores: scored.into_iter().collect(),
            diversity_metrics,
        }
    }

    fn keywords(&self, records: &[SearchRecord], config: &AnalysisConfig) -> KeywordsReport {
        let all: Tally = extract_keywords(records).into_iter().collect();

        let filtered = all.at_least(config.min_keyword_freq);

        let clusters = cluster_by_prefix(filtered.entries().iter().map(|(k, _)| k.as_str()));
        let max_freq = filtered.max_count();

        let importance_scores: BTreeMap<String, f64> = filtered
            .entries()
            .iter()
            .map(|(keyword, freq)| {
                (
                    keyword.clone(),
                    scoring::keyword_importance(*freq, max_freq, records.len()),
                )
            })
            .collect();

        let keyword_insights = insights::keyword_insights(&filtered, clusters.len());

        KeywordsReport {
            keyword_frequency: filtered.entries().iter().cloned().collect(),
            keyword_clusters: clusters.into_iter().collect(),
            importance_scores,
            keyword_insights,
        }
    }

    fn relevance(&self, records: &[SearchRecord]) -> RelevanceReport {
        let relevance_scores: Vec<f64> = records.iter().map(scoring::relevance).collect();
        let quality_metrics: Vec<f64> = records.iter().map(scoring::quality).collect();

        let mut distribution = RelevanceDistribution::default();
        for score in &relevance_scores {
            if *score >= 0.8 {
                distribution.high_relevance += 1;
            } else if *score >= 0.5 {
                distribution.medium_relevance += 1;
            } else {
                distribution.low_relevance += 1;
            }
        }

        RelevanceReport {
            average_relevance: scoring::mean(relevance_scores.iter().copied()),
            average_quality: scoring::mean(quality_metrics.iter().copied()),
            relevance_distribution: distribution,
            quality_insights: insights::quality_insights(&relevance_scores, &quality_metrics),
            relevance_scores,
            quality_metrics,
        }
    }
}
