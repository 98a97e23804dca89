use std::fmt::{self, Write};

use crate::report::*;
use crate::utils::{format_number, format_percent};

/// Human-readable view of an analysis outcome.
pub struct TextReport<'a>(pub &'a AnalysisOutcome);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            AnalysisOutcome::Empty(empty) => writeln!(f, "{}", empty.error),
            AnalysisOutcome::Report(Report::Summary(report)) => render_summary(f, report),
            AnalysisOutcome::Report(Report::Trends(report)) => render_trends(f, report),
            AnalysisOutcome::Report(Report::Sources(report)) => render_sources(f, report),
            AnalysisOutcome::Report(Report::Keywords(report)) => render_keywords(f, report),
            AnalysisOutcome::Report(Report::Relevance(report)) => render_relevance(f, report),
        }
    }
}

pub fn render_text(outcome: &AnalysisOutcome) -> String {
    TextReport(outcome).to_string()
}

fn render_list(out: &mut impl Write, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{heading}:")?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

fn render_summary(out: &mut impl Write, report: &SummaryReport) -> fmt::Result {
    let metrics = &report.metrics;
    writeln!(out, "--- Search Result Summary ---")?;
    writeln!(out, "Results analyzed: {}", format_number(metrics.total_results))?;
    writeln!(
        out,
        "Unique domains: {} (diversity {})",
        format_number(metrics.unique_domains),
        format_percent(metrics.domain_diversity)
    )?;
    writeln!(out, "Coverage score: {:.2}", metrics.coverage_score)?;

    if !report.themes.is_empty() {
        writeln!(out, "Themes: {}", report.themes.join(", "))?;
    }

    if !report.top_keywords.is_empty() {
        writeln!(out, "\nTop {} keywords:", report.top_keywords.len())?;
        for entry in &report.top_keywords {
            writeln!(out, "- {}: {}", entry.keyword, format_number(entry.frequency))?;
        }
    }

    if !report.top_domains.is_empty() {
        writeln!(out, "\nTop {} domains:", report.top_domains.len())?;
        for (domain, count) in &report.top_domains {
            writeln!(out, "- {}: {} results", domain, format_number(*count))?;
        }
    }

    render_list(out, "Insights", &report.insights)
}

fn render_trends(out: &mut impl Write, report: &TrendsReport) -> fmt::Result {
    let temporal = &report.temporal_patterns;
    let freshness = &report.freshness_indicators;

    writeln!(out, "--- Search Result Trends ---")?;
    writeln!(out, "Recent indicators: {}", temporal.recent_indicators)?;
    writeln!(out, "Historical references: {}", temporal.historical_references)?;
    writeln!(out, "Time-sensitive content: {}", temporal.time_sensitive_content)?;
    writeln!(
        out,
        "Freshness: {} fresh, {} evergreen, {} outdated",
        freshness.fresh_content, freshness.evergreen_content, freshness.outdated_indicators
    )?;

    if !report.emerging_topics.is_empty() {
        writeln!(out, "\nEmerging topics:")?;
        for topic in &report.emerging_topics {
            writeln!(out, "- {}: {}", topic.topic, format_number(topic.score))?;
        }
    }

    render_list(out, "Insights", &report.trend_insights)
}

fn render_sources(out: &mut impl Write, report: &SourcesReport) -> fmt::Result {
    writeln!(out, "--- Search Result Sources ---")?;

    match &report.domain_distribution {
        Some(distribution) => {
            writeln!(
                out,
                "Domains: {} mentions, {} unique (top domain holds {})",
                format_number(distribution.total_domains),
                format_number(distribution.unique_domains),
                format_percent(distribution.domain_concentration)
            )?;
            writeln!(out, "\nTop {} domains:", distribution.top_domains.len())?;
            for (domain, count) in &distribution.top_domains {
                let credibility = report.credibility_scores.get(domain).copied().unwrap_or(0.0);
                writeln!(
                    out,
                    "- {}: {} results, credibility {:.1}",
                    domain,
                    format_number(*count),
                    credibility
                )?;
            }
        }
        None => {
            writeln!(out, "No domains could be extracted from the result URLs")?;
        }
    }

    let diversity = &report.diversity_metrics;
    writeln!(
        out,
        "\nDiversity score: {:.3}, top-3 share: {}, unique source ratio: {:.3}",
        diversity.diversity_score,
        format_percent(diversity.concentration_ratio),
        diversity.unique_source_ratio
    )?;

    render_list(out, "Recommendations", &report.source_recommendations)
}

fn render_keywords(out: &mut impl Write, report: &KeywordsReport) -> fmt::Result {
    writeln!(out, "--- Search Result Keywords ---")?;

    let mut ranked: Vec<(&String, &usize)> = report.keyword_frequency.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));

    if ranked.is_empty() {
        writeln!(out, "No keyword reached the frequency threshold")?;
    } else {
        writeln!(out, "\nKeywords:")?;
        for (keyword, freq) in ranked {
            let importance = report.importance_scores.get(keyword).copied().unwrap_or(0.0);
            writeln!(
                out,
                "- {}: {} (importance {:.3})",
                keyword,
                format_number(*freq),
                importance
            )?;
        }
    }

    if !report.keyword_clusters.is_empty() {
        writeln!(out, "\nClusters:")?;
        for (prefix, members) in &report.keyword_clusters {
            writeln!(out, "- {}*: {}", prefix, members.join(", "))?;
        }
    }

    render_list(out, "Insights", &report.keyword_insights)
}

fn render_relevance(out: &mut impl Write, report: &RelevanceReport) -> fmt::Result {
    let distribution = &report.relevance_distribution;

    writeln!(out, "--- Search Result Relevance ---")?;
    writeln!(out, "Average relevance: {:.2}", report.average_relevance)?;
    writeln!(out, "Average quality: {:.2}", report.average_quality)?;
    writeln!(
        out,
        "Distribution: {} high, {} medium, {} low",
        distribution.high_relevance, distribution.medium_relevance, distribution.low_relevance
    )?;

    writeln!(out, "\nPer result:")?;
    for (i, (relevance, quality)) in report
        .relevance_scores
        .iter()
        .zip(&report.quality_metrics)
        .enumerate()
    {
        writeln!(
            out,
            "- #{}: relevance {:.2}, quality {:.2}",
            i + 1,
            relevance,
            quality
        )?;
    }

    render_list(out, "Insights", &report.quality_insights)
}
