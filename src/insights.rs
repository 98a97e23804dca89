//! Fixed-rule, human-readable observations attached to each report.

use crate::keywords::Tally;
use crate::lexicon::{mentions_any, TIMELY_CONTENT_WORDS};
use crate::record::SearchRecord;
use crate::scoring::mean;

pub fn summary_insights(
    record_count: usize,
    unique_domains: usize,
    themes: &[String],
    top_keywords: &[(String, usize)],
) -> Vec<String> {
    let mut insights = Vec::new();

    if record_count < 5 {
        insights.push("Limited number of results available for comprehensive analysis".to_string());
    }

    if unique_domains == 1 {
        insights.push("All results from single domain - limited source diversity".to_string());
    }

    if !themes.is_empty() {
        let primary: Vec<&str> = themes.iter().take(3).map(String::as_str).collect();
        insights.push(format!("Primary themes identified: {}", primary.join(", ")));
    }

    if let Some((keyword, freq)) = top_keywords.first() {
        if *freq as f64 > record_count as f64 * 0.5 {
            insights.push(format!(
                "Dominant keyword: '{keyword}' appears in majority of results"
            ));
        }
    }

    insights
}

pub fn trend_insights(records: &[SearchRecord], top_keywords: &[(String, usize)]) -> Vec<String> {
    let mut insights = Vec::new();

    let timely = records
        .iter()
        .filter(|record| mentions_any(&record.content().to_lowercase(), TIMELY_CONTENT_WORDS))
        .count();

    if timely as f64 > records.len() as f64 * 0.5 {
        insights.push("Majority of results contain recent/timely information".to_string());
    }

    if let Some((keyword, _)) = top_keywords.first() {
        insights.push(format!("Trending topic: '{keyword}' appears most frequently"));
    }

    insights
}

/// `scored` holds each distinct domain with its credibility, first-seen order.
pub fn source_recommendations(scored: &[(String, f64)]) -> Vec<String> {
    let mut recommendations = Vec::new();

    let high: Vec<&str> = scored
        .iter()
        .filter(|(_, score)| *score >= 0.8)
        .map(|(domain, _)| domain.as_str())
        .collect();
    let low: Vec<&str> = scored
        .iter()
        .filter(|(_, score)| *score < 0.4)
        .map(|(domain, _)| domain.as_str())
        .collect();

    if !high.is_empty() {
        let named: Vec<&str> = high.iter().take(3).copied().collect();
        recommendations.push(format!("High credibility sources: {}", named.join(", ")));
    }

    if !low.is_empty() {
        recommendations.push(format!(
            "Consider verifying information from: {}",
            low.join(", ")
        ));
    }

    if high.is_empty() && !scored.is_empty() {
        recommendations.push("Mixed source credibility - cross-verification recommended".to_string());
    }

    recommendations
}

pub fn keyword_insights(filtered: &Tally, cluster_count: usize) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some((keyword, _)) = filtered.most_common(1).first() {
        insights.push(format!("Most prominent keyword: '{keyword}'"));
    }

    if cluster_count > 0 {
        insights.push(format!(
            "Identified {cluster_count} keyword clusters showing related topics"
        ));
    }

    let diversity = filtered.distinct();
    if diversity > 20 {
        insights.push("High keyword diversity suggests broad topic coverage".to_string());
    } else if diversity < 5 {
        insights.push("Low keyword diversity indicates focused topic coverage".to_string());
    }

    insights
}

pub fn quality_insights(relevance_scores: &[f64], quality_scores: &[f64]) -> Vec<String> {
    let mut insights = Vec::new();

    if !relevance_scores.is_empty() {
        let average = mean(relevance_scores.iter().copied());
        if average > 0.7 {
            insights.push("High average relevance across results".to_string());
        } else if average < 0.4 {
            insights.push("Low average relevance - consider refining search query".to_string());
        }
    }

    if !quality_scores.is_empty() {
        let average = mean(quality_scores.iter().copied());
        if average > 0.7 {
            insights.push("High content quality observed in results".to_string());
        } else if average < 0.4 {
            insights.push("Variable content quality - verify critical information".to_string());
        }
    }

    insights
}
