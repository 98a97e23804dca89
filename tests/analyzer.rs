//! End-to-end tests for the result analyzer public API.

use searchlens::analyzer::{AnalysisConfig, AnalysisMode, ResultAnalyzer};
use searchlens::report::*;
use searchlens::{AnalyzerError, SearchRecord};
use serde_json::{json, Value};

fn python_results() -> Vec<SearchRecord> {
    vec![
        SearchRecord::new(
            "Python Programming Tutorial - Learn Python Basics",
            "https://example.com/python-tutorial",
            "This comprehensive Python tutorial covers the basics of programming in Python. Learn about variables, functions, and data structures.",
        ),
        SearchRecord::new(
            "Advanced Python Techniques for Developers",
            "https://techblog.com/advanced-python",
            "Explore advanced Python techniques including decorators, generators, and context managers. Perfect for experienced developers.",
        ),
        SearchRecord::new(
            "Python vs JavaScript Comparison 2024",
            "https://comparison.com/python-js",
            "A detailed comparison between Python and JavaScript in 2024. Learn about performance, syntax, and use cases for both languages.",
        ),
        SearchRecord::new(
            "Machine Learning with Python",
            "https://ml-guide.com/python-ml",
            "Discover how to use Python for machine learning applications. This guide covers scikit-learn, TensorFlow, and PyTorch.",
        ),
        SearchRecord::new(
            "Python Web Development Best Practices",
            "https://webdev.com/python-best-practices",
            "Learn best practices for Python web development including frameworks like Django and Flask. Security and performance tips included.",
        ),
    ]
}

fn summary(outcome: &AnalysisOutcome) -> &SummaryReport {
    match outcome.report() {
        Some(Report::Summary(report)) => report,
        other => panic!("expected summary report, got {other:?}"),
    }
}

fn sources(outcome: &AnalysisOutcome) -> &SourcesReport {
    match outcome.report() {
        Some(Report::Sources(report)) => report,
        other => panic!("expected sources report, got {other:?}"),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn summary_of_distinct_python_results() {
    let analyzer = ResultAnalyzer::default();
    let outcome = analyzer.analyze(&python_results(), AnalysisMode::Summary);
    let report = summary(&outcome);

    assert_eq!(report.metrics.total_results, 5);
    assert_eq!(report.metrics.unique_domains, 5);
    assert_eq!(report.metrics.domain_diversity, 1.0);
    assert!(approx(report.metrics.coverage_score, 1.0));

    assert_eq!(report.top_keywords[0].keyword, "python");
    assert!(report.top_keywords.len() <= 10);
    assert_eq!(report.themes[0], "python");
    assert_eq!(report.top_domains.len(), 5);
    assert_eq!(report.top_domains[0], ("example.com".to_string(), 1));
    assert!(report
        .insights
        .contains(&"Dominant keyword: 'python' appears in majority of results".to_string()));
}

#[test]
fn summary_top_keywords_are_ranked() {
    let analyzer = ResultAnalyzer::default();
    let outcome = analyzer.analyze(&python_results(), AnalysisMode::Summary);
    let report = summary(&outcome);

    for pair in report.top_keywords.windows(2) {
        assert!(pair[0].frequency >= pair[1].frequency);
    }
}

#[test]
fn truncates_to_max_results_prefix() {
    let records: Vec<SearchRecord> = (0..15)
        .map(|i| SearchRecord::new("Result", &format!("https://site{i}.com/page"), ""))
        .collect();

    let analyzer = ResultAnalyzer::default();
    let outcome = analyzer.analyze(&records, AnalysisMode::Summary);
    let report = summary(&outcome);

    assert_eq!(report.metrics.total_results, 10);
    assert_eq!(report.metrics.unique_domains, 10);
    let top: Vec<&str> = report.top_domains.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(top, vec!["site0.com", "site1.com", "site2.com", "site3.com", "site4.com"]);

    let three = AnalysisConfig {
        max_results: 3,
        ..Default::default()
    };
    let outcome = analyzer.analyze_with(&records, AnalysisMode::Relevance, &three);
    match outcome.report() {
        Some(Report::Relevance(report)) => assert_eq!(report.relevance_scores.len(), 3),
        other => panic!("expected relevance report, got {other:?}"),
    }
}

#[test]
fn domain_diversity_is_unique_over_total() {
    let analyzer = ResultAnalyzer::default();
    let batches = vec![
        vec![
            SearchRecord::new("a", "https://a.com", ""),
            SearchRecord::new("b", "https://a.com/x", ""),
            SearchRecord::new("c", "https://b.org", ""),
            SearchRecord::new("d", "", ""),
        ],
        vec![SearchRecord::default()],
        python_results(),
    ];

    for records in batches {
        let outcome = analyzer.analyze(&records, AnalysisMode::Summary);
        let metrics = &summary(&outcome).metrics;
        assert!((0.0..=1.0).contains(&metrics.domain_diversity));
        assert!(approx(
            metrics.domain_diversity,
            metrics.unique_domains as f64 / metrics.total_results as f64
        ));
    }
}

#[test]
fn empty_input_yields_only_the_error_key_for_every_mode() {
    let analyzer = ResultAnalyzer::default();

    for mode in AnalysisMode::ALL {
        let outcome = analyzer.analyze(&[], mode);
        assert!(outcome.is_empty());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "No search results provided for analysis"})
        );
    }

    let outcome = analyzer.analyze_named(&[], "not-a-mode").unwrap();
    assert!(outcome.is_empty());
}

#[test]
fn unknown_mode_is_an_error() {
    let analyzer = ResultAnalyzer::default();
    let err = analyzer
        .analyze_named(&python_results(), "sentiment")
        .unwrap_err();

    assert_eq!(err, AnalyzerError::UnsupportedMode("sentiment".to_string()));
    assert_eq!(err.to_string(), "Unsupported analysis type: sentiment");

    for name in ["summary", "trends", "sources", "keywords", "relevance"] {
        assert!(analyzer.analyze_named(&python_results(), name).is_ok());
    }
}

#[test]
fn single_domain_sources() {
    let records: Vec<SearchRecord> = (0..3)
        .map(|i| SearchRecord::new("Example", &format!("https://example.com/{i}"), "text"))
        .collect();

    let analyzer = ResultAnalyzer::default();
    let outcome = analyzer.analyze(&records, AnalysisMode::Sources);
    let report = sources(&outcome);

    let distribution = report.domain_distribution.as_ref().unwrap();
    assert_eq!(distribution.unique_domains, 1);
    assert_eq!(distribution.total_domains, 3);
    assert_eq!(distribution.domain_concentration, 1.0);
    assert_eq!(report.diversity_metrics.diversity_score, 0.0);
    assert_eq!(report.diversity_metrics.concentration_ratio, 1.0);
    assert_eq!(report.credibility_scores["example.com"], 0.6);
    assert_eq!(
        report.source_recommendations,
        vec!["Mixed source credibility - cross-verification recommended"]
    );
}

#[test]
fn credibility_lists_override_tlds() {
    let records = vec![
        SearchRecord::new("Wiki", "https://wikipedia.org/wiki/Rust", ""),
        SearchRecord::new("Gov", "https://www.usa.gov/", ""),
        SearchRecord::new("Spam", "https://clickbait.com/you-wont-believe", ""),
        SearchRecord::new("Blog", "https://blog.example.io/post", ""),
    ];

    let analyzer = ResultAnalyzer::default();
    let outcome = analyzer.analyze(&records, AnalysisMode::Sources);
    let report = sources(&outcome);

    assert_eq!(report.credibility_scores["wikipedia.org"], 0.9);
    assert_eq!(report.credibility_scores["usa.gov"], 0.8);
    assert_eq!(report.credibility_scores["clickbait.com"], 0.2);
    assert_eq!(report.credibility_scores["blog.example.io"], 0.5);
    for score in report.credibility_scores.values() {
        assert!((0.0..=1.0).contains(score));
    }

    assert_eq!(
        report.source_recommendations,
        vec![
            "High credibility sources: wikipedia.org, usa.gov",
            "Consider verifying information from: clickbait.com",
        ]
    );
    assert!(approx(report.diversity_metrics.diversity_score, 0.75));
    assert!(approx(report.diversity_metrics.concentration_ratio, 0.75));
    assert!(approx(report.diversity_metrics.unique_source_ratio, 1.0));
}

#[test]
fn sources_without_any_url() {
    let records = vec![SearchRecord::new("No link", "", "content")];
    let analyzer = ResultAnalyzer::default();
    let outcome = analyzer.analyze(&records, AnalysisMode::Sources);
    let report = sources(&outcome);

    assert!(report.domain_distribution.is_none());
    assert!(report.credibility_scores.is_empty());
    assert_eq!(report.diversity_metrics, DiversityMetrics::default());
    assert!(report.source_recommendations.is_empty());

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["domain_distribution"], json!({}));
    let back: AnalysisOutcome = serde_json::from_value(value).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn ports_and_international_hosts_are_separate_sources() {
    let records = vec![
        SearchRecord::new("a", "https://a.com:8443/x", ""),
        SearchRecord::new("b", "https://a.com/y", ""),
        SearchRecord::new("c", "https://bücher.de/z", ""),
    ];

    let outcome = ResultAnalyzer::default().analyze(&records, AnalysisMode::Sources);
    let distribution = sources(&outcome).domain_distribution.as_ref().unwrap();

    assert_eq!(distribution.unique_domains, 3);
    assert_eq!(distribution.domain_distribution["a.com:8443"], 1);
    assert_eq!(distribution.domain_distribution["a.com"], 1);
    assert_eq!(distribution.domain_distribution["bücher.de"], 1);
    assert_eq!(sources(&outcome).credibility_scores["a.com:8443"], 0.6);
}

#[test]
fn relevance_buckets_include_their_lower_edge() {
    let records = vec![
        SearchRecord::new("Title", "https://a.com", &"x".repeat(400)),
        SearchRecord::new("Title", "", &"x".repeat(150)),
        SearchRecord::new("Title", "", ""),
    ];

    let outcome = ResultAnalyzer::default().analyze(&records, AnalysisMode::Relevance);
    let report = match outcome.report() {
        Some(Report::Relevance(report)) => report,
        other => panic!("expected relevance report, got {other:?}"),
    };

    assert_eq!(report.relevance_scores, vec![0.8, 0.5, 0.3]);
    assert_eq!(
        report.relevance_distribution,
        RelevanceDistribution {
            high_relevance: 1,
            medium_relevance: 1,
            low_relevance: 1,
        }
    );
}

#[test]
fn null_record_is_counted_but_contributes_nothing() {
    let mut records = python_results();
    records.insert(2, SearchRecord::default());

    let analyzer = ResultAnalyzer::default();
    for mode in AnalysisMode::ALL {
        assert!(!analyzer.analyze(&records, mode).is_empty());
    }

    let outcome = analyzer.analyze(&records, AnalysisMode::Summary);
    let report = summary(&outcome);
    assert_eq!(report.metrics.total_results, 6);
    assert_eq!(report.metrics.unique_domains, 5);

    let baseline = ResultAnalyzer::default().analyze(&python_results(), AnalysisMode::Summary);
    assert_eq!(report.top_keywords, summary(&baseline).top_keywords);

    let outcome = analyzer.analyze(&records, AnalysisMode::Relevance);
    match outcome.report() {
        Some(Report::Relevance(report)) => {
            assert_eq!(report.relevance_scores[2], 0.0);
            assert_eq!(report.quality_metrics[2], 0.0);
        }
        other => panic!("expected relevance report, got {other:?}"),
    }
}

#[test]
fn null_fields_in_json_input() {
    let records = searchlens::parse_records(
        r#"[{"title": null, "url": null, "content": null},
            {"title": "Rust", "url": "https://www.rust-lang.org", "content": "Rust is fast"}]"#,
    )
    .unwrap();

    let outcome = ResultAnalyzer::default().analyze(&records, AnalysisMode::Summary);
    let report = summary(&outcome);
    assert_eq!(report.metrics.total_results, 2);
    assert_eq!(report.top_domains, vec![("rust-lang.org".to_string(), 1)]);
}

#[test]
fn keywords_frequency_clusters_and_importance() {
    let records = vec![
        SearchRecord::new("Rust programming", "", "Programs in rust are fast"),
        SearchRecord::new("Rust programs", "", "Programming safety"),
    ];

    let outcome = ResultAnalyzer::default().analyze(&records, AnalysisMode::Keywords);
    let report = match outcome.report() {
        Some(Report::Keywords(report)) => report,
        other => panic!("expected keywords report, got {other:?}"),
    };

    assert_eq!(report.keyword_frequency.len(), 3);
    assert_eq!(report.keyword_frequency["rust"], 3);
    assert_eq!(report.keyword_frequency["programs"], 2);
    assert_eq!(report.keyword_frequency["programming"], 2);
    assert!(!report.keyword_frequency.contains_key("fast"));

    assert_eq!(report.keyword_clusters.len(), 1);
    assert_eq!(
        report.keyword_clusters["prog"],
        vec!["programming".to_string(), "programs".to_string()]
    );

    assert_eq!(report.importance_scores["rust"], 1.0);
    assert_eq!(report.importance_scores["programming"], 0.767);
    for score in report.importance_scores.values() {
        assert!((0.0..=1.0).contains(score));
    }

    assert_eq!(
        report.keyword_insights,
        vec![
            "Most prominent keyword: 'rust'",
            "Identified 1 keyword clusters showing related topics",
            "Low keyword diversity indicates focused topic coverage",
        ]
    );
}

#[test]
fn trends_counters_and_topics() {
    let records = vec![
        SearchRecord::new("Latest Rust release", "", "A guide to the new features"),
        SearchRecord::new("History of Rust", "", "The old compiler was written in OCaml"),
    ];

    let outcome = ResultAnalyzer::default().analyze(&records, AnalysisMode::Trends);
    let report = match outcome.report() {
        Some(Report::Trends(report)) => report,
        other => panic!("expected trends report, got {other:?}"),
    };

    assert_eq!(
        report.temporal_patterns,
        TemporalPatterns {
            recent_indicators: 1,
            historical_references: 1,
            time_sensitive_content: 0,
        }
    );
    assert_eq!(
        report.freshness_indicators,
        FreshnessIndicators {
            fresh_content: 1,
            evergreen_content: 1,
            outdated_indicators: 1,
        }
    );
    assert_eq!(
        report.emerging_topics[0],
        TopicScore {
            topic: "rust".to_string(),
            score: 2
        }
    );
    assert!(report.emerging_topics.len() <= 15);
    assert_eq!(
        report.trend_insights,
        vec!["Trending topic: 'rust' appears most frequently"]
    );
}

#[test]
fn relevance_scores_stay_in_range() {
    let mut records = python_results();
    records.push(SearchRecord::new("Only a title", "", ""));
    records.push(SearchRecord::new("", "https://long.org", &"Sentence one, with detail. ".repeat(60)));

    let outcome = ResultAnalyzer::default().analyze(&records, AnalysisMode::Relevance);
    let report = match outcome.report() {
        Some(Report::Relevance(report)) => report,
        other => panic!("expected relevance report, got {other:?}"),
    };

    assert_eq!(report.relevance_scores.len(), 7);
    for score in report.relevance_scores.iter().chain(&report.quality_metrics) {
        assert!((0.0..=1.0).contains(score), "score out of range: {score}");
    }
    assert_eq!(report.quality_metrics[5], 0.0);

    let distribution = &report.relevance_distribution;
    assert_eq!(
        distribution.high_relevance + distribution.medium_relevance + distribution.low_relevance,
        7
    );
    assert!(approx(
        report.average_relevance,
        report.relevance_scores.iter().sum::<f64>() / 7.0
    ));
}

#[test]
fn every_report_survives_a_json_round_trip() {
    let analyzer = ResultAnalyzer::default();
    let mut records = python_results();
    records.push(SearchRecord::new("Wiki", "https://wikipedia.org/wiki/Python", ""));

    for mode in AnalysisMode::ALL {
        let outcome = analyzer.analyze(&records, mode);
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: AnalysisOutcome = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, outcome, "{mode} changed across a round trip");

        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["analysis_type"], mode.as_str());
    }

    let outcome = analyzer.analyze(&records, AnalysisMode::Summary);
    let value = serde_json::to_value(&outcome).unwrap();
    for pair in value["top_domains"].as_array().unwrap() {
        assert_eq!(pair.as_array().unwrap().len(), 2);
    }
}
