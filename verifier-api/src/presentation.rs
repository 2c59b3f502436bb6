//! Rendering of verification reports
//!
//! The terminal report mirrors what a reader needs at a glance: the label,
//! the confidence with a bar, the summary and the trusted sources. HTTP
//! clients receive a gauge description instead and draw it themselves.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;
use verifier_core::{ClassificationVerdict, Label};
use verifier_services::VerificationReport;

pub const REAL_COLOR: &str = "#2ecc71";
pub const FAKE_COLOR: &str = "#e74c3c";

/// Width of the terminal confidence bar, in cells
const BAR_WIDTH: usize = 20;

/// A colored band on the gauge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: [f64; 2],
    pub color: String,
}

/// Chart description of the confidence value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceGauge {
    pub value: f64,
    pub suffix: String,
    pub color: String,
    pub range: [f64; 2],
    pub steps: Vec<GaugeStep>,
}

impl ConfidenceGauge {
    pub fn for_verdict(verdict: &ClassificationVerdict) -> Self {
        let color = match verdict.label {
            Label::Real => REAL_COLOR,
            Label::Fake => FAKE_COLOR,
        };

        Self {
            value: verdict.confidence,
            suffix: "%".to_string(),
            color: color.to_string(),
            range: [0.0, 100.0],
            steps: vec![
                GaugeStep {
                    range: [0.0, 50.0],
                    color: "rgba(231, 76, 60, 0.1)".to_string(),
                },
                GaugeStep {
                    range: [50.0, 100.0],
                    color: "rgba(46, 204, 113, 0.1)".to_string(),
                },
            ],
        }
    }
}

/// Report plus gauge, as returned by the API and `check --json`
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    #[serde(flatten)]
    pub report: VerificationReport,
    pub gauge: ConfidenceGauge,
}

impl From<VerificationReport> for VerifyResponse {
    fn from(report: VerificationReport) -> Self {
        let gauge = ConfidenceGauge::for_verdict(&report.verdict);
        Self { report, gauge }
    }
}

/// Text bar such as `[##########----------]` for a percentage
pub fn confidence_bar(confidence: f64, width: usize) -> String {
    let fraction = (confidence / 100.0).clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Render a report for the terminal
pub fn render_report(report: &VerificationReport) -> String {
    let verdict = &report.verdict;
    let mut out = String::new();

    let label = match verdict.label {
        Label::Real => verdict.label.as_str().green().bold(),
        Label::Fake => verdict.label.as_str().red().bold(),
    };
    let bar = confidence_bar(verdict.confidence, BAR_WIDTH);
    let bar = match verdict.label {
        Label::Real => bar.green(),
        Label::Fake => bar.red(),
    };

    let _ = writeln!(out, "{}", "Headline".bold());
    let _ = writeln!(out, "  {}", report.headline);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Prediction".bold());
    let _ = writeln!(out, "  Status:        {}", label);
    let _ = writeln!(out, "  Confidence:    {:.2}% {}", verdict.confidence, bar);
    let _ = writeln!(
        out,
        "  Trusted share: {:.2}% ({} of {} results, via {})",
        verdict.trusted_share,
        verdict.match_count(),
        verdict.total_results,
        report.search_provider
    );
    if report.has_no_results() {
        let _ = writeln!(
            out,
            "  {}",
            "No search results found; the headline could not be verified.".yellow()
        );
    }
    if let Some(error) = &report.search_error {
        let _ = writeln!(out, "  Search error:  {}", error);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Summary".bold());
    let _ = writeln!(out, "  {}", report.summary.message());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Trusted Sources".bold());
    if report.trusted_sources.is_empty() {
        let _ = writeln!(out, "  No matches found on trusted news sites.");
    }
    for source in &report.trusted_sources {
        let _ = writeln!(out, "  {}. {}", source.rank, source.url);
        if let Some(excerpt) = &source.excerpt {
            let _ = writeln!(out, "     {}", excerpt.dimmed());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use verifier_core::SearchResult;
    use verifier_services::{SummaryOutcome, TrustedSource};

    use super::*;

    fn report(label: Label, matched: Vec<SearchResult>, total: usize) -> VerificationReport {
        let confidence = if matched.is_empty() { 0.0 } else { 50.0 };
        let trusted_sources = matched
            .iter()
            .enumerate()
            .map(|(i, r)| TrustedSource {
                rank: i + 1,
                url: r.url.clone(),
                title: r.title.clone(),
                excerpt: r.snippet.clone(),
            })
            .collect();

        VerificationReport {
            headline: "Rover lands on Mars".to_string(),
            query: "Rover lands on Mars".to_string(),
            search_provider: "serpapi".to_string(),
            verdict: ClassificationVerdict {
                label,
                confidence,
                matched_results: matched,
                total_results: total,
                trusted_share: if total == 0 { 0.0 } else { 50.0 },
            },
            trusted_sources,
            summary: SummaryOutcome::NoTrustedSource,
            search_error: None,
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn test_confidence_bar() {
        assert_eq!(confidence_bar(50.0, 10), "[#####-----]");
        assert_eq!(confidence_bar(0.0, 4), "[----]");
        assert_eq!(confidence_bar(100.0, 4), "[####]");
        assert_eq!(confidence_bar(250.0, 4), "[####]");
        assert_eq!(confidence_bar(-5.0, 4), "[----]");
    }

    #[test]
    fn test_gauge_color_follows_label() {
        let real = report(
            Label::Real,
            vec![SearchResult::new("https://bbc.com/a", "a")],
            2,
        );
        let gauge = ConfidenceGauge::for_verdict(&real.verdict);
        assert_eq!(gauge.color, REAL_COLOR);
        assert_eq!(gauge.value, 50.0);
        assert_eq!(gauge.steps.len(), 2);

        let fake = report(Label::Fake, Vec::new(), 1);
        assert_eq!(ConfidenceGauge::for_verdict(&fake.verdict).color, FAKE_COLOR);
    }

    #[test]
    fn test_render_real_report_lists_sources() {
        colored::control::set_override(false);
        let report = report(
            Label::Real,
            vec![SearchResult::new("https://bbc.com/a", "a").with_snippet("Lede text")],
            2,
        );

        let text = render_report(&report);

        assert!(text.contains("Status:        REAL"));
        assert!(text.contains("Confidence:    50.00% [##########----------]"));
        assert!(text.contains("1 of 2 results, via serpapi"));
        assert!(text.contains("  1. https://bbc.com/a"));
        assert!(text.contains("     Lede text"));
        assert!(!text.contains("No matches found"));
    }

    #[test]
    fn test_render_empty_report_explains_missing_results() {
        colored::control::set_override(false);
        let mut report = report(Label::Fake, Vec::new(), 0);
        report.search_error = Some("Search unavailable: serpapi: timeout".to_string());

        let text = render_report(&report);

        assert!(text.contains("Status:        FAKE"));
        assert!(text.contains("could not be verified"));
        assert!(text.contains("Search error:  Search unavailable: serpapi: timeout"));
        assert!(text.contains("No matches found on trusted news sites."));
        assert!(text.contains("No trusted article found to summarize."));
    }

    #[test]
    fn test_verify_response_flattens_report() {
        let response = VerifyResponse::from(report(Label::Fake, Vec::new(), 1));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["verdict"]["label"], "FAKE");
        assert_eq!(json["summary"]["status"], "no_trusted_source");
        assert_eq!(json["gauge"]["color"], FAKE_COLOR);
        assert_eq!(json["headline"], "Rover lands on Mars");
    }
}
