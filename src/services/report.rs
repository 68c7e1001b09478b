// Report Rendering
// Plain-text summary of an aggregate for terminal output

use std::fmt::Write;

use crate::models::{SentimentAggregate, SentimentLabel};
use super::text_processor::{normalize_post_text, truncate_for_display};

const BAR_WIDTH: usize = 40;

fn bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Summary counts, distribution bars, mean polarity, samples and insight.
pub fn render_report(query: &str, aggregate: &SentimentAggregate, truncate_length: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sentiment summary for {} ({} posts)", query, aggregate.total);
    for label in SentimentLabel::ALL {
        let _ = writeln!(out, "  {:<8} {:>4}", label.as_str(), aggregate.counts.get(label));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Distribution");
    for label in SentimentLabel::ALL {
        let pct = aggregate.percentages.get(label);
        let _ = writeln!(out, "  {:<8} {} {:>5.1}%", label.as_str(), bar(pct), pct);
    }
    let _ = writeln!(out, "  Mean polarity: {:+.3}", aggregate.mean_polarity);

    let _ = writeln!(out);
    let _ = writeln!(out, "Sample posts");
    for label in SentimentLabel::ALL {
        for post in aggregate.samples.get(label) {
            let text = truncate_for_display(&normalize_post_text(&post.text), truncate_length);
            let _ = writeln!(out, "  - [{}] {}", label.as_str(), text);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Quick insight: {}", aggregate.insight.message());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config_store::AnalysisConfig;
    use crate::services::sentiment::analyze;

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_render_report_sections() {
        let texts = vec![
            "I love this!".to_string(),
            "I hate this.".to_string(),
            format!("{} table", "long ".repeat(20)),
        ];
        let scorer = |t: &str| {
            if t.contains("love") {
                0.5
            } else if t.contains("hate") {
                -0.5
            } else {
                0.0
            }
        };
        let agg = analyze(&texts, &AnalysisConfig::default(), &scorer).unwrap();
        let report = render_report("\"test\" lang:en", &agg, 20);

        assert!(report.contains("(3 posts)"));
        assert!(report.contains("Positive    1"));
        assert!(report.contains("33.3%"));
        assert!(report.contains("Mean polarity: +0.000"));
        assert!(report.contains("- [Negative] I hate this."));
        assert!(report.contains("- [Neutral] long long long long ..."));
        assert!(report.contains("The sentiment is quite neutral."));
    }

    #[test]
    fn test_render_report_keeps_full_text() {
        let long = format!("{} table", "long ".repeat(20));
        let texts = vec![long.clone()];
        let agg = analyze(&texts, &AnalysisConfig::default(), &|_: &str| 0.0).unwrap();
        let report = render_report("q", &agg, 20);

        assert!(!report.contains(&long));
        assert_eq!(agg.posts[0].text, long);
        assert_eq!(agg.samples.neutral[0].text, long);
    }
}
