// Aggregation Logic
// Aggregates scored posts into the sentiment summary

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{
    Insight, LabelCounts, LabelPercentages, LabelSamples, ScoredPost, SentimentAggregate,
    SentimentLabel,
};
use crate::services::config_store::AnalysisConfig;
use super::classifier::score_posts;
use super::sampling::sample_without_replacement;
use super::scorer::PolarityScorer;
use super::SentimentError;

/// Analyze texts using the thread-local RNG for display samples.
pub fn analyze<S>(
    texts: &[String],
    config: &AnalysisConfig,
    scorer: &S,
) -> Result<SentimentAggregate, SentimentError>
where
    S: PolarityScorer + ?Sized,
{
    analyze_with_rng(texts, config, scorer, &mut rand::thread_rng())
}

/// Score, classify and summarize `texts`. Fails before producing any output
/// when there is nothing to classify or the thresholds are inconsistent.
pub fn analyze_with_rng<S, R>(
    texts: &[String],
    config: &AnalysisConfig,
    scorer: &S,
    rng: &mut R,
) -> Result<SentimentAggregate, SentimentError>
where
    S: PolarityScorer + ?Sized,
    R: Rng + ?Sized,
{
    if texts.is_empty() {
        return Err(SentimentError::EmptyInput);
    }
    config.validate()?;

    let posts = score_posts(texts, config, scorer);

    let mut counts = LabelCounts::default();
    for post in &posts {
        counts.increment(post.label);
    }
    let percentages = LabelPercentages::from_counts(&counts);
    let mean_polarity = mean_polarity(&posts);
    let insight = derive_insight(&counts);

    let mut samples = LabelSamples::default();
    for label in SentimentLabel::ALL {
        let members: Vec<ScoredPost> = posts.iter().filter(|p| p.label == label).cloned().collect();
        if members.is_empty() {
            continue;
        }
        let picked = sample_without_replacement(&members, config.sample_size_per_label, rng);
        debug!(label = %label, members = members.len(), sampled = picked.len(), "sample.drawn");
        samples.set(label, picked);
    }

    let aggregate = SentimentAggregate {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        total: posts.len(),
        counts,
        percentages,
        mean_polarity,
        insight,
        samples,
        posts,
    };

    info!(
        run_id = %aggregate.run_id,
        total = aggregate.total,
        positive = counts.positive,
        negative = counts.negative,
        neutral = counts.neutral,
        mean_polarity = aggregate.mean_polarity,
        "analysis.completed"
    );

    Ok(aggregate)
}

/// Positive vs negative headline; ties (including all-neutral) are Balanced.
pub fn derive_insight(counts: &LabelCounts) -> Insight {
    if counts.positive > counts.negative {
        Insight::MostlyPositive
    } else if counts.negative > counts.positive {
        Insight::MostlyNegative
    } else {
        Insight::Balanced
    }
}

fn mean_polarity(posts: &[ScoredPost]) -> f64 {
    if posts.is_empty() {
        return 0.0;
    }
    posts.iter().map(|p| p.polarity).sum::<f64>() / posts.len() as f64
}
