// Classifier
// Maps polarity scores onto the three sentiment labels

use tracing::warn;

use crate::models::{ScoredPost, SentimentLabel};
use crate::services::config_store::AnalysisConfig;
use super::scorer::PolarityScorer;

/// Strictly above the positive threshold is Positive, strictly below the
/// negative threshold is Negative, anything in between is Neutral.
pub fn classify(score: f64, config: &AnalysisConfig) -> SentimentLabel {
    if score > config.positive_threshold {
        SentimentLabel::Positive
    } else if score < config.negative_threshold {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Score and classify every text, keeping input order.
pub fn score_posts<S>(texts: &[String], config: &AnalysisConfig, scorer: &S) -> Vec<ScoredPost>
where
    S: PolarityScorer + ?Sized,
{
    texts
        .iter()
        .map(|text| {
            let polarity = bounded_polarity(scorer.polarity(text));
            ScoredPost {
                text: text.clone(),
                polarity,
                label: classify(polarity, config),
            }
        })
        .collect()
}

fn bounded_polarity(raw: f64) -> f64 {
    if raw.is_nan() {
        warn!("scorer returned NaN, treating as neutral");
        return 0.0;
    }
    raw.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = AnalysisConfig::default();
        assert_eq!(classify(0.5, &config), SentimentLabel::Positive);
        assert_eq!(classify(-0.5, &config), SentimentLabel::Negative);
        assert_eq!(classify(0.0, &config), SentimentLabel::Neutral);
        assert_eq!(classify(0.05, &config), SentimentLabel::Neutral);
        assert_eq!(classify(-0.05, &config), SentimentLabel::Neutral);
    }

    #[test]
    fn test_boundaries_are_neutral() {
        let config = AnalysisConfig::default();
        assert_eq!(classify(config.positive_threshold, &config), SentimentLabel::Neutral);
        assert_eq!(classify(config.negative_threshold, &config), SentimentLabel::Neutral);
    }

    #[test]
    fn test_zero_thresholds_split_binary() {
        let config = AnalysisConfig {
            positive_threshold: 0.0,
            negative_threshold: 0.0,
            ..AnalysisConfig::default()
        };
        assert_eq!(classify(0.01, &config), SentimentLabel::Positive);
        assert_eq!(classify(-0.01, &config), SentimentLabel::Negative);
        assert_eq!(classify(0.0, &config), SentimentLabel::Neutral);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let config = AnalysisConfig::default();
        for score in [-1.0, -0.1, -0.0999, 0.0, 0.1, 0.1001, 1.0] {
            assert_eq!(classify(score, &config), classify(score, &config));
        }
    }

    #[test]
    fn test_score_posts_clamps_and_handles_nan() {
        let config = AnalysisConfig::default();
        let texts = vec!["big".to_string(), "small".to_string(), "odd".to_string()];
        let scorer = |t: &str| match t {
            "big" => 3.0,
            "small" => -7.5,
            _ => f64::NAN,
        };
        let posts = score_posts(&texts, &config, &scorer);
        assert_eq!(posts[0].polarity, 1.0);
        assert_eq!(posts[1].polarity, -1.0);
        assert_eq!(posts[2].polarity, 0.0);
        assert_eq!(posts[2].label, SentimentLabel::Neutral);
        assert_eq!(posts[0].text, "big");
    }
}
