// TweetPulse Data Models
// Per-request entities produced by the sentiment pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============ Labels ============

/// Categorical bucket derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Display order used by reports and exports.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Scored Post ============

/// One input text with its polarity and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPost {
    pub text: String,
    /// Polarity in [-1.0, 1.0].
    pub polarity: f64,
    pub label: SentimentLabel,
}

// ============ Counters ============

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn increment(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPercentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl LabelPercentages {
    /// 100 * count / total per label; all zero when total is 0.
    pub fn from_counts(counts: &LabelCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let pct = |n: usize| 100.0 * n as f64 / total as f64;
        Self {
            positive: pct(counts.positive),
            negative: pct(counts.negative),
            neutral: pct(counts.neutral),
        }
    }

    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSamples {
    #[serde(default)]
    pub positive: Vec<ScoredPost>,
    #[serde(default)]
    pub negative: Vec<ScoredPost>,
    #[serde(default)]
    pub neutral: Vec<ScoredPost>,
}

impl LabelSamples {
    pub fn get(&self, label: SentimentLabel) -> &[ScoredPost] {
        match label {
            SentimentLabel::Positive => &self.positive,
            SentimentLabel::Negative => &self.negative,
            SentimentLabel::Neutral => &self.neutral,
        }
    }

    pub fn set(&mut self, label: SentimentLabel, posts: Vec<ScoredPost>) {
        match label {
            SentimentLabel::Positive => self.positive = posts,
            SentimentLabel::Negative => self.negative = posts,
            SentimentLabel::Neutral => self.neutral = posts,
        }
    }
}

// ============ Insight ============

/// Headline comparison of positive vs negative counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    MostlyPositive,
    MostlyNegative,
    Balanced,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Insight::MostlyPositive => "Most users are feeling positive about this topic!",
            Insight::MostlyNegative => "Public sentiment seems largely negative.",
            Insight::Balanced => "The sentiment is quite neutral.",
        }
    }
}

// ============ Aggregate ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAggregate {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub counts: LabelCounts,
    pub percentages: LabelPercentages,
    pub mean_polarity: f64,
    pub insight: Insight,
    pub samples: LabelSamples,
    /// Every scored post, in input order.
    pub posts: Vec<ScoredPost>,
}
