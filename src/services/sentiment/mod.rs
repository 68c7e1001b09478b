// Sentiment Module
// Query-to-sentiment core organized into specialized submodules:
// - scorer: polarity scoring (trait + lexicon default)
// - classifier: score to label by thresholds
// - sampling: uniform sampling without replacement
// - aggregation: counts, percentages, mean, insight, samples
// - export: CSV export of scored posts

pub mod scorer;
pub mod classifier;
pub mod sampling;
pub mod aggregation;
pub mod export;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentimentError {
    #[error("No texts to classify")]
    EmptyInput,
    #[error("Invalid analysis config: {0}")]
    InvalidConfig(String),
}

pub use scorer::{LexiconScorer, PolarityScorer};
pub use classifier::{classify, score_posts};
pub use sampling::sample_without_replacement;
pub use aggregation::{analyze, analyze_with_rng, derive_insight};
pub use export::{save_csv, to_csv_string, write_csv, ExportError, CSV_HEADER};
