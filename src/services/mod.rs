// TweetPulse Core Services

pub mod query_normalizer;
pub mod text_processor;
pub mod config_store;
pub mod search_client;
pub mod sentiment;
pub mod report;

pub use query_normalizer::*;
pub use text_processor::*;
pub use config_store::*;
pub use search_client::*;
pub use report::render_report;

// Re-export sentiment pipeline functions
pub use sentiment::{
    analyze,
    analyze_with_rng,
    classify,
    derive_insight,
    sample_without_replacement,
    save_csv,
    score_posts,
    to_csv_string,
    write_csv,
    ExportError,
    LexiconScorer,
    PolarityScorer,
    SentimentError,
};
