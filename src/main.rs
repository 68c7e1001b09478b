use anyhow::{anyhow, bail, Context};
use std::path::PathBuf;
use tracing::{info, warn};

use tweetpulse_lib::cli::{has_flag, parse_arg_value, parse_number, run_token_command};
use tweetpulse_lib::services::{
    analyze, clamp_fetch_limit, get_bearer_token, normalize_with, render_report, save_csv,
    ConfigStore, LexiconScorer, SearchClient,
};

const USAGE: &str = "Usage:\n  tweetpulse <query> [--limit <n>] [--lang <code>] [--samples <n>] [--truncate <n>] [--include-retweets] [--csv <path>] [--json] [--config <dir>]\n  tweetpulse --set-token <token> [--config <dir>]\n  tweetpulse --clear-token [--config <dir>]\n\nNotes:\n  - A query starting with # or @ is searched as a hashtag/mention, anything else as an exact phrase.\n  - --limit is bounded to 10..=100 posts per request.\n  - The bearer token is read from TWEETPULSE_BEARER_TOKEN, TWITTER_BEARER_TOKEN or the config file.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || has_flag(&args, "--help") {
        eprintln!("{}", USAGE);
        return Ok(());
    }

    let store = match parse_arg_value(&args, "--config") {
        Some(dir) => ConfigStore::new(PathBuf::from(dir)),
        None => ConfigStore::new(
            ConfigStore::default_config_dir().unwrap_or_else(|| PathBuf::from(".tweetpulse")),
        ),
    };

    if let Some(message) = run_token_command(&args, &store)? {
        println!("{}", message);
        return Ok(());
    }

    let raw_query = args[1].trim().to_string();
    if raw_query.is_empty() || raw_query.starts_with("--") {
        eprintln!("{}", USAGE);
        bail!("a non-empty query is required");
    }

    tweetpulse_lib::init_logging();

    let mut config = store.load().map_err(|e| anyhow!(e))?;

    if let Some(limit) = parse_number::<u32>(&args, "--limit")? {
        config.search.max_results = limit;
    }
    if let Some(lang) = parse_arg_value(&args, "--lang") {
        config.search.language = lang;
    }
    if has_flag(&args, "--include-retweets") {
        config.search.exclude_retweets = false;
    }
    if let Some(samples) = parse_number::<usize>(&args, "--samples")? {
        config.analysis.sample_size_per_label = samples;
    }
    if let Some(truncate) = parse_number::<usize>(&args, "--truncate")? {
        config.analysis.truncate_length = truncate;
    }
    let as_json = has_flag(&args, "--json");
    let csv_path = parse_arg_value(&args, "--csv").map(PathBuf::from);

    let filters = config.search.query_filters();
    let query = normalize_with(&raw_query, &filters);
    let limit = clamp_fetch_limit(config.search.max_results);
    info!(query = %query, limit, "search.requested");

    let token = get_bearer_token(&store).map_err(|e| anyhow!(e.user_message()))?;
    let client = SearchClient::from_config(&config.search);

    let texts = match client
        .search_recent(&token, &query, limit, filters.effective_language())
        .await
    {
        Ok(texts) => texts,
        Err(e) => {
            warn!(error = %e, "search.error");
            bail!(e.user_message());
        }
    };

    if texts.is_empty() {
        println!(
            "No posts found for {} in language '{}'.",
            raw_query,
            filters.effective_language()
        );
        return Ok(());
    }

    let scorer = LexiconScorer::new();
    let aggregate = analyze(&texts, &config.analysis, &scorer)?;

    if as_json {
        let json = serde_json::to_string_pretty(&aggregate).context("failed to serialize summary")?;
        println!("{}", json);
    } else {
        print!("{}", render_report(&query, &aggregate, config.analysis.truncate_length));
    }

    if let Some(path) = csv_path {
        save_csv(&aggregate.posts, &path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        eprintln!("CSV written to {}", path.display());
    }

    Ok(())
}
