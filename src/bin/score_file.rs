use tweetpulse_lib::cli::{has_flag, parse_arg_value, parse_number};
use tweetpulse_lib::services::{
    analyze, render_report, save_csv, split_posts, truncate_for_display, AnalysisConfig,
    LexiconScorer, PolarityScorer,
};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  cargo run --bin score_file -- <posts.txt> [--samples <n>] [--truncate <n>] [--csv <path>] [--json] [--scores]\n\nNotes:\n  - One post per line; blank lines are skipped.\n  - --scores prints every post with its polarity before the summary."
        );
        return Ok(());
    }

    let path = args[1].clone();
    let mut config = AnalysisConfig::default();
    if let Some(n) = parse_number::<usize>(&args, "--samples")? {
        config.sample_size_per_label = n;
    }
    if let Some(n) = parse_number::<usize>(&args, "--truncate")? {
        config.truncate_length = n;
    }
    let as_json = has_flag(&args, "--json");
    let show_scores = has_flag(&args, "--scores");
    let csv_path = parse_arg_value(&args, "--csv");

    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("read file failed: {}", e))?;
    let posts = split_posts(&content);
    if posts.is_empty() {
        println!("No posts found in {}", path);
        return Ok(());
    }

    let scorer = LexiconScorer::new();

    if show_scores {
        for post in &posts {
            println!("{:+.3}  {}", scorer.polarity(post), truncate_for_display(post, 80));
        }
        println!();
    }

    let aggregate = analyze(&posts, &config, &scorer)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&aggregate)?);
    } else {
        print!("{}", render_report(&path, &aggregate, config.truncate_length));
    }

    if let Some(out) = csv_path {
        save_csv(&aggregate.posts, std::path::Path::new(&out))?;
        println!("Saved: {}", out);
    }

    Ok(())
}
