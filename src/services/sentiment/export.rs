// CSV Export
// One row per scored post: text, polarity, label

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use thiserror::Error;
use tracing::info;

use crate::models::ScoredPost;

pub const CSV_HEADER: [&str; 3] = ["Tweet", "Polarity", "Sentiment"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn write_csv<W: Write>(posts: &[ScoredPost], writer: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    for post in posts {
        writer.write_record([
            post.text.as_str(),
            post.polarity.to_string().as_str(),
            post.label.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn to_csv_string(posts: &[ScoredPost]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(posts, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn save_csv(posts: &[ScoredPost], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(posts, file)?;
    info!(path = %path.display(), rows = posts.len(), "csv.saved");
    Ok(())
}
