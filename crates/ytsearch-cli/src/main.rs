//! Command-line frontend for the YouTube search scraper
//!
//! Runs one fixed search and prints the top results as blocks of
//! title, watch URL, description and duration. Exit status is 0 when
//! at least one video was printed and 1 on any failure, whether a
//! fetch/payload error or an empty result set; the stderr message
//! tells the two apart.

use std::process::ExitCode;

use ytsearch_core::url::build_watch_url;
use ytsearch_core::{Video, YoutubeError, YoutubeScraper};

/// The search query is a fixed literal in this version, not user
/// input.
const SEARCH_QUERY: &str = "How to make vegan dishes?";

/// How many of the collected records are printed.
const MAX_RESULTS: usize = 10;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ytsearch_core::Result<String> {
    let scraper = YoutubeScraper::new()?;
    let videos = scraper.search(SEARCH_QUERY).await?;

    if videos.is_empty() {
        return Err(YoutubeError::EmptyResults);
    }

    Ok(render_results(&videos))
}

/// Renders the top results as printable blocks
///
/// Truncates to the first [`MAX_RESULTS`] records, keeping discovery
/// order. Each block carries the 1-based rank with the title, the
/// canonical watch URL, the description and duration lines when
/// present, and a trailing blank line.
fn render_results(videos: &[Video]) -> String {
    let mut output = String::new();

    for (index, video) in videos.iter().take(MAX_RESULTS).enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, video.title));
        output.push_str(&format!("   {}\n", build_watch_url(&video.id)));
        if let Some(description) = &video.description {
            output.push_str(&format!("   {}\n", description));
        }
        if let Some(length_text) = &video.length_text {
            output.push_str(&format!("   Duration: {}\n", length_text));
        }
        output.push('\n');
    }

    output
}
