//! Live search example
//!
//! Runs a real search against youtube.com and dumps the collected
//! records, useful for checking whether the payload layout still
//! matches.
//!
//! Usage: cargo run --example search_videos -- "some query"

use ytsearch_core::{Result, YoutubeScraper};

#[tokio::main]
async fn main() -> Result<()> {
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "How to make vegan dishes?".to_string());

    let scraper = YoutubeScraper::new()?;
    let videos = scraper.search(&query).await?;

    println!("Collected {} video entries for {:?}\n", videos.len(), query);
    for video in &videos {
        println!("{:#?}", video);
    }

    Ok(())
}
