//! YouTube Search Scraper Core Library
//!
//! Provides an async API for scraping video entries from YouTube
//! search-results pages.
//!
//! # Overview
//!
//! YouTube embeds a JSON payload (`ytInitialData`) in its
//! server-rendered search pages to bootstrap client-side rendering.
//! This crate fetches a results page with desktop-browser headers,
//! cuts that payload out of the HTML, and walks the JSON tree
//! breadth-first to collect every node carrying the video-entry
//! marker:
//! - HTTP client with the fixed headers YouTube expects
//! - payload extractor for the embedded ytInitialData blob
//! - tree-walking collector that normalizes entries into flat records
//! - high-level API tying the pipeline together
//!
//! # Example
//!
//! ```no_run
//! use ytsearch_core::{Result, YoutubeScraper};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = YoutubeScraper::new()?;
//!
//!     let videos = scraper.search("How to make vegan dishes?").await?;
//!
//!     for video in videos.iter().take(10) {
//!         println!("{}: {}", video.id, video.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Stability
//!
//! The payload is an undocumented data source: the extraction depends
//! on the `var ytInitialData = ...;</script>` assignment and on the
//! `videoRenderer` key, both of which YouTube may change without
//! notice. When the layout shifts, a run fails with
//! [`YoutubeError::PayloadNotFound`] rather than returning partial
//! results.

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, YoutubeClient};

// Re-export error types
pub use error::{Result, YoutubeError};

// Re-export parser functions
pub use parser::{collect_videos, parse_initial_data};

// Re-export main scraper API
pub use scraper::YoutubeScraper;

// Re-export data types
pub use types::Video;

// Re-export URL helper functions for convenience
pub use url::{build_search_url, build_watch_url};
