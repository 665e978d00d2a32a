//! Main scraper API for YouTube search
//!
//! Provides the high-level API combining the HTTP client and the
//! payload parsers.

use crate::client::{ClientConfig, YoutubeClient};
use crate::error::Result;
use crate::parser::{collect_videos, parse_initial_data};
use crate::types::Video;
use crate::url::build_search_url;

/// Main scraper API for YouTube search
///
/// Runs the whole pipeline for one query: build the search URL, fetch
/// the results page, cut out the embedded ytInitialData payload and
/// collect the video entries from it.
pub struct YoutubeScraper {
    client: YoutubeClient,
}

impl YoutubeScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = YoutubeClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Arguments
    /// * `config` - Custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = YoutubeClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search for videos by query
    ///
    /// The query is not validated; it is percent-encoded as-is into
    /// the search URL.
    ///
    /// # Arguments
    /// * `query` - Search query string
    ///
    /// # Returns
    /// Video records in the order the collector discovered them in the
    /// payload; empty if the page contained no video entries (a valid
    /// outcome, not an error)
    ///
    /// # Errors
    /// - `Http` / `Fetch` if the search request fails
    /// - `PayloadNotFound` / `PayloadParse` if the page carries no
    ///   usable ytInitialData payload
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytsearch_core::Result<()> {
    /// use ytsearch_core::YoutubeScraper;
    /// let scraper = YoutubeScraper::new()?;
    /// let videos = scraper.search("vegan dishes").await?;
    /// for video in videos {
    ///     println!("{}: {}", video.id, video.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<Video>> {
        let search_url = build_search_url(query);
        let html = self.client.fetch(&search_url).await?;
        let data = parse_initial_data(&html)?;
        Ok(collect_videos(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_creation() {
        let scraper = YoutubeScraper::new();
        assert!(scraper.is_ok());
    }

    #[test]
    fn test_scraper_with_custom_config() {
        let config = ClientConfig {
            user_agent: "custom-agent/2.0".to_string(),
            accept_language: "de-DE,de;q=0.9".to_string(),
        };
        let scraper = YoutubeScraper::with_config(config);
        assert!(scraper.is_ok());
    }
}
