//! HTTP client for youtube.com
//!
//! Wraps `reqwest::Client` with the fixed desktop-browser headers that
//! make YouTube serve the full server-rendered HTML (and its embedded
//! ytInitialData payload).

use crate::error::{Result, YoutubeError};

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Configuration for the HTTP client
///
/// The defaults are the only configuration this program carries; there
/// are no config files and no environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with every request (default: a fixed
    /// desktop Chrome string)
    pub user_agent: String,
    /// Accept-Language header sent with every request
    /// (default: "en-US,en;q=0.9")
    pub accept_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
        }
    }
}

/// HTTP client wrapper for youtube.com
///
/// Issues plain GET requests with the configured headers. No cookie
/// store, no rate limiting, no retries and no application-level
/// timeout: a search run is a single best-effort request, and any
/// failure is terminal.
pub struct YoutubeClient {
    client: reqwest::Client,
    accept_language: String,
}

impl YoutubeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns `Http` if the underlying `reqwest::Client` cannot be
    /// built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(YoutubeError::Http)?;

        Ok(Self {
            client,
            accept_language: config.accept_language,
        })
    }

    /// Fetch a page as text
    ///
    /// # Arguments
    /// * `url` - Full URL to fetch
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - `Http` - transport failure (connection, TLS, reading the body)
    /// - `Fetch` - the server answered with a non-success status;
    ///   carries the numeric status and its canonical reason phrase
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.accept_language)
            .send()
            .await
            .map_err(YoutubeError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(YoutubeError::Fetch {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response.text().await.map_err(YoutubeError::Http)
    }
}
