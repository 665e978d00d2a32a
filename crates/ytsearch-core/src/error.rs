//! Error types for the YouTube search scraper
//!
//! Provides one error enum covering the whole pipeline, with
//! human-readable messages.

use thiserror::Error;

/// Error type for all YouTube search scraper operations
///
/// Every failure is terminal for the single run: there is no retry,
/// no partial-success mode and no recovery path.
#[derive(Error, Debug)]
pub enum YoutubeError {
    /// Transport-level failure (connection, TLS, reading the body)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered the search request with a non-success status
    #[error("Failed to fetch search results: {status} {status_text}")]
    Fetch {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase for the status, empty if unknown
        status_text: String,
    },

    /// The ytInitialData assignment was not found in the page
    #[error("Unable to locate ytInitialData payload")]
    PayloadNotFound,

    /// The ytInitialData assignment was found but is not valid JSON
    #[error("Failed to parse ytInitialData payload: {0}")]
    PayloadParse(#[from] serde_json::Error),

    /// The payload parsed cleanly but contained no video entries
    #[error("No videos found in search results")]
    EmptyResults,
}

/// Result type alias for YouTube search scraper operations
pub type Result<T> = std::result::Result<T, YoutubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_fetch() {
        let error = YoutubeError::Fetch {
            status: 403,
            status_text: "Forbidden".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch search results: 403 Forbidden"
        );
    }

    #[test]
    fn test_error_display_payload_not_found() {
        let error = YoutubeError::PayloadNotFound;
        assert_eq!(error.to_string(), "Unable to locate ytInitialData payload");
    }

    #[test]
    fn test_error_display_payload_parse() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{invalid")
            .expect_err("input is not valid JSON");
        let error = YoutubeError::PayloadParse(parse_error);
        assert!(
            error
                .to_string()
                .starts_with("Failed to parse ytInitialData payload: ")
        );
    }

    #[test]
    fn test_error_display_empty_results() {
        let error = YoutubeError::EmptyResults;
        assert_eq!(error.to_string(), "No videos found in search results");
    }

    #[test]
    fn test_empty_results_and_parse_messages_are_distinct() {
        // Both cases exit non-zero, so the messages are the only way
        // to tell them apart from the terminal.
        let parse_error = serde_json::from_str::<serde_json::Value>("{invalid")
            .expect_err("input is not valid JSON");
        assert_ne!(
            YoutubeError::EmptyResults.to_string(),
            YoutubeError::PayloadParse(parse_error).to_string()
        );
    }
}
