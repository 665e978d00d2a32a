//! URL helper functions for youtube.com
//!
//! Provides functions for building search and watch URLs.

const BASE_URL: &str = "https://www.youtube.com";

/// Builds the search-results URL for a given query
///
/// Percent-encodes the query and appends it as the `search_query`
/// parameter of the fixed results endpoint. The query itself is not
/// validated in any way.
///
/// # Arguments
/// * `query` - Search query string
///
/// # Returns
/// Full search URL with encoded query
///
/// # Example
/// ```
/// use ytsearch_core::url::build_search_url;
/// let url = build_search_url("vegan dishes");
/// assert_eq!(url, "https://www.youtube.com/results?search_query=vegan%20dishes");
/// ```
pub fn build_search_url(query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/results?search_query={}", BASE_URL, encoded)
}

/// Builds the canonical watch-page URL from a video id
///
/// # Arguments
/// * `id` - Watch-page video id (e.g. "dQw4w9WgXcQ")
///
/// # Returns
/// Full URL to the watch page
///
/// # Example
/// ```
/// use ytsearch_core::url::build_watch_url;
/// let url = build_watch_url("dQw4w9WgXcQ");
/// assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// ```
pub fn build_watch_url(id: &str) -> String {
    format!("{}/watch?v={}", BASE_URL, id)
}
