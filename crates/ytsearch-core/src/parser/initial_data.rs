//! Initial-data payload extractor for YouTube pages
//!
//! Server-rendered YouTube pages embed a JSON blob in an inline script
//! (`var ytInitialData = {...};</script>`) to bootstrap client-side
//! rendering. This module cuts that blob out of the raw HTML and
//! parses it.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Result, YoutubeError};

/// Matches the first ytInitialData assignment in the document.
///
/// The capture is everything between `= ` and the first `;</script>`
/// terminator. `(?s)` lets `.` cross the newlines that the embedded
/// JSON literal may contain, so the whole document is matched in a
/// single pass rather than line by line.
static INITIAL_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var ytInitialData = (.*?);</script>").expect("hardcoded pattern is valid")
});

/// Extracts and parses the ytInitialData payload from page HTML
///
/// # Arguments
/// * `html` - Raw HTML string of a search-results page
///
/// # Returns
/// The parsed payload as a `serde_json::Value` tree of arbitrary shape
///
/// # Errors
/// - `PayloadNotFound` - the assignment pattern does not occur in the
///   document; no fallback pattern is attempted
/// - `PayloadParse` - the captured substring is not valid JSON; wraps
///   the underlying parse diagnostic
pub fn parse_initial_data(html: &str) -> Result<Value> {
    let captures = INITIAL_DATA_RE
        .captures(html)
        .ok_or(YoutubeError::PayloadNotFound)?;
    let payload = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

    serde_json::from_str(payload).map_err(YoutubeError::PayloadParse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_initial_data_single_line() {
        let html = r#"<html><script>var ytInitialData = {"contents":{"items":[1,2]}};</script></html>"#;

        let data = parse_initial_data(html).unwrap();
        assert_eq!(data["contents"]["items"][1], 2);
    }

    #[test]
    fn test_parse_initial_data_spans_newlines() {
        let html = "<script>var ytInitialData = {\n  \"a\": [\n    {\"b\": \"c\"}\n  ]\n};</script>";

        let data = parse_initial_data(html).unwrap();
        assert_eq!(data["a"][0]["b"], "c");
    }

    #[test]
    fn test_parse_initial_data_takes_first_match() {
        let html = concat!(
            r#"<script>var ytInitialData = {"first":true};</script>"#,
            r#"<script>var ytInitialData = {"first":false};</script>"#,
        );

        let data = parse_initial_data(html).unwrap();
        assert_eq!(data["first"], true);
    }

    #[test]
    fn test_parse_initial_data_stops_at_first_terminator() {
        // The non-greedy capture must end at the first `;</script>`,
        // not swallow the rest of the document.
        let html = r#"<script>var ytInitialData = {"a":1};</script><p>tail</p>;</script>"#;

        let data = parse_initial_data(html).unwrap();
        assert_eq!(data["a"], 1);
    }

    #[test]
    fn test_marker_absent_is_not_found() {
        let html = "<html><body><p>Nothing embedded here</p></body></html>";

        let result = parse_initial_data(html);
        match result {
            Err(YoutubeError::PayloadNotFound) => {}
            other => panic!("Expected PayloadNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_marker_absent_skips_json_parse() {
        // Invalid JSON elsewhere in the document must not be parsed
        // when the marker itself is missing.
        let html = r#"<script>var somethingElse = {invalid;</script>"#;

        let result = parse_initial_data(html);
        match result {
            Err(YoutubeError::PayloadNotFound) => {}
            other => panic!("Expected PayloadNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        let html = r#"<script>var ytInitialData = {invalid;</script>"#;

        let result = parse_initial_data(html);
        match result {
            Err(YoutubeError::PayloadParse(_)) => {}
            other => panic!("Expected PayloadParse, got {:?}", other),
        }
    }
}
