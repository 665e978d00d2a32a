//! Core data types for the YouTube search scraper
//!
//! Contains the main data structures used throughout the library.

use serde::{Deserialize, Serialize};

/// One video entry collected from a YouTube search-results page
///
/// Built by flattening the platform's nested "runs" text structures
/// into plain strings. Records are created once per matching payload
/// node and never mutated; their order is the order in which the
/// collector discovered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Watch-page video id (e.g. "dQw4w9WgXcQ")
    pub id: String,

    /// Video title, flattened from the title runs; empty if the
    /// renderer carried no title text
    pub title: String,

    /// Flattened description snippet; `None` when the renderer carried
    /// no snippet (or the snippet flattened to nothing)
    pub description: Option<String>,

    /// Human-readable duration (e.g. "3:45"); `None` for entries
    /// without one, such as live streams
    pub length_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_serialization() {
        let video = Video {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Test Video".to_string(),
            description: Some("A test description".to_string()),
            length_text: Some("3:45".to_string()),
        };

        let json = serde_json::to_string(&video).expect("Serialization should succeed");
        let deserialized: Video =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(video, deserialized);
    }

    #[test]
    fn test_video_with_none_fields() {
        let video = Video {
            id: "xyz".to_string(),
            title: "Minimal Video".to_string(),
            description: None,
            length_text: None,
        };

        let json = serde_json::to_string(&video).expect("Serialization should succeed");
        let deserialized: Video =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(video, deserialized);
    }
}
