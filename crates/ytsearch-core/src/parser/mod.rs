//! Parsers for YouTube search-results pages
//!
//! Contains modules for extracting the embedded data payload and
//! collecting video entries from it.

pub mod initial_data;
pub mod videos;

pub use initial_data::parse_initial_data;
pub use videos::collect_videos;
