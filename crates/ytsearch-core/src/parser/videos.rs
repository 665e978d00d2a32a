//! Video collector for the initial-data payload
//!
//! The payload is an arbitrarily-shaped JSON tree; video entries are
//! buried in it at no fixed depth. Rather than chase the platform's
//! renderer hierarchy (which shifts between layouts), this walks the
//! whole tree and picks out every node carrying the video-entry
//! marker key.

use std::collections::VecDeque;

use serde_json::Value;

use crate::types::Video;

/// Key that identifies a payload node as one search-result video.
/// Channel, shelf and ad renderers never carry it.
const VIDEO_ENTRY_KEY: &str = "videoRenderer";

/// Collects all video entries from a parsed initial-data tree
///
/// Breadth-first traversal over the tree: scalar nodes are skipped,
/// composite nodes are either recognized as a video entry (by the
/// presence of the `videoRenderer` key) or have their composite-valued
/// children enqueued in natural enumeration order. A recognized
/// entry's children are never searched for further entries, so a
/// renderer nested inside another is not double-counted.
///
/// # Arguments
/// * `root` - Parsed initial-data payload of arbitrary shape
///
/// # Returns
/// Video records in discovery order; empty if the tree contains no
/// entries. Malformed sub-trees are skipped, never an error.
pub fn collect_videos(root: &Value) -> Vec<Video> {
    let mut videos = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        match node {
            Value::Object(fields) => {
                if let Some(renderer) = fields.get(VIDEO_ENTRY_KEY) {
                    if let Some(video) = parse_video_entry(renderer) {
                        videos.push(video);
                    }
                    // A matched node's fields are not searched for
                    // nested entries.
                    continue;
                }
                queue.extend(fields.values().filter(|value| is_composite(value)));
            }
            Value::Array(items) => {
                queue.extend(items.iter().filter(|value| is_composite(value)));
            }
            _ => {}
        }
    }

    videos
}

fn is_composite(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Normalizes one `videoRenderer` value into a flat record
///
/// Returns `None` when the value carries no string `videoId` (there is
/// nothing to link to without one). Missing title text flattens to an
/// empty string; missing description or length text becomes `None`.
fn parse_video_entry(renderer: &Value) -> Option<Video> {
    let id = renderer.get("videoId").and_then(Value::as_str)?.to_string();

    let title = flatten_runs(renderer.get("title").and_then(|title| title.get("runs")));

    let description = renderer
        .get("descriptionSnippet")
        .map(|snippet| flatten_runs(snippet.get("runs")))
        .filter(|text| !text.is_empty());

    let length_text = renderer
        .get("lengthText")
        .and_then(|length| length.get("simpleText"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    Some(Video {
        id,
        title,
        description,
        length_text,
    })
}

/// Flattens a "runs" array into plain text
///
/// Runs are the platform's convention for styled text: an ordered
/// sequence of fragments, each with a `text` field. The fragments are
/// concatenated in order with no separator. An absent or non-array
/// runs value flattens to the empty string, as does a fragment
/// without string text.
fn flatten_runs(runs: Option<&Value>) -> String {
    let Some(Value::Array(runs)) = runs else {
        return String::new();
    };

    runs.iter()
        .filter_map(|run| run.get("text").and_then(Value::as_str))
        .collect()
}
