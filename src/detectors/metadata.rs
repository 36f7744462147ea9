//! Structural metadata detector.
//!
//! Garmin, Strava, Locus, Polar and Suunto exports all embed a
//! device-assigned activity type somewhere in the tree, under tag names
//! like `type`, `sport` or `activitytype`. When such a field exists it is
//! the most authoritative signal a file can carry.

use log::debug;

use crate::activity::Activity;
use crate::document::{local_name, TrackDocument};

/// Tag-name fragments that mark an exporter-assigned activity field.
const STRUCTURAL_MARKERS: [&str; 6] = [
    "activity",
    "sport",
    "type",
    "activitytype",
    "tracktype",
    "keywords",
];

/// Scan structural fields for unambiguous activity vocabulary.
///
/// Collects the text of every node whose tag name contains a structural
/// marker, then returns the first activity whose keyword list matches any
/// candidate, in traversal order. `None` when no candidate matches.
pub fn detect_metadata(doc: &TrackDocument) -> Option<Activity> {
    let mut candidates = Vec::new();

    for node in doc.descendants() {
        if !node.is_element() {
            continue;
        }
        let tag = local_name(&node);
        if STRUCTURAL_MARKERS.iter().any(|m| tag.contains(m)) {
            candidates.push(node.text().unwrap_or("").to_lowercase());
        }
    }

    for text in &candidates {
        for activity in Activity::ALL {
            if activity.matches(text) {
                debug!("[Metadata] detected {} from structural field", activity);
                return Some(activity);
            }
        }
    }

    None
}
