//! Free-text annotation detector.
//!
//! Users name and describe their recordings ("Morning jog", "MTB w górach")
//! and those words are a usable second opinion when structural metadata is
//! missing. Less authoritative than an exporter-assigned type, more
//! authoritative than inferred kinematics.

use log::debug;

use crate::activity::Activity;
use crate::document::{has_local_name, TrackDocument};

/// Annotation fields whose text is searched for activity vocabulary.
const ANNOTATION_TAGS: [&str; 4] = ["name", "desc", "cmt", "keywords"];

/// Scan free-text annotation fields for activity vocabulary.
///
/// Concatenates the lowercased text of every name/desc/cmt/keywords node
/// (any namespace) into one blob and returns the first activity, in the
/// fixed declaration order, whose keyword list matches it. `None` when
/// nothing matches.
pub fn detect_keywords(doc: &TrackDocument) -> Option<Activity> {
    let mut texts = Vec::new();

    for tag in ANNOTATION_TAGS {
        for node in doc.descendants() {
            if !node.is_element() || !has_local_name(&node, tag) {
                continue;
            }
            if let Some(text) = node.text() {
                texts.push(text.to_lowercase());
            }
        }
    }

    let blob = texts.join(" ");

    for activity in Activity::ALL {
        if activity.matches(&blob) {
            debug!("[Keyword] detected {} from annotation text", activity);
            return Some(activity);
        }
    }

    None
}
