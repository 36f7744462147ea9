//! Activity vocabulary: internal tags, keyword lists and canonical labels.
//!
//! The six internal tags and the seven canonical display labels are in
//! strict 1:1 correspondence except for the "Other" terminal, which only
//! exists at the output boundary. A detector that finds no evidence
//! returns `None` rather than any tag, so "no signal" can never collide
//! with a real activity encoding.
//!
//! Keyword lists and the tag→label map are process-wide constant data.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Canonical label for tracks no detector could attribute.
pub const OTHER_LABEL: &str = "Other";

/// Internal activity tag, one of the six types the detectors can vote for.
///
/// The declaration order is significant: every activity scan in the crate
/// (metadata candidates, keyword blob, vote counting) iterates
/// [`Activity::ALL`] in this order and returns the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Ride,
    Run,
    Swim,
    Walk,
    Hike,
    Workout,
}

impl Activity {
    /// All activities, in the fixed scan order.
    pub const ALL: [Activity; 6] = [
        Activity::Ride,
        Activity::Run,
        Activity::Swim,
        Activity::Walk,
        Activity::Hike,
        Activity::Workout,
    ];

    /// Internal lowercase tag.
    pub fn tag(self) -> &'static str {
        match self {
            Activity::Ride => "ride",
            Activity::Run => "run",
            Activity::Swim => "swim",
            Activity::Walk => "walk",
            Activity::Hike => "hike",
            Activity::Workout => "workout",
        }
    }

    /// Canonical display label crossing the output boundary.
    pub fn label(self) -> &'static str {
        match self {
            Activity::Ride => "Ride",
            Activity::Run => "Run",
            Activity::Swim => "Swim",
            Activity::Walk => "Walk",
            Activity::Hike => "Hike",
            Activity::Workout => "Workout",
        }
    }

    /// Vocabulary that identifies this activity in free text.
    ///
    /// Mixed-language lists (English/German/Polish) matching what common
    /// exporters and users actually write into GPX fields.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Activity::Ride => &[
                "ride", "bike", "bicycle", "cycling", "rower", "rad", "velo", "mtb", "roadbike",
            ],
            Activity::Run => &["run", "running", "jog", "jogging", "bieganie"],
            Activity::Swim => &["swim", "swimming", "pool", "open water", "basen", "pływanie"],
            Activity::Walk => &["walk", "walking", "spacer", "walking activity"],
            Activity::Hike => &["hike", "hiking", "trek", "trekking", "mountain", "góry"],
            Activity::Workout => &["workout", "training", "gym", "fitness", "strength", "hiit"],
        }
    }

    /// True if any of this activity's keywords occurs in `text`.
    ///
    /// `text` must already be lowercased by the caller.
    pub fn matches(self, text: &str) -> bool {
        self.keywords().iter().any(|k| text.contains(k))
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

static LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    Activity::ALL.iter().map(|a| (a.tag(), a.label())).collect()
});

/// Normalize an internal tag to its canonical display label.
///
/// Case-folds the input and looks up the capitalized label; any tag
/// outside the six known keys, and an absent tag, map to [`OTHER_LABEL`].
/// Pure, total function.
///
/// # Example
///
/// ```rust
/// use activity_classifier::normalize_activity;
///
/// assert_eq!(normalize_activity(Some("RIDE")), "Ride");
/// assert_eq!(normalize_activity(Some("kayaking")), "Other");
/// assert_eq!(normalize_activity(None), "Other");
/// ```
pub fn normalize_activity(tag: Option<&str>) -> &'static str {
    match tag {
        Some(tag) => LABELS
            .get(tag.to_lowercase().as_str())
            .copied()
            .unwrap_or(OTHER_LABEL),
        None => OTHER_LABEL,
    }
}
