//! Decision combiner.
//!
//! Runs the three detectors against one document and resolves their
//! verdicts into a single canonical label: majority wins when at least two
//! detectors agree, otherwise the first detector that produced any verdict
//! wins, in the order metadata → keyword → kinematic (most authoritative
//! first). A document no detector can read is labeled "Other".

use log::{debug, info};

use crate::activity::{normalize_activity, Activity};
use crate::detectors::{detect_keywords, detect_kinematics, detect_metadata};
use crate::document::TrackDocument;

/// Resolve three detector verdicts into one, or `None` when all three are
/// silent.
///
/// Stateless combinator over the verdict triple, in detector order. With
/// three voters at most one value can reach two votes, so the majority is
/// unambiguous whenever it exists; a full three-way disagreement (and a
/// single lone verdict) takes the ordered fallback instead.
pub fn combine_verdicts(verdicts: [Option<Activity>; 3]) -> Option<Activity> {
    let votes: Vec<Activity> = verdicts.iter().flatten().copied().collect();

    if !votes.is_empty() {
        let mut leader: Option<(Activity, usize)> = None;
        for activity in Activity::ALL {
            let count = votes.iter().filter(|&&v| v == activity).count();
            if count > leader.map_or(0, |(_, c)| c) {
                leader = Some((activity, count));
            }
        }
        if let Some((winner, count)) = leader {
            if count >= 2 {
                info!("[Classifier] majority vote: {}", winner);
                return Some(winner);
            }
        }
    }

    // Single votes take the same path as three-way disagreements
    if let Some(&verdict) = verdicts.iter().flatten().next() {
        info!("[Classifier] no majority decision, falling back to {}", verdict);
        return Some(verdict);
    }

    info!("[Classifier] unable to determine activity");
    None
}

/// Classify the activity type of a track document.
///
/// Returns one of the seven canonical labels: `Ride`, `Run`, `Swim`,
/// `Walk`, `Hike`, `Workout` or `Other`. Purely functional over the
/// document; safe to call concurrently on distinct documents.
///
/// # Example
///
/// ```rust
/// use activity_classifier::{classify, TrackDocument};
///
/// let doc = TrackDocument::parse("<gpx><trk><type>cycling</type></trk></gpx>").unwrap();
/// assert_eq!(classify(&doc), "Ride");
/// ```
pub fn classify(doc: &TrackDocument) -> &'static str {
    let verdicts = [
        detect_metadata(doc),
        detect_keywords(doc),
        detect_kinematics(doc),
    ];
    debug!(
        "[Classifier] metadata={:?}, keyword={:?}, kinematic={:?}",
        verdicts[0], verdicts[1], verdicts[2]
    );

    normalize_activity(combine_verdicts(verdicts).map(Activity::tag))
}
