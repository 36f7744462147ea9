//! The three independent activity signal detectors.
//!
//! Each detector reads the same parsed document and produces one verdict:
//! `Some(Activity)` or `None` for "no signal". They are deliberately
//! imperfect on their own and are only trusted in combination (see
//! [`crate::classifier`]):
//!
//! 1. [`detect_metadata`]: exporter-assigned structural fields, the most
//!    authoritative evidence when present.
//! 2. [`detect_keywords`]: free-text annotations written by users.
//! 3. [`detect_kinematics`]: speed/distance/duration inferred from the
//!    trajectory itself.

mod keywords;
mod kinematics;
mod metadata;

pub use keywords::detect_keywords;
pub use kinematics::{
    detect_from_track, detect_kinematics, summarize_track, KinematicSummary, MIN_TRACKPOINTS,
};
pub use metadata::detect_metadata;
