//! # Activity Classifier
//!
//! Offline activity-type classification for GPS track files.
//!
//! Given the parsed tree of a GPX file, this library decides which sport
//! it records (Ride, Run, Swim, Walk, Hike, Workout or Other) using only
//! evidence intrinsic to the file. Three independent detectors each cast a
//! vote:
//!
//! - **Metadata**: exporter-assigned activity fields (`type`, `sport`, …)
//! - **Keywords**: free-text annotations (`name`, `desc`, `cmt`, …)
//! - **Kinematics**: average speed, distance and duration derived from the
//!   trajectory itself
//!
//! A majority of two settles the label; otherwise the first detector that
//! found anything wins, and a file nobody can read is "Other". No network,
//! no file I/O, no shared state: classification is a pure function of the
//! document.
//!
//! ## Quick Start
//!
//! ```rust
//! use activity_classifier::{classify, TrackDocument};
//!
//! let gpx = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1">
//!     <trk><name>Morning jog</name></trk>
//! </gpx>"#;
//!
//! let doc = TrackDocument::parse(gpx).unwrap();
//! assert_eq!(classify(&doc), "Run");
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{ClassifyError, Result};

// Geographic utilities (haversine distance, track length)
pub mod geo_utils;
pub use geo_utils::{haversine_distance, track_distance};

// Read-only track document tree
pub mod document;
pub use document::TrackDocument;

// Track point extraction
pub mod parser;
pub use parser::extract_points;

// Activity vocabulary and label normalization
pub mod activity;
pub use activity::{normalize_activity, Activity, OTHER_LABEL};

// The three independent signal detectors
pub mod detectors;
pub use detectors::{
    detect_from_track, detect_keywords, detect_kinematics, detect_metadata, KinematicSummary,
};

// Decision combiner and classification entry point
pub mod classifier;
pub use classifier::{classify, combine_verdicts};

// Container-format detection
pub mod format;
pub use format::FileFormat;

// ============================================================================
// Core Types
// ============================================================================

/// A timestamped GPS sample from a track.
///
/// # Example
/// ```
/// use activity_classifier::TrackPoint;
/// use chrono::DateTime;
///
/// let time = DateTime::parse_from_rfc3339("2024-06-01T10:00:00+00:00").unwrap();
/// let point = TrackPoint::new(51.5074, -0.1278, time); // London
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Sample instant, with explicit UTC offset
    pub time: DateTime<FixedOffset>,
}

impl TrackPoint {
    /// Create a new track point.
    pub fn new(latitude: f64, longitude: f64, time: DateTime<FixedOffset>) -> Self {
        Self {
            latitude,
            longitude,
            time,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

// ============================================================================
// Tests
// ============================================================================
