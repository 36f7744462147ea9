//! Kinematic detector.
//!
//! Derives total distance, elapsed time and average speed from the parsed
//! trajectory and maps them onto speed bands calibrated for human-powered
//! locomotion. A depth channel anywhere in the document short-circuits the
//! whole analysis: only pool and dive exports carry one, so it is a
//! near-certain swim signal regardless of what the trajectory looks like.

use chrono::{DateTime, FixedOffset};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::document::{local_name, TrackDocument};
use crate::geo_utils::track_distance;
use crate::parser::extract_points;
use crate::TrackPoint;

/// Minimum usable samples for a stable speed estimate.
pub const MIN_TRACKPOINTS: usize = 10;

// Average-speed band edges in km/h.
const RIDE_MIN_KMH: f64 = 12.0;
const RUN_MIN_KMH: f64 = 7.0;
const WALK_MIN_KMH: f64 = 4.0;

// Low-speed disambiguation: long and slow is a hike, short and slow
// (in-place training) is a workout.
const HIKE_MIN_DISTANCE_M: f64 = 5_000.0;
const WORKOUT_MAX_TIME_S: f64 = 1_800.0;
const WORKOUT_MAX_DISTANCE_M: f64 = 2_000.0;

/// Aggregate kinematics of a track, for diagnostics and banding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicSummary {
    /// Sum of consecutive-point great-circle distances in meters
    pub total_distance: f64,
    /// Elapsed time between first and last sample in seconds
    pub total_time: f64,
    /// Average speed in km/h
    pub avg_speed_kmh: f64,
}

/// Summarize a track's distance, elapsed time and average speed.
///
/// Returns `None` for an empty track and for non-positive elapsed time
/// (non-monotonic or degenerate timestamps make speed undefined).
pub fn summarize_track(points: &[TrackPoint]) -> Option<KinematicSummary> {
    let first = points.first()?;
    let last = points.last()?;

    let total_time = elapsed_seconds(first.time, last.time);
    if total_time <= 0.0 {
        return None;
    }

    let total_distance = track_distance(points);
    let avg_speed_kmh = (total_distance / 1000.0) / (total_time / 3600.0);

    Some(KinematicSummary {
        total_distance,
        total_time,
        avg_speed_kmh,
    })
}

fn elapsed_seconds(first: DateTime<FixedOffset>, last: DateTime<FixedOffset>) -> f64 {
    (last - first).num_milliseconds() as f64 / 1000.0
}

/// Infer the activity type from trajectory geometry and timing.
///
/// Checks the depth override against the whole document first, then parses
/// the track and hands it to [`detect_from_track`].
pub fn detect_kinematics(doc: &TrackDocument) -> Option<Activity> {
    if doc
        .descendants()
        .any(|n| n.is_element() && local_name(&n).contains("depth"))
    {
        debug!("[Kinematic] detected swim from depth data");
        return Some(Activity::Swim);
    }

    detect_from_track(&extract_points(doc))
}

/// Apply the speed/distance/duration thresholds to a parsed track.
///
/// Requires at least [`MIN_TRACKPOINTS`] samples and a positive elapsed
/// time, otherwise returns `None`. Bands are checked in order, first match
/// wins:
///
/// - above 12 km/h → ride
/// - 7–12 km/h → run
/// - 4–7 km/h → walk
/// - at most 4 km/h over more than 5 km → hike
/// - under 30 min and under 2 km, when nothing above matched → workout
pub fn detect_from_track(points: &[TrackPoint]) -> Option<Activity> {
    if points.len() < MIN_TRACKPOINTS {
        return None;
    }

    let summary = summarize_track(points)?;
    debug!(
        "[Kinematic] avg_speed={:.2} km/h, dist={:.2} km, time={:.0} s",
        summary.avg_speed_kmh,
        summary.total_distance / 1000.0,
        summary.total_time
    );

    if summary.avg_speed_kmh > RIDE_MIN_KMH {
        Some(Activity::Ride)
    } else if summary.avg_speed_kmh > RUN_MIN_KMH {
        Some(Activity::Run)
    } else if summary.avg_speed_kmh > WALK_MIN_KMH {
        Some(Activity::Walk)
    } else if summary.total_distance > HIKE_MIN_DISTANCE_M {
        Some(Activity::Hike)
    } else if summary.total_time < WORKOUT_MAX_TIME_S
        && summary.total_distance < WORKOUT_MAX_DISTANCE_M
    {
        // Stationary or in-place training the speed bands would otherwise
        // misread as a very slow walk
        Some(Activity::Workout)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    // One degree of latitude on the 6371 km sphere
    const METERS_PER_DEGREE: f64 = 111_194.9;

    /// Straight meridian track: `count` points, fixed spacing and cadence.
    fn synthetic_track(count: usize, meters_per_step: f64, secs_per_step: i64) -> Vec<TrackPoint> {
        let start = DateTime::parse_from_rfc3339("2024-06-01T10:00:00+00:00").unwrap();
        (0..count)
            .map(|i| {
                TrackPoint::new(
                    50.0 + i as f64 * meters_per_step / METERS_PER_DEGREE,
                    14.0,
                    start + Duration::seconds(i as i64 * secs_per_step),
                )
            })
            .collect()
    }

    #[test]
    fn test_ride_band() {
        // 100 m / 10 s = 36 km/h
        let track = synthetic_track(20, 100.0, 10);
        assert_eq!(detect_from_track(&track), Some(Activity::Ride));
    }

    #[test]
    fn test_run_band() {
        // 25 m / 10 s = 9 km/h
        let track = synthetic_track(20, 25.0, 10);
        assert_eq!(detect_from_track(&track), Some(Activity::Run));
    }

    #[test]
    fn test_walk_band() {
        // 15 m / 10 s = 5.4 km/h
        let track = synthetic_track(20, 15.0, 10);
        assert_eq!(detect_from_track(&track), Some(Activity::Walk));
    }

    #[test]
    fn test_hike_needs_distance() {
        // 1 m/s = 3.6 km/h over ~5.9 km
        let track = synthetic_track(100, 60.0, 60);
        assert_eq!(detect_from_track(&track), Some(Activity::Hike));
    }

    #[test]
    fn test_workout_short_and_stationary() {
        // ~45 m in 4.5 minutes
        let track = synthetic_track(10, 5.0, 30);
        assert_eq!(detect_from_track(&track), Some(Activity::Workout));
    }

    #[test]
    fn test_slow_medium_track_has_no_signal() {
        // 1.8 km/h over 4.95 km and 2.75 h: too slow for walk, too short
        // for hike, too long for workout
        let track = synthetic_track(100, 50.0, 100);
        assert_eq!(detect_from_track(&track), None);
    }

    #[test]
    fn test_too_few_points() {
        let track = synthetic_track(9, 100.0, 10);
        assert_eq!(detect_from_track(&track), None);
    }

    #[test]
    fn test_non_positive_elapsed_time() {
        let mut track = synthetic_track(20, 100.0, 10);
        track.reverse();
        assert_eq!(detect_from_track(&track), None);

        let frozen = synthetic_track(20, 100.0, 0);
        assert_eq!(detect_from_track(&frozen), None);
    }

    #[test]
    fn test_summary_values() {
        let track = synthetic_track(11, 100.0, 10);
        let summary = summarize_track(&track).unwrap();
        assert!((summary.total_distance - 1000.0).abs() < 1.0);
        assert!((summary.total_time - 100.0).abs() < 1e-9);
        assert!((summary.avg_speed_kmh - 36.0).abs() < 0.1);
    }

    #[test]
    fn test_depth_node_short_circuits() {
        let doc = TrackDocument::parse(
            r#"<gpx xmlns:x="urn:example"><trk><trkseg>
                <trkpt lat="50.0" lon="14.0">
                    <time>2024-06-01T10:00:00Z</time>
                    <extensions><x:WaterDepth>1.8</x:WaterDepth></extensions>
                </trkpt>
            </trkseg></trk></gpx>"#,
        )
        .unwrap();
        assert_eq!(detect_kinematics(&doc), Some(Activity::Swim));
    }

    #[test]
    fn test_document_without_depth_uses_track() {
        let doc = TrackDocument::parse("<gpx><trk/></gpx>").unwrap();
        assert_eq!(detect_kinematics(&doc), None);
    }
}
