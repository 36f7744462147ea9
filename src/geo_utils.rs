//! # Geographic Utilities
//!
//! Core geographic computation for GPS track analysis.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_distance`] | Great-circle distance between two coordinates |
//! | [`track_distance`] | Total length of a track in meters |
//!
//! ## Algorithm Notes
//!
//! The haversine formula computes the great-circle distance between two
//! points on a sphere with mean Earth radius 6,371 km. It is numerically
//! stable for both coincident points (returns exactly 0) and antipodal
//! points, and accurate to within 0.3% for GPS-scale distances.
//!
//! All functions expect WGS84 coordinates (latitude/longitude in degrees).

use crate::TrackPoint;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the great-circle distance between two coordinates using the
/// haversine formula.
///
/// Returns the distance in meters along the Earth's surface.
///
/// # Example
///
/// ```rust
/// use activity_classifier::geo_utils::haversine_distance;
///
/// let london = (51.5074, -0.1278);
/// let paris = (48.8566, 2.3522);
///
/// let distance = haversine_distance(london.0, london.1, paris.0, paris.1);
/// assert!((distance - 343_560.0).abs() < 1_500.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Calculate the total length of a track in meters.
///
/// Sums the haversine distance between consecutive points. Empty or
/// single-point tracks return 0.0.
pub fn track_distance(points: &[TrackPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| {
            haversine_distance(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum()
}
