//! Track point extraction.
//!
//! Pulls the ordered `(latitude, longitude, timestamp)` sequence out of a
//! track document. A sample missing any of the three fields, or carrying a
//! value that does not parse, is dropped without comment; real-world GPX
//! exports routinely contain a handful of such points and they are not
//! worth failing a whole classification over.

use chrono::{DateTime, FixedOffset};
use log::debug;
use roxmltree::Node;

use crate::document::{self, TrackDocument};
use crate::TrackPoint;

/// Extract the ordered track point sequence from a document.
///
/// Finds every `trkpt` node (any namespace), reading latitude/longitude
/// from attributes and the timestamp from the child `time` node. Points
/// with missing, non-numeric or out-of-range fields are skipped, so the
/// result may be empty. Points keep document order and are never re-sorted
/// by time.
pub fn extract_points(doc: &TrackDocument) -> Vec<TrackPoint> {
    let mut points = Vec::new();
    let mut skipped = 0usize;

    for node in doc.descendants() {
        if !node.is_element() || !document::has_local_name(&node, "trkpt") {
            continue;
        }
        match parse_trkpt(&node) {
            Some(point) if point.is_valid() => points.push(point),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            "[Parser] extracted {} track points ({} malformed samples skipped)",
            points.len(),
            skipped
        );
    }
    points
}

fn parse_trkpt(node: &Node) -> Option<TrackPoint> {
    let lat: f64 = node.attribute("lat")?.trim().parse().ok()?;
    let lon: f64 = node.attribute("lon")?.trim().parse().ok()?;

    let time_node = node
        .children()
        .find(|c| c.is_element() && document::has_local_name(c, "time"))?;
    let time = parse_timestamp(time_node.text()?.trim())?;

    Some(TrackPoint::new(lat, lon, time))
}

/// Parse an ISO-8601 instant, treating a trailing `Z` as UTC.
///
/// GPX writes UTC timestamps with a literal `Z` suffix; it is rewritten to
/// an explicit `+00:00` offset before parsing.
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = match raw.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => raw.to_string(),
    };
    DateTime::parse_from_rfc3339(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(text: &str) -> Vec<TrackPoint> {
        let doc = TrackDocument::parse(text).unwrap();
        extract_points(&doc)
    }

    #[test]
    fn test_extracts_points_in_document_order() {
        let points = parse_all(
            r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"><trk><trkseg>
                <trkpt lat="50.0" lon="14.0"><time>2024-06-01T10:00:10Z</time></trkpt>
                <trkpt lat="50.1" lon="14.1"><time>2024-06-01T10:00:00Z</time></trkpt>
            </trkseg></trk></gpx>"#,
        );
        assert_eq!(points.len(), 2);
        // Document order wins over timestamp order
        assert_eq!(points[0].latitude, 50.0);
        assert_eq!(points[1].latitude, 50.1);
    }

    #[test]
    fn test_z_suffix_is_utc() {
        let points = parse_all(
            r#"<gpx><trk><trkseg>
                <trkpt lat="50.0" lon="14.0"><time>2024-06-01T10:00:00Z</time></trkpt>
                <trkpt lat="50.0" lon="14.0"><time>2024-06-01T12:00:00+02:00</time></trkpt>
            </trkseg></trk></gpx>"#,
        );
        assert_eq!(points.len(), 2);
        // Same instant once the offsets are applied
        assert_eq!(points[0].time, points[1].time);
    }

    #[test]
    fn test_malformed_samples_are_skipped() {
        let points = parse_all(
            r#"<gpx><trk><trkseg>
                <trkpt lat="50.0" lon="14.0"><time>2024-06-01T10:00:00Z</time></trkpt>
                <trkpt lon="14.0"><time>2024-06-01T10:00:05Z</time></trkpt>
                <trkpt lat="abc" lon="14.0"><time>2024-06-01T10:00:10Z</time></trkpt>
                <trkpt lat="50.0" lon="14.0"><time>not-a-time</time></trkpt>
                <trkpt lat="50.0" lon="14.0"/>
                <trkpt lat="50.1" lon="14.1"><time>2024-06-01T10:00:20Z</time></trkpt>
            </trkseg></trk></gpx>"#,
        );
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_out_of_range_coordinates_are_skipped() {
        let points = parse_all(
            r#"<gpx><trk><trkseg>
                <trkpt lat="95.0" lon="14.0"><time>2024-06-01T10:00:00Z</time></trkpt>
                <trkpt lat="50.0" lon="-200.0"><time>2024-06-01T10:00:05Z</time></trkpt>
            </trkseg></trk></gpx>"#,
        );
        assert!(points.is_empty());
    }

    #[test]
    fn test_empty_document_yields_empty_track() {
        assert!(parse_all("<gpx><trk/></gpx>").is_empty());
    }

    #[test]
    fn test_timestamp_normalization() {
        let utc = parse_timestamp("2024-06-01T10:00:00Z").unwrap();
        let explicit = parse_timestamp("2024-06-01T10:00:00+00:00").unwrap();
        assert_eq!(utc, explicit);
        assert!(parse_timestamp("yesterday at noon").is_none());
    }
}
