//! Read-only track document tree.
//!
//! A [`TrackDocument`] is the parsed tree form of a GPS-exchange (GPX) file:
//! labeled nodes with a tag name, text content, attributes and children.
//! The classifier only ever reads it; the bytes are loaded by the caller.
//!
//! Exporters disagree wildly on namespaces (Garmin, Strava, Locus, Polar
//! and Suunto all ship their own extension schemas), so every tag lookup in
//! this crate matches the *local* tag name and ignores the namespace prefix.
//! The two predicates at the bottom of this module are the single place
//! that rule lives.

use roxmltree::{Descendants, Document, Node};

use crate::error::{ClassifyError, Result};

/// Parsed tree form of a GPS-exchange track file.
///
/// Borrows the input text for its lifetime, like the underlying XML tree.
///
/// # Example
///
/// ```rust
/// use activity_classifier::TrackDocument;
///
/// let doc = TrackDocument::parse("<gpx><trk></trk></gpx>").unwrap();
/// assert!(TrackDocument::parse("not a document").is_err());
/// ```
#[derive(Debug)]
pub struct TrackDocument<'input> {
    doc: Document<'input>,
}

impl<'input> TrackDocument<'input> {
    /// Parse GPX text into a track document.
    ///
    /// Returns [`ClassifyError::MalformedTrackDocument`] if the text is not
    /// well-formed XML. Structural well-formedness is all that is checked
    /// here; missing or garbled track points are handled downstream by
    /// silently skipping them.
    pub fn parse(text: &'input str) -> Result<Self> {
        let doc = Document::parse(text).map_err(|e| ClassifyError::MalformedTrackDocument {
            message: e.to_string(),
        })?;
        Ok(Self { doc })
    }

    /// Iterate over every node in the document, in document order.
    pub(crate) fn descendants<'a>(&'a self) -> Descendants<'a, 'input> {
        self.doc.root().descendants()
    }
}

/// Lowercased local tag name of an element, namespace prefix ignored.
pub(crate) fn local_name(node: &Node) -> String {
    node.tag_name().name().to_ascii_lowercase()
}

/// True if the element's local tag name equals `name`, ignoring namespace
/// and ASCII case.
pub(crate) fn has_local_name(node: &Node, name: &str) -> bool {
    node.tag_name().name().eq_ignore_ascii_case(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_malformed_text() {
        let err = TrackDocument::parse("<gpx><trk></gpx>").unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::MalformedTrackDocument { .. }
        ));
    }

    #[test]
    fn test_local_name_ignores_namespace() {
        let text = r#"<gpx xmlns:gpxtpx="urn:example"><gpxtpx:TrackPointExtension/></gpx>"#;
        let doc = TrackDocument::parse(text).unwrap();

        let found = doc
            .descendants()
            .filter(|n| n.is_element())
            .any(|n| local_name(&n) == "trackpointextension");
        assert!(found);
    }

    #[test]
    fn test_has_local_name_case_insensitive() {
        let doc = TrackDocument::parse("<gpx><Time>now</Time></gpx>").unwrap();
        let found = doc
            .descendants()
            .filter(|n| n.is_element())
            .any(|n| has_local_name(&n, "time"));
        assert!(found);
    }
}
