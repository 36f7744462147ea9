//! Container-format detection for track files.
//!
//! Upload APIs take the container kind (`data_type`) alongside the
//! activity label, so the file name's extension is mapped to a closed
//! enum here, including the gzip double extensions recorders commonly
//! produce. Only plain GPX content can be fed to the classifier; binary
//! and compressed containers are detected but never parsed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, Result};

/// Activity label assigned to containers the classifier cannot inspect.
pub const UNCLASSIFIED_LABEL: &str = "Workout";

/// Track file container format, derived from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Gpx,
    Tcx,
    Fit,
    GpxGz,
    TcxGz,
    FitGz,
}

impl FileFormat {
    /// Detect the container format from a file name's extension.
    ///
    /// Gzip double extensions are checked before the plain ones so
    /// `ride.gpx.gz` resolves to [`FileFormat::GpxGz`]. Case-insensitive.
    /// An unknown extension is [`ClassifyError::UnsupportedFormat`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if name.ends_with(".gpx.gz") {
            Ok(FileFormat::GpxGz)
        } else if name.ends_with(".tcx.gz") {
            Ok(FileFormat::TcxGz)
        } else if name.ends_with(".fit.gz") {
            Ok(FileFormat::FitGz)
        } else if name.ends_with(".gpx") {
            Ok(FileFormat::Gpx)
        } else if name.ends_with(".tcx") {
            Ok(FileFormat::Tcx)
        } else if name.ends_with(".fit") {
            Ok(FileFormat::Fit)
        } else {
            Err(ClassifyError::UnsupportedFormat {
                file_name: path.display().to_string(),
            })
        }
    }

    /// Wire identifier of the container, as upload APIs expect it.
    pub fn data_type(self) -> &'static str {
        match self {
            FileFormat::Gpx => "gpx",
            FileFormat::Tcx => "tcx",
            FileFormat::Fit => "fit",
            FileFormat::GpxGz => "gpx.gz",
            FileFormat::TcxGz => "tcx.gz",
            FileFormat::FitGz => "fit.gz",
        }
    }

    /// True for containers whose content the classifier can read.
    ///
    /// Compressed GPX counts as unreadable; the caller would have to
    /// decompress it first and present the text directly.
    pub fn supports_classification(self) -> bool {
        self == FileFormat::Gpx
    }

    /// Label to assign when the container is uploaded without running the
    /// classifier.
    ///
    /// Plain GPX has no default: its label comes from [`crate::classify`].
    /// Every other container is never parsed and falls back to
    /// [`UNCLASSIFIED_LABEL`].
    pub fn default_label(self) -> Option<&'static str> {
        if self.supports_classification() {
            None
        } else {
            Some(UNCLASSIFIED_LABEL)
        }
    }
}
