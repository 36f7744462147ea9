//! Unified error handling for the activity classifier.
//!
//! The classification core itself is total: malformed samples are skipped
//! and a track with no usable evidence still yields the "Other" label.
//! Errors only arise at the boundary, when the input text is not a
//! well-formed track document or a file name maps to no known container.

use std::fmt;

/// Unified error type for classifier operations.
#[derive(Debug, Clone)]
pub enum ClassifyError {
    /// Input text is not a well-formed track document
    MalformedTrackDocument { message: String },
    /// File name does not map to a known container format
    UnsupportedFormat { file_name: String },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::MalformedTrackDocument { message } => {
                write!(f, "Malformed track document: {}", message)
            }
            ClassifyError::UnsupportedFormat { file_name } => {
                write!(f, "Unsupported container format: '{}'", file_name)
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;
