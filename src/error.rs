//! Error types for path resolution

use thiserror::Error;

/// Failure to walk a dotted path through a value tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Object has no entry for the segment
    #[error("no key '{segment}'")]
    MissingKey { segment: String },

    /// Array segment is not a non-negative integer
    #[error("'{segment}' is not an array index")]
    InvalidIndex { segment: String },

    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Segment applied to a string, number or other leaf
    #[error("cannot descend into a leaf value at '{segment}'")]
    NotAContainer { segment: String },
}

impl PathError {
    pub fn missing_key(segment: impl Into<String>) -> Self {
        Self::MissingKey {
            segment: segment.into(),
        }
    }

    pub fn invalid_index(segment: impl Into<String>) -> Self {
        Self::InvalidIndex {
            segment: segment.into(),
        }
    }

    pub fn not_a_container(segment: impl Into<String>) -> Self {
        Self::NotAContainer {
            segment: segment.into(),
        }
    }
}
