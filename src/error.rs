//! Error types for keypath operations.

use crate::{Path, Seg};
use thiserror::Error;

/// Result type alias for keypath operations.
pub type KeypathResult<T> = Result<T, KeypathError>;

/// Errors that can occur during keypath operations.
///
/// These are contract violations: reads of absent locations are not errors
/// (they yield null), but a malformed path or a segment aimed at the wrong
/// container kind fails the whole call.
#[derive(Debug, Error)]
pub enum KeypathError {
    /// A path operation was given an empty path.
    #[error("path must contain at least one segment")]
    EmptyPath,

    /// A path exceeds the navigation recursion limit.
    #[error("path depth {depth} exceeds maximum {max}")]
    PathTooDeep {
        /// Number of segments in the offending path.
        depth: usize,
        /// The maximum supported depth.
        max: usize,
    },

    /// A path segment cannot address the container it was aimed at.
    #[error("segment {segment} cannot address {found} at {path}")]
    SegmentMismatch {
        /// Path up to and including the offending segment.
        path: Path,
        /// The offending segment.
        segment: Seg,
        /// The kind of value actually found.
        found: &'static str,
    },

    /// `into` was given a collect target that is neither a sequence nor a
    /// mapping.
    #[error("into requires a sequence or mapping target, found {found}")]
    UnsupportedCollectable {
        /// The kind of value actually found.
        found: &'static str,
    },

    /// Pair-list coercion hit an element that is not a `[key, value]` pair.
    #[error("element {index} is not a [key, value] pair: found {found}")]
    MalformedPair {
        /// Position of the offending element.
        index: usize,
        /// The kind of value actually found.
        found: &'static str,
    },

    /// Invalid operation error.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong.
        message: String,
    },
}

impl KeypathError {
    /// Create a path too deep error.
    #[inline]
    pub fn path_too_deep(depth: usize, max: usize) -> Self {
        KeypathError::PathTooDeep { depth, max }
    }

    /// Create a segment mismatch error.
    #[inline]
    pub fn segment_mismatch(path: Path, segment: Seg, found: &'static str) -> Self {
        KeypathError::SegmentMismatch {
            path,
            segment,
            found,
        }
    }

    /// Create an unsupported collectable error.
    #[inline]
    pub fn unsupported_collectable(found: &'static str) -> Self {
        KeypathError::UnsupportedCollectable { found }
    }

    /// Create a malformed pair error.
    #[inline]
    pub fn malformed_pair(index: usize, found: &'static str) -> Self {
        KeypathError::MalformedPair { index, found }
    }

    /// Create an invalid operation error.
    #[inline]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        KeypathError::InvalidOperation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_error_display() {
        let err = KeypathError::segment_mismatch(path!("users", 0), Seg::index(0), "object");
        let msg = err.to_string();
        assert!(msg.contains("[0]"));
        assert!(msg.contains("object"));
        assert!(msg.contains("$.users[0]"));
    }

    #[test]
    fn test_empty_path_display() {
        let err = KeypathError::EmptyPath;
        assert!(err.to_string().contains("at least one segment"));
    }
}
