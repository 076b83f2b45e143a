//! Error types for the fparams library.

use thiserror::Error;

use crate::source::Span;

/// Result type for fparams operations.
pub type FparamsResult<T> = Result<T, FparamsError>;

/// Errors the library can produce.
///
/// Layout analysis itself is total over well-formed input; errors only
/// arise at the edges (reading files, applying edits).
#[derive(Debug, Error)]
pub enum FparamsError {
    /// Reading a source file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Two suggested fixes cover overlapping spans.
    #[error("overlapping fixes at {first:?} and {second:?}")]
    OverlappingFixes {
        /// Span of the earlier edit.
        first: Span,
        /// Span of the later, overlapping edit.
        second: Span,
    },
}

impl FparamsError {
    /// Wrap an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
