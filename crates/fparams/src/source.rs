//! Source text model: byte spans and offset-to-line/column resolution.
//!
//! Positions flow through the crate as byte offsets into the original
//! source. The [`LineIndex`] is the lookup table that turns an offset into
//! a 1-based line/column pair, playing the role Go's `token.FileSet` plays
//! for the original analyzer.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start offset, inclusive.
    pub start: u32,
    /// End offset, exclusive.
    pub end: u32,
}

impl Span {
    /// Create a span from usize offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A resolved 1-based source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, in bytes).
    pub column: u32,
}

/// Sorted table of line-start offsets for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the index for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line number containing `offset`.
    #[must_use]
    pub fn line(&self, offset: u32) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(i) => i as u32 + 1,
            Err(i) => i as u32,
        }
    }

    /// Resolve `offset` to a 1-based line/column pair.
    #[must_use]
    pub fn position(&self, offset: u32) -> Position {
        let line = self.line(offset);
        let line_start = self.line_starts[line as usize - 1];
        Position {
            line,
            column: offset - line_start + 1,
        }
    }

    /// Total number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// One source file under analysis: path, text and its line index.
#[derive(Debug)]
pub struct SourceFile {
    /// Display path for diagnostics.
    pub path: String,
    /// Full source text.
    pub text: String,
    index: LineIndex,
}

impl SourceFile {
    /// Wrap a source text for analysis.
    #[must_use]
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let index = LineIndex::new(&text);
        Self {
            path: path.into(),
            text,
            index,
        }
    }

    /// The line index for this file.
    #[must_use]
    pub fn index(&self) -> &LineIndex {
        &self.index
    }

    /// Slice the source text by a span.
    #[must_use]
    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start as usize..span.end as usize]
    }
}
