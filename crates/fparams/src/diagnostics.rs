//! Diagnostic records and machine-applicable fixes.
//!
//! A [`Diagnostic`] names the rule, carries the human-readable message and
//! the primary reported span, and packages up to two [`SuggestedFix`]es —
//! one per offending field list — each with the exact byte span its
//! replacement text covers.

use serde::{Deserialize, Serialize};

use crate::error::FparamsError;
use crate::source::{Position, Span};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error: must be fixed.
    Error,
    /// Warning: should be reviewed.
    Warning,
    /// Info: informational note.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single textual replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Byte span the replacement covers.
    pub span: Span,
    /// Replacement text.
    pub new_text: String,
}

/// A suggested fix: one edit with an explanatory message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedFix {
    /// What applying the fix achieves.
    pub message: String,
    /// The edit to apply.
    pub edit: TextEdit,
}

/// One reported layout violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Rule identifier (e.g. "FPARAMS-001").
    pub rule: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
    /// Primary reported span (union of the offending lists' bounds).
    pub span: Span,
    /// Resolved location of the span start (1-indexed).
    pub position: Position,
    /// Suggested fixes, one per offending list.
    pub fixes: Vec<SuggestedFix>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}]: {} ({}:{})",
            self.severity, self.rule, self.message, self.position.line, self.position.column
        )
    }
}

/// Analysis outcome for one source file.
#[derive(Debug, Default, Serialize)]
pub struct FileReport {
    /// Display path of the file.
    pub path: String,
    /// All diagnostics found, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of function declarations examined.
    pub functions_checked: usize,
    /// Number of source lines.
    pub lines: usize,
}

impl FileReport {
    /// Whether any diagnostic was produced.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Count diagnostics at a given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Apply every suggested fix of `diagnostics` to `source`.
///
/// Edits are applied back-to-front so earlier spans stay valid. Two edits
/// covering overlapping spans cannot be applied coherently and are rejected.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> Result<String, FparamsError> {
    let mut edits: Vec<&TextEdit> = diagnostics
        .iter()
        .flat_map(|d| d.fixes.iter().map(|f| &f.edit))
        .collect();
    edits.sort_by_key(|e| e.span.start);
    for pair in edits.windows(2) {
        if pair[1].span.start < pair[0].span.end {
            return Err(FparamsError::OverlappingFixes {
                first: pair[0].span,
                second: pair[1].span,
            });
        }
    }

    let mut out = source.to_string();
    for edit in edits.iter().rev() {
        out.replace_range(
            edit.span.start as usize..edit.span.end as usize,
            &edit.new_text,
        );
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn fix(start: usize, end: usize, text: &str) -> SuggestedFix {
        SuggestedFix {
            message: "reflow".to_string(),
            edit: TextEdit {
                span: Span::new(start, end),
                new_text: text.to_string(),
            },
        }
    }

    fn diag(fixes: Vec<SuggestedFix>) -> Diagnostic {
        Diagnostic {
            rule: "FPARAMS-001",
            message: "test".to_string(),
            severity: Severity::Warning,
            span: Span::new(0, 0),
            position: Position { line: 1, column: 1 },
            fixes,
        }
    }

    #[test]
    fn test_apply_fixes_back_to_front() {
        let source = "abc def ghi";
        let d = diag(vec![fix(0, 3, "X"), fix(8, 11, "YZ")]);
        assert_eq!(apply_fixes(source, &[d]).unwrap(), "X def YZ");
    }

    #[test]
    fn test_apply_fixes_rejects_overlap() {
        let d = diag(vec![fix(0, 5, "X"), fix(3, 8, "Y")]);
        assert!(matches!(
            apply_fixes("abcdefghij", &[d]),
            Err(FparamsError::OverlappingFixes { .. })
        ));
    }

    #[test]
    fn test_display_shape() {
        let d = diag(vec![]);
        assert_eq!(d.to_string(), "warning[FPARAMS-001]: test (1:1)");
    }

    #[test]
    fn test_report_counts() {
        let report = FileReport {
            path: "x.go".to_string(),
            diagnostics: vec![diag(vec![])],
            functions_checked: 3,
            lines: 10,
        };
        assert!(report.has_diagnostics());
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.count(Severity::Error), 0);
    }

    #[test]
    fn test_diagnostic_serializes() {
        let d = diag(vec![fix(1, 2, "x")]);
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"FPARAMS-001\""));
        assert!(json.contains("\"warning\""));
    }
}
