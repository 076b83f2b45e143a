//! fparams: layout checks for Go function signatures.
//!
//! Enforces a binary formatting rule on every function declaration: the
//! parameter list and the return-value list must each be rendered either
//! fully inline on the declaration's own line, or with every individual
//! entry on its own line. Mixed layouts are reported with a mechanical
//! rewrite into the fully-expanded form.
//!
//! ```text
//! func bad(a int,          func good(
//!     b string) {              a int,
//! }                            b string,
//!                          ) {
//!                          }
//! ```
//!
//! # Architecture
//!
//! ```text
//! source text ──► scan (tokens) ──► parse (FuncDecl views)
//!                                        │
//!                              analyzer: extract ─► validate ─► fix
//!                                        │
//!                                  diagnostics (+ suggested edits)
//! ```
//!
//! The analyzer is a pure, synchronous, single-pass walk; declarations are
//! processed independently and nothing is shared between them, so callers
//! are free to fan files out across threads.
//!
//! # Example
//!
//! ```
//! use fparams::{analyze_source, AnalyzerConfig};
//!
//! let src = "func f(a int,\n\tb string) {\n}\n";
//! let report = analyze_source("main.go", src, &AnalyzerConfig::default());
//! assert_eq!(report.diagnostics.len(), 1);
//! assert!(report.diagnostics[0].message.contains("\"f\""));
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod parse;
pub mod scan;
pub mod source;

pub use analyzer::{analyze_file, analyze_source, AnalyzerConfig, FieldListView};
pub use diagnostics::{apply_fixes, Diagnostic, FileReport, Severity, SuggestedFix, TextEdit};
pub use error::{FparamsError, FparamsResult};
pub use source::{LineIndex, Position, SourceFile, Span};
