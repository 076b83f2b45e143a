//! Function-signature layout analyzer.
//!
//! Checks that the parameter list and the return-value list of every Go
//! function declaration are either fully inline on the declaration's own
//! line, or fully expanded with every entry on its own line. Mixed layouts
//! get a diagnostic with a mechanical rewrite into the expanded form.
//!
//! ## Rules
//!
//! | Rule ID | Description |
//! |-------------|--------------------------------------------------|
//! | FPARAMS-001 | Parameters not each on their own line            |
//! | FPARAMS-002 | Return values not each on their own line         |
//! | FPARAMS-003 | Both lists violate the layout                    |
//!
//! ## Pipeline
//!
//! Extractor → Validator → Synthesizer → Reporter, one declaration at a
//! time, with no state shared across declarations:
//! - [`extract`](extract::extract) builds per-list [`FieldListView`]s and
//!   applies the single-line exemption;
//! - [`validate`](validate::validate) is the line-based layout predicate;
//! - [`synthesize`](fix::synthesize) renders the one-entry-per-line
//!   replacement for a failing list;
//! - the reporter folds the two verdicts into at most one diagnostic with
//!   up to two suggested fixes.

pub mod extract;
pub mod fix;
mod report;
pub mod validate;

use std::fs;
use std::path::Path;

use crate::diagnostics::FileReport;
use crate::error::FparamsError;
use crate::parse::parse_file;
use crate::source::SourceFile;

pub use extract::FieldListView;
pub use report::{RULE_BOTH, RULE_PARAMS, RULE_RETURNS};

/// Which checks run. Plain read-only value, passed explicitly; there is no
/// global mutable configuration.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Check parameter lists.
    pub check_params: bool,
    /// Check return-value lists.
    pub check_returns: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            check_params: true,
            check_returns: true,
        }
    }
}

/// Analyze one source text.
///
/// Pure and single-pass: each declaration is fully resolved before the next
/// is considered, and re-running on the same input yields the same report.
#[must_use]
pub fn analyze_source(path: &str, source: &str, config: &AnalyzerConfig) -> FileReport {
    let file = SourceFile::new(path, source);
    let index = file.index();
    let decls = parse_file(&file.text);

    let mut diagnostics = Vec::new();
    for decl in &decls {
        let (params, returns) = extract::extract(decl, index, config);
        let params_invalid = params.filter(|v| !validate::validate(v, index));
        let returns_invalid = returns.filter(|v| !validate::validate(v, index));
        if let Some(diag) = report::report(
            &decl.name.name,
            params_invalid.as_ref(),
            returns_invalid.as_ref(),
            index,
        ) {
            tracing::debug!(
                path,
                function = %decl.name.name,
                rule = diag.rule,
                "signature layout violation"
            );
            diagnostics.push(diag);
        }
    }

    let functions_checked = decls.len();
    let lines = index.line_count();
    FileReport {
        path: file.path,
        diagnostics,
        functions_checked,
        lines,
    }
}

/// Read and analyze one file from disk.
pub fn analyze_file(path: &Path, config: &AnalyzerConfig) -> Result<FileReport, FparamsError> {
    let display = path.display().to_string();
    let source =
        fs::read_to_string(path).map_err(|source| FparamsError::io(display.clone(), source))?;
    Ok(analyze_source(&display, &source, config))
}
