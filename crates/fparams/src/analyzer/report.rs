//! Diagnostic assembly: verdicts in, at most one diagnostic out.

use crate::diagnostics::{Diagnostic, Severity, SuggestedFix, TextEdit};
use crate::source::{LineIndex, Span};

use super::extract::FieldListView;
use super::fix::synthesize;

/// Rule ID: parameters not each on their own line.
pub const RULE_PARAMS: &str = "FPARAMS-001";
/// Rule ID: return values not each on their own line.
pub const RULE_RETURNS: &str = "FPARAMS-002";
/// Rule ID: both lists violate the layout.
pub const RULE_BOTH: &str = "FPARAMS-003";

/// Build the diagnostic for one declaration from its invalid views.
///
/// `params`/`returns` carry only the views that failed validation. The
/// reported span is the union of the offending lists' bounds, and each
/// list contributes one suggested fix replacing its exact interior.
pub(crate) fn report(
    fn_name: &str,
    params: Option<&FieldListView<'_>>,
    returns: Option<&FieldListView<'_>>,
    index: &LineIndex,
) -> Option<Diagnostic> {
    let (rule, message) = match (params, returns) {
        (Some(_), Some(_)) => (
            RULE_BOTH,
            format!(
                "the parameters and return values of the function {fn_name:?} should start on a new line"
            ),
        ),
        (Some(_), None) => (
            RULE_PARAMS,
            format!("the parameters of the function {fn_name:?} should start on a new line"),
        ),
        (None, Some(_)) => (
            RULE_RETURNS,
            format!("the return values of the function {fn_name:?} should start on a new line"),
        ),
        (None, None) => return None,
    };

    let mut fixes = Vec::with_capacity(2);
    for view in [params, returns].into_iter().flatten() {
        fixes.push(SuggestedFix {
            message: message.clone(),
            edit: TextEdit {
                span: Span {
                    start: view.open_pos,
                    end: view.close_pos,
                },
                new_text: synthesize(view),
            },
        });
    }

    let start = params.or(returns).map(|v| v.open_pos)?;
    let end = returns.or(params).map(|v| v.close_pos)?;
    let span = Span { start, end };

    Some(Diagnostic {
        rule,
        message,
        severity: Severity::Warning,
        span,
        position: index.position(span.start),
        fixes,
    })
}
