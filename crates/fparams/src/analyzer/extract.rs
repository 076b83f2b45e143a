//! Field-list extraction and the single-line exemption.

use crate::parse::{Field, FieldGroup, FuncDecl};
use crate::source::LineIndex;

use super::AnalyzerConfig;

/// A position-bounded view of one field list, ready for validation.
///
/// `open_pos` is the offset just inside the opening `(`; `close_pos` is the
/// offset of the closing `)` itself, so `open_pos..close_pos` is exactly
/// the interior a fix replaces. Equal when the list is empty.
#[derive(Debug, Clone, Copy)]
pub struct FieldListView<'a> {
    /// Offset immediately after the opening delimiter.
    pub open_pos: u32,
    /// Offset of the closing delimiter (exclusive interior end).
    pub close_pos: u32,
    /// Fields in declaration order. Never empty.
    pub fields: &'a [Field],
}

impl<'a> FieldListView<'a> {
    fn from_group(group: &'a FieldGroup) -> Option<Self> {
        if group.is_empty() {
            return None;
        }
        Some(Self {
            open_pos: group.open + 1,
            close_pos: group.close,
            fields: &group.fields,
        })
    }
}

/// Build the parameter and result views for one declaration.
///
/// Yields `(None, None)` when there is nothing to check: both groups absent
/// or empty, no body to anchor the exemption against, or the whole
/// signature and the body brace share one source line (a deliberately
/// inline declaration is exempt regardless of internal layout).
pub fn extract<'a>(
    decl: &'a FuncDecl,
    index: &LineIndex,
    config: &AnalyzerConfig,
) -> (Option<FieldListView<'a>>, Option<FieldListView<'a>>) {
    let params_empty = decl.params.as_ref().map_or(true, FieldGroup::is_empty);
    let results_empty = decl.results.as_ref().map_or(true, FieldGroup::is_empty);
    if params_empty && results_empty {
        return (None, None);
    }

    let Some(body_start) = decl.body_start else {
        return (None, None);
    };
    if index.line(decl.sig_start) == index.line(body_start) {
        tracing::trace!(name = %decl.name.name, "single-line declaration, exempt");
        return (None, None);
    }

    let params = if config.check_params {
        decl.params.as_ref().and_then(FieldListView::from_group)
    } else {
        None
    };
    let results = if config.check_returns {
        decl.results.as_ref().and_then(FieldListView::from_group)
    } else {
        None
    };
    (params, results)
}
