//! The layout predicate: is a field list fully inline or fully expanded?
//!
//! Purely line-based; columns never matter. Two entries on one line are
//! non-compliant regardless of the whitespace between them. The inline case
//! never reaches this module: single-line declarations are already filtered
//! out by the extractor, so any view seen here belongs to a multi-line
//! declaration and must be one-entry-per-line.

use crate::source::LineIndex;

use super::extract::FieldListView;

/// Verdict for one field list.
///
/// A view passes when every entry (each name of each field; the field
/// itself when unnamed) starts on its own line, distinct from the opening
/// delimiter, from the previous entry, and from the closing delimiter.
///
/// A view with a single field carrying at most one name skips the internal
/// walk — there is no ordering to violate — but stays subject to the
/// closing-delimiter check. A single field with several names (`a, b int`)
/// is checked in full.
#[must_use]
pub fn validate(view: &FieldListView<'_>, index: &LineIndex) -> bool {
    let fields = view.fields;
    debug_assert!(!fields.is_empty());

    let single_entry = fields.len() == 1 && fields[0].names.len() <= 1;
    if !single_entry {
        // Walk every entry, starting from the opening delimiter's line.
        let mut prev_line = index.line(view.open_pos);
        for field in fields {
            if field.names.is_empty() {
                let line = index.line(field.start);
                if line == prev_line {
                    return false;
                }
                prev_line = line;
            } else {
                for name in &field.names {
                    let line = index.line(name.span.start);
                    if line == prev_line {
                        return false;
                    }
                    prev_line = line;
                }
            }
        }
    }

    // The last entry (the final name of the last field, or the field
    // itself when unnamed) must not share a line with the closing
    // delimiter.
    let Some(last) = fields.last() else {
        return true;
    };
    let last_entry = last.names.last().map_or(last.start, |name| name.span.start);
    index.line(last_entry) != index.line(view.close_pos)
}
