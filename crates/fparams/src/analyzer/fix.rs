//! Replacement-text synthesis for an invalid field list.

use super::extract::FieldListView;

/// Render the fully-expanded interior for `view`.
///
/// One line per individual name, tab-indented, the field's type repeated
/// for each of its names; an unnamed field renders as its bare type. The
/// text replaces exactly `open_pos..close_pos`, and leads with a line break
/// so the first entry starts on a fresh line after the opening delimiter;
/// the closing delimiter ends up alone at the start of the following line.
///
/// Every entry gets a trailing comma whenever the flattened list has more
/// than one entry; only a genuine single-entry list omits it.
#[must_use]
pub fn synthesize(view: &FieldListView<'_>) -> String {
    let multiple =
        view.fields.len() > 1 || view.fields.iter().any(|f| f.names.len() > 1);

    let mut out = String::from("\n");
    for field in view.fields {
        if field.names.is_empty() {
            out.push('\t');
            out.push_str(&field.ty);
            out.push_str(if multiple { ",\n" } else { "\n" });
        } else {
            for name in &field.names {
                out.push('\t');
                out.push_str(&name.name);
                out.push(' ');
                out.push_str(&field.ty);
                out.push_str(if multiple { ",\n" } else { "\n" });
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::analyzer::extract::extract;
    use crate::analyzer::AnalyzerConfig;
    use crate::parse::parse_file;
    use crate::source::LineIndex;

    fn params_fix(src: &str) -> String {
        let decls = parse_file(src);
        assert_eq!(decls.len(), 1);
        let index = LineIndex::new(src);
        let (p, _) = extract(&decls[0], &index, &AnalyzerConfig::default());
        synthesize(&p.expect("expected a parameter view"))
    }

    #[test]
    fn test_two_fields() {
        assert_eq!(
            params_fix("func f(a int,\n\tb string) {\n}"),
            "\n\ta int,\n\tb string,\n"
        );
    }

    #[test]
    fn test_multi_name_field_flattens_with_full_type() {
        assert_eq!(
            params_fix("func f(a, b int,\n\tc string) {\n}"),
            "\n\ta int,\n\tb int,\n\tc string,\n"
        );
    }

    #[test]
    fn test_single_entry_omits_trailing_comma() {
        assert_eq!(params_fix("func f(\n\ta int) {\n}"), "\n\ta int\n");
    }

    #[test]
    fn test_single_field_many_names_keeps_commas() {
        assert_eq!(params_fix("func f(a, b int,\n) {\n}"), "\n\ta int,\n\tb int,\n");
    }

    #[test]
    fn test_unnamed_fields_render_bare_types() {
        let src = "func f() (int,\n\terror) {\n}";
        let decls = parse_file(src);
        let index = LineIndex::new(src);
        let (_, r) = extract(&decls[0], &index, &AnalyzerConfig::default());
        assert_eq!(synthesize(&r.unwrap()), "\n\tint,\n\terror,\n");
    }

    #[test]
    fn test_composite_types_render_verbatim() {
        assert_eq!(
            params_fix("func f(m map[string]int,\n\tfn func(a int) error) {\n}"),
            "\n\tm map[string]int,\n\tfn func(a int) error,\n"
        );
    }
}
