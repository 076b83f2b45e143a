//! Property tests for the layout analyzer.
//!
//! Generates random field lists rendered in random layouts and checks the
//! analyzer's contract: suggested fixes converge in one application, fully
//! expanded layouts are never flagged, and inline declarations are exempt.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use fparams::{analyze_source, apply_fixes, AnalyzerConfig};
use proptest::prelude::*;

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

#[derive(Debug, Clone)]
struct FieldSpec {
    names: Vec<String>,
    ty: String,
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}".prop_filter("go keyword", |s| !GO_KEYWORDS.contains(&s.as_str()))
}

fn type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "int",
        "string",
        "error",
        "[]byte",
        "*Conn",
        "map[string]int",
        "<-chan int",
        "func(int) error",
        "ctx.Context",
    ])
    .prop_map(str::to_string)
}

fn fields_strategy() -> impl Strategy<Value = Vec<FieldSpec>> {
    prop_oneof![
        // All-named list, possibly with multi-name fields.
        prop::collection::vec(
            (prop::collection::vec(name_strategy(), 1..3), type_strategy()),
            1..4
        )
        .prop_map(|fs| fs
            .into_iter()
            .map(|(names, ty)| FieldSpec { names, ty })
            .collect()),
        // All-unnamed list.
        prop::collection::vec(type_strategy(), 1..4).prop_map(|ts| ts
            .into_iter()
            .map(|ty| FieldSpec { names: Vec::new(), ty })
            .collect()),
    ]
}

/// A field list plus one layout decision per field and one for the closing
/// delimiter: whether a line break precedes it.
fn list_with_breaks() -> impl Strategy<Value = (Vec<FieldSpec>, Vec<bool>)> {
    fields_strategy().prop_flat_map(|fields| {
        let n = fields.len() + 1;
        let breaks = prop::collection::vec(any::<bool>(), n..=n);
        (Just(fields), breaks)
    })
}

fn render_field(field: &FieldSpec) -> String {
    if field.names.is_empty() {
        field.ty.clone()
    } else {
        format!("{} {}", field.names.join(", "), field.ty)
    }
}

/// Render a list in a random mixed layout.
fn render_mixed(fields: &[FieldSpec], breaks: &[bool]) -> String {
    let mut out = String::from("(");
    for (i, field) in fields.iter().enumerate() {
        if breaks[i] {
            out.push_str("\n\t");
        } else if i > 0 {
            out.push(' ');
        }
        out.push_str(&render_field(field));
        if i + 1 < fields.len() {
            out.push(',');
        }
    }
    if breaks[fields.len()] {
        out.push_str(",\n");
    }
    out.push(')');
    out
}

/// Render a list in the canonical fully-expanded layout.
fn render_expanded(fields: &[FieldSpec]) -> String {
    let mut out = String::from("(\n");
    for field in fields {
        if field.names.is_empty() {
            out.push_str(&format!("\t{},\n", field.ty));
        } else {
            for name in &field.names {
                out.push_str(&format!("\t{} {},\n", name, field.ty));
            }
        }
    }
    out.push(')');
    out
}

/// Render a list fully inline.
fn render_inline(fields: &[FieldSpec]) -> String {
    let rendered: Vec<String> = fields.iter().map(render_field).collect();
    format!("({})", rendered.join(", "))
}

fn wrap(params: &str, results: Option<&str>) -> String {
    let results = results.map(|r| format!(" {r}")).unwrap_or_default();
    format!("package p\n\nfunc f{params}{results} {{\n}}\n")
}

proptest! {
    /// One application of the suggested fixes always yields a clean file.
    #[test]
    fn fix_converges_in_one_pass(
        (params, pbreaks) in list_with_breaks(),
        results in prop::option::of(list_with_breaks()),
    ) {
        let params_text = render_mixed(&params, &pbreaks);
        let results_text = results
            .as_ref()
            .map(|(fields, breaks)| render_mixed(fields, breaks));
        let src = wrap(&params_text, results_text.as_deref());

        let config = AnalyzerConfig::default();
        let report = analyze_source("prop.go", &src, &config);
        let fixed = apply_fixes(&src, &report.diagnostics).unwrap();
        let second = analyze_source("prop.go", &fixed, &config);
        prop_assert!(
            second.diagnostics.is_empty(),
            "still dirty after fixing:\n{}",
            fixed
        );
    }

    /// Fully expanded layouts are never flagged.
    #[test]
    fn expanded_layout_is_clean(
        params in fields_strategy(),
        results in prop::option::of(fields_strategy()),
    ) {
        let params_text = render_expanded(&params);
        let results_text = results.as_ref().map(|f| render_expanded(f));
        let src = wrap(&params_text, results_text.as_deref());

        let report = analyze_source("prop.go", &src, &AnalyzerConfig::default());
        prop_assert!(report.diagnostics.is_empty(), "flagged valid layout:\n{}", src);
    }

    /// Declarations whose signature and body share one line are exempt.
    #[test]
    fn inline_declaration_is_exempt(
        params in fields_strategy(),
        results in prop::option::of(fields_strategy()),
    ) {
        let params_text = render_inline(&params);
        let results_text = results.as_ref().map(|f| render_inline(f));
        let src = wrap(&params_text, results_text.as_deref());

        let report = analyze_source("prop.go", &src, &AnalyzerConfig::default());
        prop_assert!(report.diagnostics.is_empty(), "flagged inline layout:\n{}", src);
    }
}
