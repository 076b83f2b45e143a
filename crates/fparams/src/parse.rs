//! Minimal Go function-declaration parser.
//!
//! A single pass over the token stream that recognizes top-level `func`
//! declarations (plain functions and methods), extracts their parameter and
//! result field lists with source positions, and skips everything else by
//! delimiter matching. This is the host collaborator the analyzer consumes;
//! it models only what the layout checks need and degrades gracefully
//! (declaration skipped) on input it cannot shape, rather than erroring.
//!
//! Field grouping follows Go: a field list is comma-separated elements;
//! ident-only elements preceding a `name type` element are that field's
//! extra names, and a list with no `name type` element is all unnamed types.

use crate::scan::{scan, Token};
use crate::source::Span;

/// A declared name with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// Identifier text.
    pub name: String,
    /// Byte span of the identifier.
    pub span: Span,
}

/// One grouped field: zero-or-more names sharing one type.
///
/// Zero names denotes an unnamed field, e.g. a bare type in a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Names declared by this field, in source order.
    pub names: Vec<Ident>,
    /// The type, rendered as (whitespace-collapsed) source text.
    pub ty: String,
    /// Byte offset where the field starts (first name, or the type).
    pub start: u32,
}

/// A parenthesized field list with its delimiter positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    /// Byte offset of the opening `(`.
    pub open: u32,
    /// Byte offset of the closing `)`.
    pub close: u32,
    /// Fields in declaration order. May be empty for `()`.
    pub fields: Vec<Field>,
}

impl FieldGroup {
    /// Whether the group declares no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One top-level function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// The declared function name.
    pub name: Ident,
    /// Byte offset of the `func` keyword.
    pub sig_start: u32,
    /// Byte offset of the body's `{`, if the declaration has a body.
    pub body_start: Option<u32>,
    /// Parameter list. `None` only when parsing could not shape one.
    pub params: Option<FieldGroup>,
    /// Parenthesized result list. A bare single result type yields `None`;
    /// there are no delimiters to lay out around it.
    pub results: Option<FieldGroup>,
}

type Tok<'src> = (Token<'src>, Span);

/// Parse all top-level function declarations out of `source`.
#[must_use]
pub fn parse_file(source: &str) -> Vec<FuncDecl> {
    let tokens = scan(source);
    let mut decls = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        let tok = tokens[i].0;
        if depth == 0 && tok == Token::Func {
            if let Some((decl, next)) = parse_decl(&tokens, source, i) {
                tracing::trace!(name = %decl.name.name, "parsed func declaration");
                decls.push(decl);
                i = next;
                continue;
            }
        }
        if tok.is_open() {
            depth += 1;
        } else if tok.is_close() {
            depth = depth.saturating_sub(1);
        }
        i += 1;
    }

    decls
}

/// Index of the delimiter matching the opener at `open`, counting all
/// bracket kinds together. `None` when the stream ends unbalanced.
fn match_delim(tokens: &[Tok<'_>], open: usize) -> Option<usize> {
    debug_assert!(tokens[open].0.is_open());
    let mut depth = 0usize;
    for (k, (tok, _)) in tokens.iter().enumerate().skip(open) {
        if tok.is_open() {
            depth += 1;
        } else if tok.is_close() {
            depth -= 1;
            if depth == 0 {
                return Some(k);
            }
        }
    }
    None
}

/// Try to shape a declaration starting at the `func` keyword at `i`.
///
/// Returns the declaration and the index just past it, or `None` when the
/// keyword introduces a function literal or type rather than a declaration.
fn parse_decl(tokens: &[Tok<'_>], source: &str, i: usize) -> Option<(FuncDecl, usize)> {
    let sig_start = tokens[i].1.start;
    let mut j = i + 1;

    // Optional method receiver: `func (r *T) Name(...)`. A `func` followed
    // by parens that are not followed by `Name(` is a literal or type.
    if matches!(tokens.get(j), Some((Token::LParen, _))) {
        let close = match_delim(tokens, j)?;
        match (tokens.get(close + 1), tokens.get(close + 2)) {
            (Some((Token::Ident(_), _)), Some((Token::LParen | Token::LBracket, _))) => {
                j = close + 1;
            }
            _ => return None,
        }
    }

    let name = match tokens.get(j) {
        Some(&(Token::Ident(name), span)) => Ident {
            name: name.to_string(),
            span,
        },
        _ => return None,
    };
    j += 1;

    // Generic type parameter list.
    if matches!(tokens.get(j), Some((Token::LBracket, _))) {
        j = match_delim(tokens, j)? + 1;
    }

    if !matches!(tokens.get(j), Some((Token::LParen, _))) {
        return None;
    }
    let params_close = match_delim(tokens, j)?;
    let params = parse_field_group(tokens, source, j, params_close);
    let mut k = params_close + 1;

    let results = match tokens.get(k) {
        Some((Token::LParen, _)) => {
            let close = match_delim(tokens, k)?;
            let group = parse_field_group(tokens, source, k, close);
            k = close + 1;
            Some(group)
        }
        Some((Token::LBrace | Token::Semi, _)) | None => None,
        Some(_) => {
            k = skip_bare_type(tokens, source, k);
            None
        }
    };

    let mut body_start = None;
    if matches!(tokens.get(k), Some((Token::LBrace, _))) {
        body_start = Some(tokens[k].1.start);
        k = match_delim(tokens, k)? + 1;
    }

    Some((
        FuncDecl {
            name,
            sig_start,
            body_start,
            params: Some(params),
            results,
        },
        k,
    ))
}

/// Skip over a bare (unparenthesized) result type, stopping at the body
/// brace. Braces belonging to `struct{...}`/`interface{...}` result types
/// are consumed with their keyword. A line break where Go would insert a
/// semicolon ends the type, so a body-less declaration never swallows the
/// declaration after it.
fn skip_bare_type(tokens: &[Tok<'_>], source: &str, mut k: usize) -> usize {
    while k < tokens.len() {
        if implicit_semi_before(tokens, source, k) {
            break;
        }
        match tokens[k].0 {
            Token::Struct | Token::Interface
                if matches!(tokens.get(k + 1), Some((Token::LBrace, _))) =>
            {
                match match_delim(tokens, k + 1) {
                    Some(close) => k = close + 1,
                    None => return tokens.len(),
                }
            }
            Token::LParen | Token::LBracket => match match_delim(tokens, k) {
                Some(close) => k = close + 1,
                None => return tokens.len(),
            },
            Token::LBrace | Token::Semi => break,
            _ => k += 1,
        }
    }
    k
}

/// Whether Go's automatic semicolon insertion ends the statement in the
/// gap before token `k`: a line break after a token that can terminate
/// an expression or type.
fn implicit_semi_before(tokens: &[Tok<'_>], source: &str, k: usize) -> bool {
    let (prev, prev_span) = tokens[k - 1];
    if !matches!(
        prev,
        Token::Ident(_)
            | Token::Number
            | Token::Str
            | Token::RawStr
            | Token::Rune
            | Token::RParen
            | Token::RBracket
            | Token::RBrace
    ) {
        return false;
    }
    source[prev_span.end as usize..tokens[k].1.start as usize].contains('\n')
}

/// Parse the interior of a parenthesized field list.
fn parse_field_group(
    tokens: &[Tok<'_>],
    source: &str,
    open_idx: usize,
    close_idx: usize,
) -> FieldGroup {
    let mut fields = Vec::new();
    let mut pending: Vec<Ident> = Vec::new();

    for (s, e) in split_elements(tokens, open_idx, close_idx) {
        if is_named_element(tokens, s, e) {
            let Token::Ident(name) = tokens[s].0 else {
                unreachable!()
            };
            let mut names = std::mem::take(&mut pending);
            names.push(Ident {
                name: name.to_string(),
                span: tokens[s].1,
            });
            let start = names[0].span.start;
            fields.push(Field {
                names,
                ty: render_type(tokens, source, s + 1, e),
                start,
            });
        } else if e - s == 1 && matches!(tokens[s].0, Token::Ident(_)) {
            // Tentative: a lone ident is a name if a `name type` element
            // follows, otherwise it was an unnamed type all along.
            let Token::Ident(name) = tokens[s].0 else {
                unreachable!()
            };
            pending.push(Ident {
                name: name.to_string(),
                span: tokens[s].1,
            });
        } else {
            flush_unnamed(&mut fields, &mut pending);
            fields.push(Field {
                names: Vec::new(),
                ty: render_type(tokens, source, s, e),
                start: tokens[s].1.start,
            });
        }
    }
    flush_unnamed(&mut fields, &mut pending);

    FieldGroup {
        open: tokens[open_idx].1.start,
        close: tokens[close_idx].1.start,
        fields,
    }
}

/// Split the tokens between two delimiters into comma-separated elements
/// (token index ranges), honoring nesting.
fn split_elements(tokens: &[Tok<'_>], open_idx: usize, close_idx: usize) -> Vec<(usize, usize)> {
    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut start = open_idx + 1;
    for k in open_idx + 1..close_idx {
        let tok = tokens[k].0;
        if tok.is_open() {
            depth += 1;
        } else if tok.is_close() {
            depth = depth.saturating_sub(1);
        } else if tok == Token::Comma && depth == 0 {
            if k > start {
                elements.push((start, k));
            }
            start = k + 1;
        }
    }
    if close_idx > start {
        elements.push((start, close_idx));
    }
    elements
}

/// Whether the element `[s, e)` has the shape `name type`.
fn is_named_element(tokens: &[Tok<'_>], s: usize, e: usize) -> bool {
    if e - s < 2 || !matches!(tokens[s].0, Token::Ident(_)) {
        return false;
    }
    match tokens[s + 1].0 {
        // `pkg.T` is a qualified type, not a named field.
        Token::Dot => false,
        // `x [4]int` / `x [n]int` / `x []T` are named array/slice fields:
        // the type continues past the bracket group. A bare `List[int]`
        // instantiation ends at its `]`.
        Token::LBracket => match match_delim(tokens, s + 1) {
            Some(close) => close + 1 < e,
            None => false,
        },
        _ => true,
    }
}

fn flush_unnamed(fields: &mut Vec<Field>, pending: &mut Vec<Ident>) {
    for id in pending.drain(..) {
        fields.push(Field {
            names: Vec::new(),
            ty: id.name,
            start: id.span.start,
        });
    }
}

/// Render a type from its token range: the verbatim source slice with
/// whitespace runs (including line breaks) collapsed to single spaces.
fn render_type(tokens: &[Tok<'_>], source: &str, s: usize, e: usize) -> String {
    debug_assert!(s < e);
    let start = tokens[s].1.start as usize;
    let end = tokens[e - 1].1.end as usize;
    source[start..end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
