//! Go token scanner.
//!
//! A coarse lexer over Go source: just enough token structure to recognize
//! function declarations, split field lists and skip bodies by delimiter
//! matching. Comments and whitespace are skipped; literals are scanned as
//! single tokens so that braces and parens inside strings never confuse the
//! delimiter tracking. Type text is later re-read verbatim from the source,
//! so operator tokens are deliberately coarse.

use logos::Logos;

use crate::source::Span;

/// One Go token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token<'src> {
    /// The `func` keyword.
    #[token("func")]
    Func,
    /// The `map` keyword.
    #[token("map")]
    Map,
    /// The `chan` keyword.
    #[token("chan")]
    Chan,
    /// The `struct` keyword.
    #[token("struct")]
    Struct,
    /// The `interface` keyword.
    #[token("interface")]
    Interface,
    /// Any other identifier or keyword.
    #[regex(r"[\p{XID_Start}_][\p{XID_Continue}_]*")]
    Ident(&'src str),

    /// Integer or float literal (coarse; exact grammar is irrelevant here).
    #[regex(r"[0-9][0-9_a-zA-Z]*(\.[0-9_a-zA-Z]*)?([eEpP][+-]?[0-9]+)?")]
    Number,
    /// Interpreted string literal.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
    /// Raw string literal (may span lines).
    #[regex(r"`[^`]*`")]
    RawStr,
    /// Rune literal.
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Rune,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semi,
    /// `.`
    #[token(".")]
    Dot,
    /// `...`
    #[token("...")]
    Ellipsis,
    /// `/`, kept out of [`Token::Op`] so a greedy operator run can never
    /// swallow the start of a comment.
    #[token("/")]
    Slash,
    /// Any run of other operator characters (`*`, `<-`, `=`, ...).
    #[regex(r"[+\-*%&|^!<>=:~?]+", priority = 1)]
    Op,
}

impl Token<'_> {
    /// Whether this token opens a bracketed region.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::LParen | Self::LBracket | Self::LBrace)
    }

    /// Whether this token closes a bracketed region.
    #[must_use]
    pub const fn is_close(&self) -> bool {
        matches!(self, Self::RParen | Self::RBracket | Self::RBrace)
    }
}

/// Scan `source` into tokens with byte spans.
///
/// Bytes the scanner cannot match (illegal in Go) are skipped; the parser
/// treats declarations around them as best it can rather than failing the
/// whole file.
#[must_use]
pub fn scan(source: &str) -> Vec<(Token<'_>, Span)> {
    Token::lexer(source)
        .spanned()
        .filter_map(|(token, range)| match token {
            Ok(t) => Some((t, Span::new(range.start, range.end))),
            Err(()) => {
                tracing::trace!(start = range.start, "skipping unscannable byte");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token<'_>> {
        scan(src).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_scan_signature() {
        assert_eq!(
            kinds("func f(a int) {}"),
            vec![
                Token::Func,
                Token::Ident("f"),
                Token::LParen,
                Token::Ident("a"),
                Token::Ident("int"),
                Token::RParen,
                Token::LBrace,
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_scan_skips_comments() {
        assert_eq!(
            kinds("// line\nfunc /* block */ f()"),
            vec![Token::Func, Token::Ident("f"), Token::LParen, Token::RParen]
        );
    }

    #[test]
    fn test_scan_braces_inside_strings_ignored() {
        let toks = kinds(r#"x := "{ (" + `) }`"#);
        assert!(!toks.iter().any(|t| t.is_open() || t.is_close()));
    }

    #[test]
    fn test_scan_ellipsis_wins_over_dot() {
        assert_eq!(kinds("...int"), vec![Token::Ellipsis, Token::Ident("int")]);
        assert_eq!(
            kinds("pkg.T"),
            vec![Token::Ident("pkg"), Token::Dot, Token::Ident("T")]
        );
    }

    #[test]
    fn test_scan_spans_are_byte_accurate() {
        let toks = scan("func  名前()");
        assert_eq!(toks[0].1, Span::new(0, 4));
        // identifier starts after two spaces
        assert_eq!(toks[1].1.start, 6);
    }

    #[test]
    fn test_scan_channel_arrows_as_ops() {
        assert_eq!(
            kinds("<-chan chan<- int"),
            vec![
                Token::Op,
                Token::Chan,
                Token::Chan,
                Token::Op,
                Token::Ident("int")
            ]
        );
    }
}
