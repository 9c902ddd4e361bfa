use std::ops::Range;

use logos::Logos;

use crate::error::{ParseError, ParseResult};

/// Kind of a lexical token.
///
/// Whitespace is skipped. A run of letters is a variable name unless it is
/// exactly `sqrt`; `**` is matched before `*`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
pub enum TokenKind {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `%`
    #[token("%")]
    Modulo,
    /// A run of letters naming a variable, such as `x` or `total`.
    #[regex(r"[a-zA-Z]+")]
    Variable,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    ClosedParen,
    /// Zero-width sentinel appended after the last real token.
    End,
}

/// A token together with the byte range of the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was recognized.
    pub kind: TokenKind,
    /// Half-open byte range into the source.
    pub span: Range<usize>,
}

impl Token {
    /// The source text this token covers.
    ///
    /// `Number` and `Variable` tokens carry no payload; their literal text is
    /// recovered by slicing the source with the span.
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.clone()).unwrap_or_default()
    }

    /// Human-readable description for error messages.
    #[must_use]
    pub fn describe(&self, source: &str) -> String {
        match self.kind {
            TokenKind::End => "end of input".to_string(),
            _ => format!("'{}'", self.text(source)),
        }
    }
}

/// Scans `source` into tokens, ending with a [`TokenKind::End`] sentinel.
///
/// # Errors
/// Returns [`ParseError::UnknownToken`] for the first character that starts
/// no token.
///
/// # Example
/// ```
/// use stepcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("2 ** sqrt x").unwrap()
///                                            .into_iter()
///                                            .map(|t| t.kind)
///                                            .collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::DoubleStar,
///             TokenKind::Sqrt,
///             TokenKind::Variable,
///             TokenKind::End]);
///
/// assert!(tokenize("2 ^ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        if let Ok(kind) = kind {
            tracing::trace!(?kind, ?span, "token");
            tokens.push(Token { kind, span });
        } else {
            return Err(ParseError::UnknownToken { token:  lexer.slice().to_string(),
                                                  offset: span.start, });
        }
    }

    tokens.push(Token { kind: TokenKind::End,
                        span: source.len()..source.len(), });
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn spans_slice_back_to_literals() {
        let source = "12 + abc";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[0].text(source), "12");
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[2].text(source), "abc");
        assert_eq!(tokens[3].span, 8..8);
    }

    #[test]
    fn double_star_is_greedy() {
        use TokenKind::{DoubleStar, End, Number, Star};
        assert_eq!(kinds("2**3"), [Number, DoubleStar, Number, End]);
        assert_eq!(kinds("2***3"), [Number, DoubleStar, Star, Number, End]);
        assert_eq!(kinds("2* *3"), [Number, Star, Star, Number, End]);
    }

    #[test]
    fn only_exact_sqrt_is_a_keyword() {
        use TokenKind::{End, Sqrt, Variable};
        assert_eq!(kinds("sqrt"), [Sqrt, End]);
        assert_eq!(kinds("sqrtx"), [Variable, End]);
        assert_eq!(kinds("sqr"), [Variable, End]);
        assert_eq!(kinds("sqrt x"), [Sqrt, Variable, End]);
    }

    #[test]
    fn digits_and_letters_split() {
        use TokenKind::{End, Number, Variable};
        assert_eq!(kinds("2x"), [Number, Variable, End]);
        assert_eq!(kinds("x2"), [Variable, Number, End]);
    }

    #[test]
    fn all_operators() {
        use TokenKind::*;
        assert_eq!(kinds("+ - * / % ( )"),
                   [Plus, Minus, Star, Slash, Modulo, OpenParen, ClosedParen, End]);
    }

    #[test]
    fn empty_source_is_just_the_sentinel() {
        assert_eq!(kinds(""), [TokenKind::End]);
        assert_eq!(kinds(" \t\n"), [TokenKind::End]);
    }

    #[test]
    fn every_ascii_whitespace_separates_tokens() {
        use TokenKind::{End, Number, Plus};
        assert_eq!(kinds("1\x0B+\x0C2\r\n"), [Number, Plus, Number, End]);
    }

    #[test]
    fn unknown_character_reports_offset() {
        assert_eq!(tokenize("1 + `"),
                   Err(ParseError::UnknownToken { token:  "`".to_string(),
                                                  offset: 4, }));
        assert!(matches!(tokenize("x_1"), Err(ParseError::UnknownToken { offset: 1, .. })));
    }
}
