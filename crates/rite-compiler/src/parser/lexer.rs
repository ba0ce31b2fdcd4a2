//! Lexer for rite source.
//!
//! Produces span-based tokens without storing text - text is sliced from
//! source only when needed. The language is line-oriented, so newlines are
//! real tokens; inline whitespace and comments are lexed but skipped by the
//! parser.

use logos::Logos;
use std::ops::Range;

/// Token kinds for rite source.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Comment to end of line.
    #[regex(r"//[^\n]*", priority = 5, allow_greedy = true)]
    Comment,

    #[token("\n")]
    Newline,

    /// Inline whitespace (never a newline).
    #[regex(r"[ \t\r\f]+")]
    Space,

    /// Hex byte literal: `0xNN`.
    #[regex(r"0[xX][0-9a-fA-F]+", priority = 4)]
    HexByte,

    /// Any other run of non-whitespace: mnemonics and operands alike.
    #[regex(r"[^ \t\r\f\n]+", priority = 1)]
    Word,
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Tokenize source into span-based tokens.
///
/// The word class covers every non-whitespace character, so lexing cannot
/// fail; an error from logos would indicate a gap in the token table and is
/// skipped rather than surfaced (unrecognized input is a no-op, never an
/// error, at every level of this language).
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        if let Ok(kind) = result {
            tokens.push(Token {
                kind,
                span: lexer.span(),
            });
        }
    }

    tokens
}

/// The text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
