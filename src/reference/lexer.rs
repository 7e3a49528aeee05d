//! Logos-based lexer for reference expressions.
//!
//! Reference text is short and carries no whitespace; everything outside
//! the grammar becomes an `Error` token the parser turns into a parse
//! failure, never a panic.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Token kinds of the reference grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A segment name: identifier (with optional `?`/`!`/`=` suffix),
    /// operator name, or `[]=`.
    Ident,
    /// `.`
    Dot,
    /// `#`
    Hash,
    /// `::`
    ColonColon,
    /// `[]` — a call-suffix when adjacent to a name, the method name `[]`
    /// after a separator.
    Brackets,
    /// Anything outside the grammar.
    Error,
}

/// Logos token enum - maps to [`TokenKind`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum LogosToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*[?!=]?")]
    #[token("[]=")]
    #[regex(r"===|==|<=>|<=|>=|<<|>>|=~|[+\-*/%<>!^~]")]
    Ident,

    #[token("::")]
    ColonColon,

    #[token(".")]
    Dot,

    #[token("#")]
    Hash,

    #[token("[]")]
    Brackets,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::ColonColon => TokenKind::ColonColon,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Hash => TokenKind::Hash,
            LogosToken::Brackets => TokenKind::Brackets,
        }
    }
}

/// Lexer wrapping the logos-generated tokenizer.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );
        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };
        Some(Token {
            kind,
            text: self.inner.slice(),
            range,
        })
    }
}

/// Tokenize an entire reference expression into a Vec.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}
