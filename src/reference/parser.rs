//! Parser for reference expressions.
//!
//! Produces an ordered list of [`RefNode`]s or a [`ParseError`]; malformed
//! input is a value, never a panic.
//!
//! Suffix rules:
//! - `[]` lexed directly after a name (no separator) is the Index suffix
//!   and must be the final node; after a separator it is the ordinary
//!   method name `[]`.
//! - A `.new` step in non-final position is the Construct suffix (leading
//!   and intermediate segments carry call-suffixes); a final `.new` stays a
//!   named step, so `Foo.new` can still resolve a method called `new`.

use smol_str::SmolStr;

use super::lexer::{Token, TokenKind, tokenize};
use crate::errors::ParseError;

/// How a named step binds to the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// The leading segment (no separator to its left).
    Lead,
    /// `.` — lookup on whatever the left side evaluates to; singleton
    /// methods when the left side names an entity.
    Dot,
    /// `#` — forced unbound instance-method lookup.
    Hash,
    /// `::` — entity path or instance lookup, either naming convention.
    ColonColon,
}

/// One parsed node of a reference expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefNode {
    /// A named lookup step.
    Step { sep: Separator, name: SmolStr },
    /// Apply zero-argument construction to the prior result.
    Construct,
    /// Resolve the method literally named `[]` on the prior result.
    Index,
}

impl RefNode {
    fn step(sep: Separator, name: &str) -> Self {
        Self::Step {
            sep,
            name: SmolStr::new(name),
        }
    }
}

/// Parse a reference expression into its node list.
pub fn parse_reference(text: &str) -> Result<Vec<RefNode>, ParseError> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut nodes = Vec::with_capacity(tokens.len().div_ceil(2));
    let mut iter = tokens.iter().peekable();

    // Leading segment: must be a plain name.
    match iter.next() {
        Some(Token {
            kind: TokenKind::Ident,
            text,
            ..
        }) => nodes.push(RefNode::step(Separator::Lead, text)),
        Some(token) => return Err(invalid(token)),
        None => return Err(ParseError::Empty),
    }

    while let Some(token) = iter.next() {
        match token.kind {
            // Adjacent `[]` — the Index suffix; only legal as the final node.
            TokenKind::Brackets => {
                if iter.peek().is_some() {
                    return Err(ParseError::MisplacedSuffix(token.range));
                }
                nodes.push(RefNode::Index);
            }
            TokenKind::Dot | TokenKind::Hash | TokenKind::ColonColon => {
                let sep = match token.kind {
                    TokenKind::Dot => Separator::Dot,
                    TokenKind::Hash => Separator::Hash,
                    _ => Separator::ColonColon,
                };
                match iter.next() {
                    // `#[]`, `.[]`, `::[]` name the method `[]`.
                    Some(Token {
                        kind: TokenKind::Ident | TokenKind::Brackets,
                        text,
                        ..
                    }) => nodes.push(RefNode::step(sep, text)),
                    Some(next) => return Err(invalid(next)),
                    None => return Err(ParseError::MissingSegment(token.range)),
                }
            }
            TokenKind::Ident | TokenKind::Error => return Err(invalid(token)),
        }
    }

    // Non-final `.new` steps are the Construct suffix.
    let last = nodes.len() - 1;
    for node in &mut nodes[..last] {
        let is_new = matches!(
            node,
            RefNode::Step { sep: Separator::Dot, name } if name.as_str() == "new"
        );
        if is_new {
            *node = RefNode::Construct;
        }
    }

    Ok(nodes)
}

fn invalid(token: &Token<'_>) -> ParseError {
    ParseError::InvalidToken(token.range)
}
