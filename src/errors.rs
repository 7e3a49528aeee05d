//! Error taxonomy for reference resolution.
//!
//! Three failure classes exist ([`ParseError`], [`EvalError`], and the
//! umbrella [`LookupError`]); all of them collapse to a single "not found"
//! at the engine boundary, because probing incomplete input is a normal
//! usage pattern, never a fatal condition.
//!
//! Internal-consistency violations (an ancestry cycle escaping the visited
//! guard in the order computation) are not represented here: they panic.

use text_size::TextRange;
use thiserror::Error;

/// A malformed reference expression.
///
/// Carries the span of the offending text where one exists. Parse failures
/// are ordinary values; the parser never panics on bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The reference text is empty or all separators.
    #[error("empty reference")]
    Empty,

    /// A character sequence that is not part of the reference grammar.
    #[error("invalid token at {0:?}")]
    InvalidToken(TextRange),

    /// A separator with no segment name after it (`Foo#`, `a..b`).
    #[error("missing segment name at {0:?}")]
    MissingSegment(TextRange),

    /// A `[]` call-suffix somewhere other than the final position.
    #[error("call suffix must be the final step, at {0:?}")]
    MisplacedSuffix(TextRange),
}

/// A failure reported by the external expression evaluator or by zero-arg
/// construction. The message is opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("evaluation failed: {0}")]
pub struct EvalError(pub String);

impl EvalError {
    /// Create an evaluation error from a host-side message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Any failure on the way from reference text to a method handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The reference text did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A resolution step failed to locate a name.
    #[error("not found")]
    NotFound,

    /// The external evaluator reported an error.
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
