//! Textual method references.
//!
//! A reference expression navigates to a method: segments joined by the
//! separators `.`, `#`, `::`, with the call-suffixes `new` and `[]`
//! applying an operation to the prior result.
//!
//! Pipeline: [`lexer`] tokenizes, [`parser`] produces an ordered list of
//! parse nodes, [`resolver`] evaluates the nodes against the running
//! environment. Separators are left-associative and lowest-precedence on
//! the left: the whole left side is resolved before the trailing step is
//! applied.

pub mod lexer;
pub mod parser;
pub mod resolver;

pub use parser::{RefNode, Separator, parse_reference};
pub use resolver::{ResolveOptions, resolve_reference};
