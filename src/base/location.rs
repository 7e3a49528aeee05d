//! Source locations attached to method definitions and execution contexts.

use std::fmt;

use smol_str::SmolStr;

/// A file + line pair identifying where a method was defined.
///
/// Locations compare exactly; the context matcher relies on equality, not
/// proximity, when recovering a method from a captured context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: SmolStr,
    pub line: u32,
}

impl SourceLocation {
    /// Create a location from a file name and 1-based line number.
    pub fn new(file: impl Into<SmolStr>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
