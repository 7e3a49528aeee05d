//! Parameter descriptors and their canonical rendering.

use smol_str::SmolStr;

/// The kind of one method parameter.
///
/// A method table entry carries at most one `Rest` and at most one `Block`
/// parameter; the adapter is trusted on this, the engine does not
/// re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Required positional parameter.
    Required,
    /// Optional positional parameter (has a default).
    Optional,
    /// Rest/splat parameter collecting trailing positionals.
    Rest,
    /// Required keyword parameter.
    Keyword,
    /// Optional keyword parameter (has a default).
    KeywordOptional,
    /// Block/continuation parameter.
    Block,
}

/// One parameter of a method, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub kind: ParamKind,
    pub name: SmolStr,
}

impl Param {
    /// Create a parameter descriptor.
    pub fn new(kind: ParamKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Render this parameter the way it appears in a canonical signature.
    pub fn render(&self) -> String {
        match self.kind {
            ParamKind::Required => self.name.to_string(),
            ParamKind::Optional => format!("{}=?", self.name),
            ParamKind::Rest => format!("*{}", self.name),
            ParamKind::Keyword => format!("{}:", self.name),
            ParamKind::KeywordOptional => format!("{}:?", self.name),
            ParamKind::Block => format!("&{}", self.name),
        }
    }
}
