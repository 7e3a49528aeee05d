//! Captured execution contexts.

use crate::base::{EntityId, SourceLocation, ValueId};

/// What kind of frame a context was captured from.
///
/// The context matcher can be asked to reject `TopLevel` and `Eval` frames
/// (synthetic/default contexts), descending to the parent frame instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// A frame inside a method body.
    Method,
    /// A frame inside a block.
    Block,
    /// A frame created by evaluating a snippet.
    Eval,
    /// The default top-level frame.
    TopLevel,
}

/// A captured snapshot of an execution frame.
///
/// Holds everything the engine needs to answer context-relative queries:
/// the receiver, the source location, an optional lexical owner hint, and a
/// link to the enclosing frame for caller-relative queries.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub receiver: ValueId,
    pub location: SourceLocation,
    pub kind: ContextKind,
    pub lexical_owner: Option<EntityId>,
    pub parent: Option<Box<ExecutionContext>>,
}

impl ExecutionContext {
    /// Create a context captured inside a method body.
    pub fn method(receiver: ValueId, location: SourceLocation) -> Self {
        Self::of_kind(ContextKind::Method, receiver, location)
    }

    /// Create a top-level (default) context.
    pub fn top_level(receiver: ValueId, location: SourceLocation) -> Self {
        Self::of_kind(ContextKind::TopLevel, receiver, location)
    }

    /// Create a context of an explicit kind.
    pub fn of_kind(kind: ContextKind, receiver: ValueId, location: SourceLocation) -> Self {
        Self {
            receiver,
            location,
            kind,
            lexical_owner: None,
            parent: None,
        }
    }

    /// Attach the lexical owner (the entity whose body lexically encloses
    /// the captured frame).
    pub fn with_lexical_owner(mut self, owner: EntityId) -> Self {
        self.lexical_owner = Some(owner);
        self
    }

    /// Attach the enclosing frame.
    pub fn with_parent(mut self, parent: ExecutionContext) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Whether this is a synthetic/default frame.
    pub fn is_default(&self) -> bool {
        matches!(self.kind, ContextKind::TopLevel | ContextKind::Eval)
    }
}
