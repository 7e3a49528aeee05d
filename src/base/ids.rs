//! Opaque identifiers for host-owned graph nodes.
//!
//! The engine never interprets these values; they are handles the embedding
//! environment mints and understands. Equality and hashing are all the
//! engine needs, except for [`CallableId`] where equality *is* the semantic
//! operation (two names alias iff their callable identities are equal).

use std::fmt;

/// Identifier for an entity (class or module node) in the host graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Create an entity id from a raw index.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Identifier for a live value in the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueId(u64);

impl ValueId {
    /// Create a value id from a raw handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identifier for a method entry in an entity's method table.
///
/// A `MethodId` names a *binding* (one row of one method table), not the
/// underlying implementation; aliased names have distinct `MethodId`s but
/// the same [`CallableId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId(u64);

impl MethodId {
    /// Create a method id from a raw handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identity of the implementation backing a method name.
///
/// Two method-table entries alias each other iff their callable identities
/// compare equal. This holds for primitive implementations too: identity is
/// compared, never name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallableId(u64);

impl CallableId {
    /// Create a callable identity from a raw handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}
