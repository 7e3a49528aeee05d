//! Foundation types for the reflex engine.
//!
//! This module provides the primitives everything else builds on:
//! - [`EntityId`], [`ValueId`], [`MethodId`] - opaque ids minted by the host
//! - [`CallableId`] - identity of the implementation backing a method name
//! - [`SourceLocation`] - file + line pair attached to method definitions
//!
//! This module has NO dependencies on other reflex modules.

mod ids;
mod location;

pub use ids::{CallableId, EntityId, MethodId, ValueId};
pub use location::SourceLocation;
