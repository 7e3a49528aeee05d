//! The object-model surface the engine operates on.
//!
//! The host environment owns the graph of entities, values, and method
//! tables; the engine reads it through the [`ObjectModel`] adapter trait and
//! never assumes a specific host representation.
//!
//! ## Key Types
//!
//! - [`ObjectModel`] — the injected adapter (reflection primitives)
//! - [`Param`], [`ParamKind`] — ordered parameter descriptors
//! - [`ExecutionContext`], [`ContextKind`] — captured frames for
//!   context-relative queries

mod adapter;
mod context;
mod params;

pub use adapter::ObjectModel;
pub use context::{ContextKind, ExecutionContext};
pub use params::{Param, ParamKind};
