//! # reflex-base
//!
//! Core library for method resolution, reference lookup, and context
//! introspection over a dynamic object model.
//!
//! The host environment owns the object graph (classes, mixed-in modules,
//! per-object singleton scopes) and exposes it through the [`ObjectModel`]
//! adapter trait. Every query here is a pure, synchronous read over the
//! snapshot visible at call time; nothing is cached across calls.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! engine     → query facade: resolve_reference, resolution_order,
//!              method_from_context
//!   ↓
//! context    → recover the originating method from an execution context
//!   ↓
//! reference  → logos lexer, reference parser, reference resolver
//!   ↓
//! handle     → MethodHandle: signature, source, super chain, aliases
//!   ↓
//! order      → ancestry linearization (resolution orders)
//!   ↓
//! model      → ObjectModel adapter trait, parameters, execution contexts
//!   ↓
//! base       → primitives (EntityId, ValueId, MethodId, CallableId,
//!              SourceLocation)
//! ```

/// Foundation types: opaque ids and source locations
pub mod base;

/// Error taxonomy: parse, evaluation, and lookup failures
pub mod errors;

/// Object-model adapter trait, parameter descriptors, execution contexts
pub mod model;

/// Ancestry linearization: instance, value, and entity-as-value orders
pub mod order;

/// Method handles: signatures, source text, super chains, alias sets
pub mod handle;

/// Textual method references: lexer, parser, resolver
pub mod reference;

/// Context matching: recover a method handle from a captured context
pub mod context;

mod engine;

// Re-export foundation types
pub use base::{CallableId, EntityId, MethodId, SourceLocation, ValueId};

pub use context::MatchOptions;
pub use engine::{Engine, Target};
pub use errors::{EvalError, LookupError, ParseError};
pub use handle::MethodHandle;
pub use model::{ContextKind, ExecutionContext, ObjectModel, Param, ParamKind};
pub use reference::ResolveOptions;
