//! Query facade.
//!
//! [`Engine`] is the in-process query surface the REPL/CLI layer consumes.
//! It borrows the adapter for the duration of one query; nothing is owned,
//! nothing is cached, every call answers against the snapshot visible at
//! call time.

use crate::base::{EntityId, ValueId};
use crate::context::{MatchOptions, method_from_context};
use crate::handle::MethodHandle;
use crate::model::{ExecutionContext, ObjectModel};
use crate::order::{entity_as_value_order, first_definition, instance_order, value_order};
use crate::reference::{ResolveOptions, resolve_reference};

/// What to compute a resolution order for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// An entity's instance resolution order.
    Entity(EntityId),
    /// A value's full order (singleton scope first, when present).
    Value(ValueId),
    /// An entity treated as a value (its own singleton methods, extended
    /// modules included).
    EntityAsValue(EntityId),
}

/// The engine's query surface over one object-model snapshot.
pub struct Engine<'a> {
    model: &'a dyn ObjectModel,
}

impl<'a> Engine<'a> {
    /// Create an engine over the given adapter.
    pub fn new(model: &'a dyn ObjectModel) -> Self {
        Self { model }
    }

    /// The canonical search order for a target.
    pub fn resolution_order(&self, target: Target) -> Vec<EntityId> {
        match target {
            Target::Entity(entity) => instance_order(self.model, entity),
            Target::Value(value) => value_order(self.model, value),
            Target::EntityAsValue(entity) => entity_as_value_order(self.model, entity),
        }
    }

    /// Resolve a textual method reference against a running context.
    ///
    /// Parse failures, evaluator failures, and missing names all collapse
    /// to `None` here; probing incomplete input is a normal usage pattern.
    pub fn resolve_reference(
        &self,
        text: &str,
        ctx: &ExecutionContext,
        opts: &ResolveOptions,
    ) -> Option<MethodHandle> {
        match resolve_reference(self.model, text, ctx, opts) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::debug!("[RESOLVE] '{}' failed: {}", text, err);
                None
            }
        }
    }

    /// Recover the originating method from a captured execution context.
    pub fn method_from_context(
        &self,
        ctx: &ExecutionContext,
        opts: &MatchOptions,
    ) -> Option<MethodHandle> {
        method_from_context(self.model, ctx, opts)
    }

    /// The unbound instance method `name` reachable from `entity`.
    pub fn instance_method(&self, entity: EntityId, name: &str) -> Option<MethodHandle> {
        let order = instance_order(self.model, entity);
        let (owner, method) = first_definition(self.model, &order, name)?;
        Some(MethodHandle::unbound(self.model, entity, owner, name, method))
    }

    /// The method `name` bound to `value`, searched through its full order.
    pub fn bound_method(&self, value: ValueId, name: &str) -> Option<MethodHandle> {
        let order = value_order(self.model, value);
        let (owner, method) = first_definition(self.model, &order, name)?;
        Some(MethodHandle::bound(self.model, owner, name, method, value))
    }
}
