//! The injected reflection surface.

use smol_str::SmolStr;

use crate::base::{CallableId, EntityId, MethodId, SourceLocation, ValueId};
use crate::errors::EvalError;
use crate::model::{ExecutionContext, Param};

/// Reflection primitives supplied by the embedding environment.
///
/// Every engine query is a pure, bounded read through this trait over the
/// object-model snapshot visible at call time. The engine holds no lock and
/// caches nothing across calls; single-writer/single-reader discipline
/// during one call is the host's responsibility.
///
/// ## Contract
///
/// - All `directly_defined_*` queries must use primitive introspection:
///   they must never dispatch through hooks the inspected entity could
///   override for itself, or context matching can self-interfere.
/// - [`directly_defined_method_names`](Self::directly_defined_method_names)
///   returns names in definition order, oldest first. The context matcher's
///   recency tie-break depends on this.
/// - [`callable_identity`](Self::callable_identity) is the identity of the
///   implementation behind a binding: aliased names share it, a redefined
///   name gets a fresh one. Primitive implementations carry identities too.
/// - Only [`construct`](Self::construct) and [`evaluate`](Self::evaluate)
///   may have side effects; those belong to the caller and must not be
///   suppressed or retried by the host.
pub trait ObjectModel {
    // ------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------

    /// The nominal class of a value.
    fn class_of(&self, value: ValueId) -> EntityId;

    /// The singleton scope of a value, if it carries one.
    fn singleton_scope_of(&self, value: ValueId) -> Option<EntityId>;

    /// The entity a value denotes, when the value *is* a class or module.
    fn entity_of_value(&self, value: ValueId) -> Option<EntityId>;

    /// The value denoting an entity, when the entity is reachable as a
    /// value in the host environment.
    fn value_of_entity(&self, entity: EntityId) -> Option<ValueId>;

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    /// The name of an entity; `None` for anonymous entities.
    fn entity_name(&self, entity: EntityId) -> Option<SmolStr>;

    /// The single superclass link, if any.
    fn superclass_of(&self, entity: EntityId) -> Option<EntityId>;

    /// Modules included into an entity, in inclusion order (oldest first).
    fn included_modules_of(&self, entity: EntityId) -> Vec<EntityId>;

    /// Modules extended onto an entity, in extension order (oldest first).
    /// These mix into the entity's singleton side, never into instance
    /// resolution.
    fn extended_modules_of(&self, entity: EntityId) -> Vec<EntityId>;

    /// The singleton scope of an entity itself, if it carries one.
    fn singleton_scope_of_entity(&self, entity: EntityId) -> Option<EntityId>;

    /// Resolve a top-level entity name.
    fn lookup_entity(&self, name: &str) -> Option<EntityId>;

    /// Resolve an entity nested inside another (`Outer::Inner`).
    fn nested_entity_of(&self, entity: EntityId, name: &str) -> Option<EntityId>;

    // ------------------------------------------------------------------
    // Method tables
    // ------------------------------------------------------------------

    /// The method bound to `name` directly on `entity` (owner equals the
    /// entity), ignoring ancestors.
    fn directly_defined_method(&self, entity: EntityId, name: &str) -> Option<MethodId>;

    /// Every name directly defined on `entity`, in definition order.
    fn directly_defined_method_names(&self, entity: EntityId) -> Vec<SmolStr>;

    /// The definition-site name of a method. Differs from the binding name
    /// when the binding is an alias.
    fn original_name_of(&self, method: MethodId) -> SmolStr;

    /// Ordered parameter descriptors.
    fn parameters_of(&self, method: MethodId) -> Vec<Param>;

    /// Where the method was defined; `None` for primitives without a
    /// recorded location.
    fn source_location_of(&self, method: MethodId) -> Option<SourceLocation>;

    /// Best-effort original source text.
    fn source_text_of(&self, method: MethodId) -> Option<String>;

    /// The identity of the implementation behind this binding.
    fn callable_identity(&self, method: MethodId) -> CallableId;

    // ------------------------------------------------------------------
    // Execution (side effects owned by the caller)
    // ------------------------------------------------------------------

    /// Zero-argument construction of an instance of `entity`.
    fn construct(&self, entity: EntityId) -> Result<ValueId, EvalError>;

    /// Evaluate an expression string in the lexical context of `ctx`.
    fn evaluate(&self, expression: &str, ctx: &ExecutionContext) -> Result<ValueId, EvalError>;
}
