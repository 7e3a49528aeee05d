//! Method handles.
//!
//! A [`MethodHandle`] is the engine's answer to every successful query: a
//! value type naming one binding in one method table, bound to a receiver
//! or unbound, with its parameter list and source location snapshotted at
//! construction time. The handle's richer operations (`super_method`,
//! `aliases`, `source`) read the current object-model snapshot when called.

mod alias;

pub use alias::aliases_of;

use smol_str::SmolStr;

use crate::base::{CallableId, EntityId, MethodId, SourceLocation, ValueId};
use crate::model::{ObjectModel, Param};
use crate::order::{first_definition, instance_order, value_order};

/// A resolved method: owner, binding name, and optionally a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodHandle {
    owner: EntityId,
    // The entity whose resolution order the lookup started from. An owner
    // found partway down an order (a mixin, a superclass) remembers the
    // root so the super chain keeps walking the original order, not the
    // owner's own.
    root: EntityId,
    name: SmolStr,
    method: MethodId,
    callable: CallableId,
    params: Vec<Param>,
    location: Option<SourceLocation>,
    receiver: Option<ValueId>,
}

impl MethodHandle {
    /// Build an unbound handle for `name` directly defined on `owner`,
    /// found by searching `root`'s instance order.
    pub fn unbound(
        model: &dyn ObjectModel,
        root: EntityId,
        owner: EntityId,
        name: impl Into<SmolStr>,
        method: MethodId,
    ) -> Self {
        Self::build(model, root, owner, name.into(), method, None)
    }

    /// Build a handle bound to `receiver`.
    pub fn bound(
        model: &dyn ObjectModel,
        owner: EntityId,
        name: impl Into<SmolStr>,
        method: MethodId,
        receiver: ValueId,
    ) -> Self {
        Self::build(model, owner, owner, name.into(), method, Some(receiver))
    }

    fn build(
        model: &dyn ObjectModel,
        root: EntityId,
        owner: EntityId,
        name: SmolStr,
        method: MethodId,
        receiver: Option<ValueId>,
    ) -> Self {
        Self {
            owner,
            root,
            callable: model.callable_identity(method),
            params: model.parameters_of(method),
            location: model.source_location_of(method),
            name,
            method,
            receiver,
        }
    }

    /// The binding name this handle was resolved through.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaring entity.
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// The method-table entry.
    pub fn method(&self) -> MethodId {
        self.method
    }

    /// The identity of the implementation behind this binding.
    pub fn callable_identity(&self) -> CallableId {
        self.callable
    }

    /// Ordered parameter descriptors.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Where the method was defined, if known.
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    /// The receiver, present only for bound handles.
    pub fn receiver(&self) -> Option<ValueId> {
        self.receiver
    }

    /// Whether this handle is bound to a receiver.
    pub fn is_bound(&self) -> bool {
        self.receiver.is_some()
    }

    /// Canonical signature text: `name(` + comma-joined parameter
    /// renderings in declaration order + `)`.
    pub fn signature(&self) -> String {
        let rendered: Vec<String> = self.params.iter().map(Param::render).collect();
        format!("{}({})", self.name, rendered.join(", "))
    }

    /// The binding name qualified by its owner, `Duck#quack` style.
    /// Anonymous owners (singleton scopes) fall back to the owner id.
    pub fn name_with_owner(&self, model: &dyn ObjectModel) -> String {
        match model.entity_name(self.owner) {
            Some(owner) => format!("{}#{}", owner, self.name),
            None => format!("{}#{}", self.owner, self.name),
        }
    }

    /// Best-effort original source text, `"unknown"` if unavailable.
    pub fn source(&self, model: &dyn ObjectModel) -> String {
        model
            .source_text_of(self.method)
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// The next implementation of this name up the relevant search path.
    ///
    /// Walks the receiver's full order when bound, the search root's
    /// instance order when unbound, strictly past the owner's position; the
    /// first entity with a directly-defined same-named method wins. The
    /// owner is never revisited (orders are duplicate-free), so repeated
    /// calls strictly advance and terminate.
    pub fn super_method(&self, model: &dyn ObjectModel) -> Option<MethodHandle> {
        let order = match self.receiver {
            Some(receiver) => value_order(model, receiver),
            None => instance_order(model, self.root),
        };
        let position = order.iter().position(|&e| e == self.owner)?;
        let (owner, method) = first_definition(model, &order[position + 1..], &self.name)?;
        Some(Self::build(
            model,
            self.root,
            owner,
            self.name.clone(),
            method,
            self.receiver,
        ))
    }

    /// Other names on the owner bound to this handle's implementation,
    /// excluding this handle's own name. Empty for a uniquely-implemented
    /// name.
    pub fn aliases(&self, model: &dyn ObjectModel) -> Vec<SmolStr> {
        aliases_of(model, self.owner, self.callable, &self.name)
    }
}
