//! Ancestry linearization.
//!
//! Computes the linear, duplicate-free sequence of entities searched when a
//! method is looked up by name:
//!
//! - [`instance_order`] — the search path for instances of an entity
//! - [`value_order`] — a value's path: its singleton scope (position 0,
//!   when present) in front of its nominal class's instance order
//! - [`entity_as_value_order`] — an entity treated as a value: singleton
//!   scope, then extended modules, then the entity's instance order
//!
//! All three are pure functions of the current snapshot; nothing is cached
//! across calls. First occurrence wins: an entity already reachable is
//! dropped entirely on re-occurrence, never reordered, so each entity
//! appears exactly once, closest to its first reachable point.

use indexmap::IndexSet;

use crate::base::{EntityId, MethodId, ValueId};
use crate::model::ObjectModel;

/// Expansion deeper than this means the visited guard failed to terminate
/// the walk, which is unreachable for a well-formed graph. Panic instead of
/// looping.
const MAX_EXPANSION_DEPTH: usize = 10_000;

/// The search path for instances of `entity`.
///
/// `[entity]`, then its included modules in reverse inclusion order (a
/// module included later shadows one included earlier), each expanded
/// recursively, then the superclass's order. Extended modules never appear
/// here.
pub fn instance_order(model: &dyn ObjectModel, entity: EntityId) -> Vec<EntityId> {
    let mut seen = IndexSet::new();
    expand(model, entity, &mut seen, 0);
    seen.into_iter().collect()
}

/// The full search path for a value.
///
/// If the value carries a singleton scope, that scope is position 0 and its
/// expansion precedes the nominal class's instance order.
pub fn value_order(model: &dyn ObjectModel, value: ValueId) -> Vec<EntityId> {
    let mut seen = IndexSet::new();
    if let Some(scope) = model.singleton_scope_of(value) {
        expand(model, scope, &mut seen, 0);
    }
    expand(model, model.class_of(value), &mut seen, 0);
    seen.into_iter().collect()
}

/// The search path for an entity treated as a value (its own singleton
/// methods).
///
/// Singleton scope first (position 0, when present), then extended modules
/// in reverse extension order, then the entity's instance order. This is
/// the only order extended modules appear in.
pub fn entity_as_value_order(model: &dyn ObjectModel, entity: EntityId) -> Vec<EntityId> {
    let mut seen = IndexSet::new();
    if let Some(scope) = model.singleton_scope_of_entity(entity) {
        expand(model, scope, &mut seen, 0);
    }
    for module in model.extended_modules_of(entity).iter().rev() {
        expand(model, *module, &mut seen, 0);
    }
    expand(model, entity, &mut seen, 0);
    seen.into_iter().collect()
}

/// Pre-order expansion of one entity into the accumulator.
///
/// The entity is inserted *before* its modules and superclass are expanded,
/// so any cycle in the graph hits the visited set and terminates; an
/// already-seen entity is skipped together with its whole expansion (it was
/// fully expanded at first emission, against the same snapshot).
fn expand(model: &dyn ObjectModel, entity: EntityId, seen: &mut IndexSet<EntityId>, depth: usize) {
    assert!(
        depth < MAX_EXPANSION_DEPTH,
        "ancestry cycle escaped the visited guard at {entity}"
    );
    if !seen.insert(entity) {
        return;
    }
    tracing::trace!("[ORDER] expanding {entity} at depth {depth}");
    for module in model.included_modules_of(entity).iter().rev() {
        expand(model, *module, seen, depth + 1);
    }
    if let Some(superclass) = model.superclass_of(entity) {
        expand(model, superclass, seen, depth + 1);
    }
}

/// Scan an order for the first entity with a directly-defined `name`.
pub fn first_definition(
    model: &dyn ObjectModel,
    order: &[EntityId],
    name: &str,
) -> Option<(EntityId, MethodId)> {
    order
        .iter()
        .find_map(|&e| model.directly_defined_method(e, name).map(|m| (e, m)))
}
