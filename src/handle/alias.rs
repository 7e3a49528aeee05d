//! Alias derivation.
//!
//! Alias sets are derived, never stored: two names on one owner alias each
//! other iff their currently bound implementations are identical. The
//! grouping key is the callable identity, never the name string, so it
//! works for primitive implementations too.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{CallableId, EntityId};
use crate::model::ObjectModel;

/// Every name directly defined on `owner` sharing `callable`, in definition
/// order, excluding `queried_name`.
pub fn aliases_of(
    model: &dyn ObjectModel,
    owner: EntityId,
    callable: CallableId,
    queried_name: &str,
) -> Vec<SmolStr> {
    let mut groups: FxHashMap<CallableId, Vec<SmolStr>> = FxHashMap::default();
    for name in model.directly_defined_method_names(owner) {
        if let Some(method) = model.directly_defined_method(owner, &name) {
            groups
                .entry(model.callable_identity(method))
                .or_default()
                .push(name);
        }
    }
    groups
        .remove(&callable)
        .map(|names| names.into_iter().filter(|n| n != queried_name).collect())
        .unwrap_or_default()
}
