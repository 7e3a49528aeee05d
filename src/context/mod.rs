//! Context matching.
//!
//! Recovers the originating method from a captured execution context: scan
//! the receiver's resolution order for a directly-defined method whose
//! source location equals the context's location exactly.
//!
//! Under alias-then-redefine patterns several directly-defined methods can
//! share one location. The tie-break policy here is deliberate: prefer a
//! name currently bound to that location (binding name equals the
//! definition-site name) over an orphaned alias, and among remaining ties
//! prefer the most recently defined. Matching uses only the primitive
//! adapter surface, so introspection hooks the receiving entity defines
//! for itself can never interfere.

use smol_str::SmolStr;

use crate::base::{EntityId, MethodId};
use crate::handle::MethodHandle;
use crate::model::{ExecutionContext, ObjectModel};
use crate::order::{instance_order, value_order};

/// Options for context matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Reject synthetic/default contexts (top-level and eval frames),
    /// descending to the parent context when one is linked.
    pub reject_default: bool,
}

/// Recover a method handle from a captured execution context.
pub fn method_from_context(
    model: &dyn ObjectModel,
    ctx: &ExecutionContext,
    opts: &MatchOptions,
) -> Option<MethodHandle> {
    if opts.reject_default && ctx.is_default() {
        return match &ctx.parent {
            Some(parent) => method_from_context(model, parent, opts),
            None => {
                tracing::debug!("[MATCH] rejecting default context at {}", ctx.location);
                None
            }
        };
    }

    let order = value_order(model, ctx.receiver);
    if let Some((owner, name, method)) = scan_order(model, &order, ctx) {
        return Some(MethodHandle::bound(
            model,
            owner,
            name,
            method,
            ctx.receiver,
        ));
    }

    // The receiver scan can miss when the frame runs inside a lexical owner
    // the receiver does not inherit from (module methods, refinement-like
    // setups); fall back to the hint's instance order.
    let owner_hint = ctx.lexical_owner?;
    let order = instance_order(model, owner_hint);
    let (owner, name, method) = scan_order(model, &order, ctx)?;
    Some(MethodHandle::unbound(model, owner_hint, owner, name, method))
}

/// Scan an order for directly-defined methods at the context's location.
/// The first entity with any candidate wins; within one entity candidates
/// are ranked by (binding name is the definition-site name, definition
/// recency), max wins.
fn scan_order(
    model: &dyn ObjectModel,
    order: &[EntityId],
    ctx: &ExecutionContext,
) -> Option<(EntityId, SmolStr, MethodId)> {
    for &entity in order {
        let mut best: Option<(bool, usize, SmolStr, MethodId)> = None;
        for (index, name) in model
            .directly_defined_method_names(entity)
            .into_iter()
            .enumerate()
        {
            let Some(method) = model.directly_defined_method(entity, &name) else {
                continue;
            };
            if model.source_location_of(method).as_ref() != Some(&ctx.location) {
                continue;
            }
            let live = model.original_name_of(method) == name;
            if best
                .as_ref()
                .is_none_or(|(b_live, b_index, ..)| (live, index) > (*b_live, *b_index))
            {
                best = Some((live, index, name, method));
            }
        }
        if let Some((_, _, name, method)) = best {
            return Some((entity, name, method));
        }
    }
    None
}
