//! Reference resolution.
//!
//! Evaluates a parsed reference against the running environment. The whole
//! left side is resolved to a subject first, then the trailing step picks
//! the method:
//!
//! - a left side that is a pure entity path (leading entity name, `::`
//!   nested entities, optionally one trailing `.new`) is resolved
//!   structurally, without the evaluator;
//! - any other left side is re-joined to text and handed to the external
//!   evaluator as one expression.
//!
//! The structural/textual choice is made before any side effect, so `new`
//! construction runs exactly once on either path. Every failure collapses
//! to [`LookupError`]; resolution is safe to call speculatively on partial
//! input.

use crate::base::{EntityId, ValueId};
use crate::errors::LookupError;
use crate::handle::MethodHandle;
use crate::model::{ExecutionContext, ObjectModel};
use crate::order::{entity_as_value_order, first_definition, instance_order, value_order};
use crate::reference::parser::{RefNode, Separator, parse_reference};

/// Options for reference resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Ascend the super chain this many times after resolving.
    pub super_levels: u32,
}

/// What the left side of a reference resolved to.
#[derive(Debug, Clone, Copy)]
enum Subject {
    Entity(EntityId),
    Value(ValueId),
}

/// How the left side will be resolved. Decided purely syntactically (plus
/// side-effect-free entity-name tests) before anything runs.
enum LhsPlan {
    /// A pure entity path, optionally ending in one construction.
    Structural { entity: EntityId, construct: bool },
    /// Everything else: evaluate the re-joined text as one expression.
    Textual(String),
}

/// Resolve a reference expression to a method handle.
pub fn resolve_reference(
    model: &dyn ObjectModel,
    text: &str,
    ctx: &ExecutionContext,
    opts: &ResolveOptions,
) -> Result<MethodHandle, LookupError> {
    let nodes = parse_reference(text)?;

    let mut handle = match nodes.split_last() {
        Some((RefNode::Step { sep: Separator::Lead, name }, [])) => resolve_bare(model, name, ctx),
        Some((last, lhs)) => {
            let subject = resolve_lhs(model, lhs, ctx)?;
            apply_final(model, subject, last)
        }
        None => Err(LookupError::NotFound),
    }?;

    for _ in 0..opts.super_levels {
        handle = handle.super_method(model).ok_or(LookupError::NotFound)?;
    }
    Ok(handle)
}

/// Bare name, no separators: prefer an unbound instance method (seeded from
/// the lexical owner hint, else the receiver's class) over a same-named
/// bound method on the receiver.
fn resolve_bare(
    model: &dyn ObjectModel,
    name: &str,
    ctx: &ExecutionContext,
) -> Result<MethodHandle, LookupError> {
    let seed = ctx
        .lexical_owner
        .unwrap_or_else(|| model.class_of(ctx.receiver));
    if let Some((owner, method)) = first_definition(model, &instance_order(model, seed), name) {
        return Ok(MethodHandle::unbound(model, seed, owner, name, method));
    }
    if let Some((owner, method)) = first_definition(model, &value_order(model, ctx.receiver), name)
    {
        return Ok(MethodHandle::bound(model, owner, name, method, ctx.receiver));
    }
    tracing::debug!("[RESOLVE] bare name '{}' not found", name);
    Err(LookupError::NotFound)
}

fn resolve_lhs(
    model: &dyn ObjectModel,
    lhs: &[RefNode],
    ctx: &ExecutionContext,
) -> Result<Subject, LookupError> {
    match classify_lhs(model, lhs) {
        LhsPlan::Structural { entity, construct } => {
            if construct {
                Ok(Subject::Value(model.construct(entity)?))
            } else {
                Ok(Subject::Entity(entity))
            }
        }
        LhsPlan::Textual(expression) => {
            let value = model.evaluate(&expression, ctx)?;
            // A value that denotes a class or module continues in entity mode.
            Ok(match model.entity_of_value(value) {
                Some(entity) => Subject::Entity(entity),
                None => Subject::Value(value),
            })
        }
    }
}

fn classify_lhs(model: &dyn ObjectModel, lhs: &[RefNode]) -> LhsPlan {
    let textual = || LhsPlan::Textual(rejoin(lhs));

    let mut entity = match lhs.first() {
        Some(RefNode::Step { sep: Separator::Lead, name }) => match model.lookup_entity(name) {
            Some(e) => e,
            None => return textual(),
        },
        _ => return textual(),
    };

    for (index, node) in lhs.iter().enumerate().skip(1) {
        match node {
            RefNode::Step { sep: Separator::ColonColon, name } => {
                match model.nested_entity_of(entity, name) {
                    Some(nested) => entity = nested,
                    None => return textual(),
                }
            }
            RefNode::Construct if index == lhs.len() - 1 => {
                return LhsPlan::Structural {
                    entity,
                    construct: true,
                };
            }
            _ => return textual(),
        }
    }

    LhsPlan::Structural {
        entity,
        construct: false,
    }
}

/// Re-join parse nodes into the expression text the evaluator sees.
fn rejoin(nodes: &[RefNode]) -> String {
    let mut text = String::new();
    for node in nodes {
        match node {
            RefNode::Step { sep, name } => {
                match sep {
                    Separator::Lead => {}
                    Separator::Dot => text.push('.'),
                    Separator::Hash => text.push('#'),
                    Separator::ColonColon => text.push_str("::"),
                }
                text.push_str(name);
            }
            RefNode::Construct => text.push_str(".new"),
            RefNode::Index => text.push_str("[]"),
        }
    }
    text
}

fn apply_final(
    model: &dyn ObjectModel,
    subject: Subject,
    node: &RefNode,
) -> Result<MethodHandle, LookupError> {
    match node {
        // `#` and `::` both force unbound instance lookup; a value subject
        // is searched through its nominal class.
        RefNode::Step {
            sep: Separator::Hash | Separator::ColonColon,
            name,
        } => {
            let entity = match subject {
                Subject::Entity(e) => e,
                Subject::Value(v) => model.class_of(v),
            };
            let order = instance_order(model, entity);
            let (owner, method) = first_definition(model, &order, name).ok_or_else(|| {
                tracing::debug!("[RESOLVE] no instance method '{}' on {}", name, entity);
                LookupError::NotFound
            })?;
            Ok(MethodHandle::unbound(model, entity, owner, name.clone(), method))
        }
        RefNode::Step {
            sep: Separator::Dot,
            name,
        } => lookup_on_subject(model, subject, name),
        RefNode::Index => lookup_on_subject(model, subject, "[]"),
        // The parser keeps a final `.new` as a named step and rejects a
        // non-final Index, so these are unreachable through parse output.
        RefNode::Step {
            sep: Separator::Lead,
            ..
        }
        | RefNode::Construct => Err(LookupError::NotFound),
    }
}

/// `.name` lookup on whatever the left side resolved to: an entity searches
/// its own singleton side first; a plain value searches its full order.
fn lookup_on_subject(
    model: &dyn ObjectModel,
    subject: Subject,
    name: &str,
) -> Result<MethodHandle, LookupError> {
    match subject {
        Subject::Entity(entity) => {
            let order = entity_as_value_order(model, entity);
            let (owner, method) =
                first_definition(model, &order, name).ok_or(LookupError::NotFound)?;
            Ok(match model.value_of_entity(entity) {
                Some(receiver) => MethodHandle::bound(model, owner, name, method, receiver),
                None => MethodHandle::unbound(model, entity, owner, name, method),
            })
        }
        Subject::Value(value) => {
            let order = value_order(model, value);
            let (owner, method) =
                first_definition(model, &order, name).ok_or(LookupError::NotFound)?;
            Ok(MethodHandle::bound(model, owner, name, method, value))
        }
    }
}
