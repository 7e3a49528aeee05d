//! Shared test fixture: an in-memory object model.
//!
//! `MockModel` implements [`ObjectModel`] over a small mutable graph with
//! builder methods for classes, modules, inclusion/extension, singleton
//! scopes, method definitions, aliases, and redefinitions. Mutation happens
//! in the build phase (`&mut self`); queries run against the resulting
//! snapshot, matching the engine's single-writer/single-reader contract.

#![allow(dead_code)]

use std::cell::RefCell;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use reflex::errors::EvalError;
use reflex::model::{ExecutionContext, ObjectModel, Param};
use reflex::{CallableId, EntityId, MethodId, SourceLocation, ValueId};

#[derive(Default)]
struct EntityData {
    name: Option<SmolStr>,
    superclass: Option<EntityId>,
    includes: Vec<EntityId>,
    extends: Vec<EntityId>,
    singleton: Option<EntityId>,
    nested: IndexMap<SmolStr, EntityId>,
    // binding name -> method, in definition order (redefinition moves a
    // name to the end)
    methods: IndexMap<SmolStr, MethodId>,
}

struct MethodData {
    original_name: SmolStr,
    callable: CallableId,
    params: Vec<Param>,
    location: Option<SourceLocation>,
    source: Option<String>,
}

struct ValueData {
    class: EntityId,
    singleton: Option<EntityId>,
    entity: Option<EntityId>,
}

#[derive(Default)]
pub struct MockModel {
    entities: Vec<EntityData>,
    methods: Vec<MethodData>,
    values: Vec<ValueData>,
    roots: IndexMap<SmolStr, EntityId>,
    entity_values: FxHashMap<EntityId, ValueId>,
    eval_results: FxHashMap<String, ValueId>,
    construct_results: FxHashMap<EntityId, ValueId>,
    constructions: RefCell<Vec<EntityId>>,
    next_callable: u64,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Graph building
    // ------------------------------------------------------------------

    fn add_entity(&mut self, name: Option<SmolStr>) -> EntityId {
        let id = EntityId::new(self.entities.len() as u32);
        self.entities.push(EntityData {
            name,
            ..EntityData::default()
        });
        id
    }

    /// A named top-level class (or module; the graph does not distinguish).
    pub fn class(&mut self, name: &str) -> EntityId {
        let id = self.add_entity(Some(SmolStr::new(name)));
        self.roots.insert(SmolStr::new(name), id);
        id
    }

    /// A named top-level module.
    pub fn module(&mut self, name: &str) -> EntityId {
        self.class(name)
    }

    /// An anonymous entity (not reachable by name).
    pub fn anonymous(&mut self) -> EntityId {
        self.add_entity(None)
    }

    /// A named entity nested inside `outer`.
    pub fn nested(&mut self, outer: EntityId, name: &str) -> EntityId {
        let id = self.add_entity(Some(SmolStr::new(name)));
        self.entities[outer.raw() as usize]
            .nested
            .insert(SmolStr::new(name), id);
        id
    }

    pub fn set_superclass(&mut self, entity: EntityId, superclass: EntityId) {
        self.entities[entity.raw() as usize].superclass = Some(superclass);
    }

    pub fn include(&mut self, entity: EntityId, module: EntityId) {
        self.entities[entity.raw() as usize].includes.push(module);
    }

    pub fn extend(&mut self, entity: EntityId, module: EntityId) {
        self.entities[entity.raw() as usize].extends.push(module);
    }

    /// The singleton scope of an entity, created on first use.
    pub fn singleton_of_entity(&mut self, entity: EntityId) -> EntityId {
        if let Some(scope) = self.entities[entity.raw() as usize].singleton {
            return scope;
        }
        let scope = self.anonymous();
        self.entities[entity.raw() as usize].singleton = Some(scope);
        scope
    }

    /// A fresh value of the given class.
    pub fn value(&mut self, class: EntityId) -> ValueId {
        let id = ValueId::new(self.values.len() as u64);
        self.values.push(ValueData {
            class,
            singleton: None,
            entity: None,
        });
        id
    }

    /// The singleton scope of a value, created on first use.
    pub fn singleton_of_value(&mut self, value: ValueId) -> EntityId {
        if let Some(scope) = self.values[value.raw() as usize].singleton {
            return scope;
        }
        let scope = self.anonymous();
        self.values[value.raw() as usize].singleton = Some(scope);
        scope
    }

    /// The value denoting an entity (classes are values too).
    pub fn entity_value(&mut self, entity: EntityId) -> ValueId {
        if let Some(&v) = self.entity_values.get(&entity) {
            return v;
        }
        let id = ValueId::new(self.values.len() as u64);
        self.values.push(ValueData {
            class: entity,
            singleton: None,
            entity: Some(entity),
        });
        self.entity_values.insert(entity, id);
        id
    }

    // ------------------------------------------------------------------
    // Method tables
    // ------------------------------------------------------------------

    /// Define (or redefine) a method. A fresh callable identity is minted;
    /// redefinition moves the name to the end of the definition order.
    pub fn define(
        &mut self,
        owner: EntityId,
        name: &str,
        params: Vec<Param>,
        location: Option<SourceLocation>,
    ) -> MethodId {
        self.next_callable += 1;
        let callable = CallableId::new(self.next_callable);
        let method = MethodId::new(self.methods.len() as u64);
        self.methods.push(MethodData {
            original_name: SmolStr::new(name),
            callable,
            params,
            location,
            source: None,
        });
        let table = &mut self.entities[owner.raw() as usize].methods;
        table.shift_remove(name);
        table.insert(SmolStr::new(name), method);
        method
    }

    /// Bind `alias` on `owner` to the implementation currently bound to
    /// `existing`. The alias keeps the original definition-site name.
    pub fn define_alias(&mut self, owner: EntityId, alias: &str, existing: &str) -> MethodId {
        let &source_method = self.entities[owner.raw() as usize]
            .methods
            .get(existing)
            .expect("alias target must be defined first");
        let data = &self.methods[source_method.raw() as usize];
        let copied = MethodData {
            original_name: data.original_name.clone(),
            callable: data.callable,
            params: data.params.clone(),
            location: data.location.clone(),
            source: data.source.clone(),
        };
        let method = MethodId::new(self.methods.len() as u64);
        self.methods.push(copied);
        let table = &mut self.entities[owner.raw() as usize].methods;
        table.shift_remove(alias);
        table.insert(SmolStr::new(alias), method);
        method
    }

    pub fn set_source(&mut self, method: MethodId, text: &str) {
        self.methods[method.raw() as usize].source = Some(text.to_string());
    }

    // ------------------------------------------------------------------
    // Evaluator / constructor stubs
    // ------------------------------------------------------------------

    pub fn stub_eval(&mut self, expression: &str, result: ValueId) {
        self.eval_results.insert(expression.to_string(), result);
    }

    pub fn stub_construct(&mut self, entity: EntityId, instance: ValueId) {
        self.construct_results.insert(entity, instance);
    }

    /// Every construction performed so far, in order.
    pub fn constructions(&self) -> Vec<EntityId> {
        self.constructions.borrow().clone()
    }
}

impl ObjectModel for MockModel {
    fn class_of(&self, value: ValueId) -> EntityId {
        self.values[value.raw() as usize].class
    }

    fn singleton_scope_of(&self, value: ValueId) -> Option<EntityId> {
        self.values[value.raw() as usize].singleton
    }

    fn entity_of_value(&self, value: ValueId) -> Option<EntityId> {
        self.values[value.raw() as usize].entity
    }

    fn value_of_entity(&self, entity: EntityId) -> Option<ValueId> {
        self.entity_values.get(&entity).copied()
    }

    fn entity_name(&self, entity: EntityId) -> Option<SmolStr> {
        self.entities[entity.raw() as usize].name.clone()
    }

    fn superclass_of(&self, entity: EntityId) -> Option<EntityId> {
        self.entities[entity.raw() as usize].superclass
    }

    fn included_modules_of(&self, entity: EntityId) -> Vec<EntityId> {
        self.entities[entity.raw() as usize].includes.clone()
    }

    fn extended_modules_of(&self, entity: EntityId) -> Vec<EntityId> {
        self.entities[entity.raw() as usize].extends.clone()
    }

    fn singleton_scope_of_entity(&self, entity: EntityId) -> Option<EntityId> {
        self.entities[entity.raw() as usize].singleton
    }

    fn lookup_entity(&self, name: &str) -> Option<EntityId> {
        self.roots.get(name).copied()
    }

    fn nested_entity_of(&self, entity: EntityId, name: &str) -> Option<EntityId> {
        self.entities[entity.raw() as usize].nested.get(name).copied()
    }

    fn directly_defined_method(&self, entity: EntityId, name: &str) -> Option<MethodId> {
        self.entities[entity.raw() as usize].methods.get(name).copied()
    }

    fn directly_defined_method_names(&self, entity: EntityId) -> Vec<SmolStr> {
        self.entities[entity.raw() as usize]
            .methods
            .keys()
            .cloned()
            .collect()
    }

    fn original_name_of(&self, method: MethodId) -> SmolStr {
        self.methods[method.raw() as usize].original_name.clone()
    }

    fn parameters_of(&self, method: MethodId) -> Vec<Param> {
        self.methods[method.raw() as usize].params.clone()
    }

    fn source_location_of(&self, method: MethodId) -> Option<SourceLocation> {
        self.methods[method.raw() as usize].location.clone()
    }

    fn source_text_of(&self, method: MethodId) -> Option<String> {
        self.methods[method.raw() as usize].source.clone()
    }

    fn callable_identity(&self, method: MethodId) -> CallableId {
        self.methods[method.raw() as usize].callable
    }

    fn construct(&self, entity: EntityId) -> Result<ValueId, EvalError> {
        self.constructions.borrow_mut().push(entity);
        self.construct_results
            .get(&entity)
            .copied()
            .ok_or_else(|| EvalError::new("no constructor stub"))
    }

    fn evaluate(&self, expression: &str, _ctx: &ExecutionContext) -> Result<ValueId, EvalError> {
        self.eval_results
            .get(expression)
            .copied()
            .ok_or_else(|| EvalError::new(format!("cannot evaluate `{expression}`")))
    }
}

/// A method definition with no parameters at a throwaway location.
pub fn simple_def(model: &mut MockModel, owner: EntityId, name: &str) -> MethodId {
    model.define(owner, name, Vec::new(), None)
}

/// Shorthand for a location in the default fixture file.
pub fn loc(line: u32) -> SourceLocation {
    SourceLocation::new("fixture.rb", line)
}
