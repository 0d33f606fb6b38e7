//! The entity/component registry.
//!
//! [`EntityManager`] is the single composed object of this crate. It owns the
//! live entity set, the per-type component tables, the parent→child ownership
//! map, tag bindings, live filters, the processor schedule, and both observer
//! lists, and keeps every derived index consistent under arbitrary
//! interleavings of creation, mutation, and removal — including removal
//! during iteration of the very filter being iterated.
//!
//! All operations are synchronous and single-threaded; notifications fire
//! in-line before the mutating call returns.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, trace};

use ecs_component::{ComponentFactory, Entity, EntityAllocator};

use crate::error::EcsError;
use crate::filter::{EntityFilter, FilterId};
use crate::observer::{
    ComponentObserver, ComponentObserverEntry, ComponentObserverId, EntityObserver,
    EntityObserverEntry, EntityObserverId,
};
use crate::processor::{Processor, ProcessorEntry, ProcessorId};

/// The registry managing entities, components, filters, processors, and
/// observers.
pub struct EntityManager {
    /// Entity ID allocator; also the authority on which IDs were ever issued.
    allocator: EntityAllocator,
    /// Currently live entities.
    entities: HashSet<Entity>,
    /// Parent entity → entities owned by it. Removing the parent removes all
    /// of its descendants first.
    child_entities: HashMap<Entity, Vec<Entity>>,
    /// Registered component types, by name.
    components: HashMap<String, ComponentFactory>,
    /// Component name → per-entity instance data.
    component_tables: HashMap<String, HashMap<Entity, Value>>,
    /// Live filters, in creation order.
    filters: Vec<EntityFilter>,
    next_filter_id: u64,
    /// Scheduled processors, in registration order.
    processors: Vec<ProcessorEntry>,
    next_processor_id: u64,
    entity_observers: Vec<EntityObserverEntry>,
    next_entity_observer_id: u64,
    component_observers: Vec<ComponentObserverEntry>,
    next_component_observer_id: u64,
    /// Tag → the single entity it names.
    tags: HashMap<String, Entity>,
    /// Number of completed update ticks.
    ticks: u64,
}

impl EntityManager {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            entities: HashSet::new(),
            child_entities: HashMap::new(),
            components: HashMap::new(),
            component_tables: HashMap::new(),
            filters: Vec::new(),
            next_filter_id: 0,
            processors: Vec::new(),
            next_processor_id: 0,
            entity_observers: Vec::new(),
            next_entity_observer_id: 0,
            component_observers: Vec::new(),
            next_component_observer_id: 0,
            tags: HashMap::new(),
            ticks: 0,
        }
    }

    // -- Component types --

    /// Register a component type whose instances are deep copies of
    /// `prototype`.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateComponentType`] if `name` is already
    /// registered; the registry is left unchanged.
    pub fn register_component(&mut self, name: &str, prototype: Value) -> Result<(), EcsError> {
        self.register_factory(name, ComponentFactory::Prototype(prototype))
    }

    /// Register a component type whose instances are produced by calling
    /// `constructor`.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateComponentType`] if `name` is already
    /// registered.
    pub fn register_component_with<F>(&mut self, name: &str, constructor: F) -> Result<(), EcsError>
    where
        F: Fn() -> Value + 'static,
    {
        self.register_factory(name, ComponentFactory::Constructor(Box::new(constructor)))
    }

    fn register_factory(&mut self, name: &str, factory: ComponentFactory) -> Result<(), EcsError> {
        if self.components.contains_key(name) {
            return Err(EcsError::DuplicateComponentType(name.to_string()));
        }

        self.components.insert(name.to_string(), factory);
        self.component_tables.insert(name.to_string(), HashMap::new());
        debug!(component = name, "registered component type");
        Ok(())
    }

    /// Unregister a component type, stripping its data from every entity.
    ///
    /// The name is dropped from every filter's requirement set; a filter left
    /// with no requirements has its entity list cleared (it can no longer
    /// match anything), the rest absorb entities that qualify under the
    /// shrunken set. Observers subscribed to the name hear a removal for
    /// every entity still holding data — while that data is still queryable —
    /// and have the name dropped from their subscription set. Only then do
    /// the type and its table go away.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponentType`] if `name` is not
    /// registered.
    pub fn unregister_component(&mut self, name: &str) -> Result<(), EcsError> {
        if !self.components.contains_key(name) {
            return Err(EcsError::UnknownComponentType(name.to_string()));
        }

        for index in 0..self.filters.len() {
            if !self.filters[index].drop_requirement(name) {
                continue;
            }

            if self.filters[index].component_names.is_empty() {
                self.filters[index].clear_entities();
                continue;
            }

            let names: Vec<String> = self.filters[index].component_names.clone();
            let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let matching = self.entities_with_components(&name_refs);
            let filter = &mut self.filters[index];
            for entity in matching {
                if !filter.contains(entity) {
                    filter.add_entity(entity);
                }
            }
        }

        let holders: Vec<Entity> = self
            .component_tables
            .get(name)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        for index in 0..self.component_observers.len() {
            if self.component_observers[index].component_names.contains(name) {
                if let Some(mut observer) = self.component_observers[index].observer.take() {
                    for &entity in &holders {
                        observer.component_removed(self, entity, name);
                    }
                    self.component_observers[index].observer = Some(observer);
                }
            }
            self.component_observers[index].component_names.remove(name);
        }

        self.components.remove(name);
        self.component_tables.remove(name);
        debug!(component = name, "unregistered component type");
        Ok(())
    }

    /// Returns `true` if a component type with this name is registered.
    #[must_use]
    pub fn is_registered_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    // -- Entities --

    /// Create a new entity with no components.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.entities.insert(entity);
        debug!(entity = entity.id(), "created entity");
        self.notify_entity_created(entity);
        entity
    }

    /// Create a new entity holding an instance of each named component type.
    ///
    /// Validation happens before the identifier is allocated, so a failed
    /// call leaves the registry unchanged. Entity observers are notified
    /// last and see the fully component-populated entity.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponentType`] if any name is not
    /// registered.
    pub fn create_entity_with(&mut self, component_names: &[&str]) -> Result<Entity, EcsError> {
        self.create_entity_inner(component_names, None)
    }

    /// Create a new entity owned by `parent`. When the parent is removed, so
    /// is this entity — all descendants are destroyed before their ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponentType`] for an unregistered name
    /// and [`EcsError::EntityNotAlive`] if `parent` is not live.
    pub fn create_child_entity(
        &mut self,
        component_names: &[&str],
        parent: Entity,
    ) -> Result<Entity, EcsError> {
        self.create_entity_inner(component_names, Some(parent))
    }

    fn create_entity_inner(
        &mut self,
        component_names: &[&str],
        parent: Option<Entity>,
    ) -> Result<Entity, EcsError> {
        for &name in component_names {
            if !self.components.contains_key(name) {
                return Err(EcsError::UnknownComponentType(name.to_string()));
            }
        }
        if let Some(parent) = parent {
            if !self.entities.contains(&parent) {
                return Err(EcsError::EntityNotAlive(parent));
            }
        }

        let entity = self.allocator.allocate();
        self.entities.insert(entity);
        debug!(entity = entity.id(), "created entity");

        for &name in component_names {
            self.add_component(entity, name)?;
        }
        if let Some(parent) = parent {
            self.child_entities.entry(parent).or_default().push(entity);
        }

        self.notify_entity_created(entity);
        Ok(entity)
    }

    /// Destroy an entity, its descendants, its tags, and its component data.
    /// No-op if the entity is not live.
    ///
    /// Descendants complete their own removal sequence — notifications
    /// included — before this entity's notifications fire. While removal
    /// notifications run, the entity is still live and its component data is
    /// still queryable; both are deleted afterwards.
    pub fn remove_entity(&mut self, entity: Entity) {
        if !self.entities.contains(&entity) {
            return;
        }

        if let Some(children) = self.child_entities.remove(&entity) {
            for child in children {
                self.remove_entity(child);
            }
        }

        for filter in &mut self.filters {
            filter.remove_entity(entity);
        }

        let held: Vec<String> = self
            .component_tables
            .iter()
            .filter(|(_, table)| table.contains_key(&entity))
            .map(|(name, _)| name.clone())
            .collect();
        for name in &held {
            self.notify_component_removed(entity, name);
        }
        self.notify_entity_removed(entity);

        self.tags.retain(|_, tagged| *tagged != entity);
        self.entities.remove(&entity);
        for name in &held {
            if let Some(table) = self.component_tables.get_mut(name) {
                table.remove(&entity);
            }
        }
        debug!(entity = entity.id(), "removed entity");
    }

    /// Returns `true` if the entity has been created and not yet destroyed.
    #[must_use]
    pub fn is_active_entity(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Returns `true` if the entity once existed and has been destroyed.
    /// `false` for live entities and for identifiers never issued.
    #[must_use]
    pub fn is_destroyed_entity(&self, entity: Entity) -> bool {
        !self.entities.contains(&entity) && self.allocator.issued(entity)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns the entities owned by `parent`, in creation order.
    #[must_use]
    pub fn children(&self, parent: Entity) -> &[Entity] {
        self.child_entities
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // -- Tags --

    /// Bind a tag to an entity. A tag names at most one entity; binding an
    /// already-used tag rebinds it.
    pub fn add_tag(&mut self, entity: Entity, tag: &str) {
        self.tags.insert(tag.to_string(), entity);
    }

    /// Delete a tag binding. No-op if the tag is not bound.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    /// Returns the entity a tag is bound to.
    #[must_use]
    pub fn entity_by_tag(&self, tag: &str) -> Option<Entity> {
        self.tags.get(tag).copied()
    }

    // -- Components --

    /// Attach a fresh instance of the named component type to an entity.
    ///
    /// Idempotent: if the entity already holds the component, the existing
    /// instance is kept untouched. Dead entities are ignored. On success the
    /// entity joins every filter it now satisfies, and subscribed observers
    /// are notified with the instance already queryable.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponentType`] if `component_name` is not
    /// registered.
    pub fn add_component(&mut self, entity: Entity, component_name: &str) -> Result<(), EcsError> {
        let Some(factory) = self.components.get(component_name) else {
            return Err(EcsError::UnknownComponentType(component_name.to_string()));
        };
        if !self.entities.contains(&entity) {
            trace!(
                entity = entity.id(),
                component = component_name,
                "add_component on dead entity ignored"
            );
            return Ok(());
        }
        if self
            .component_tables
            .get(component_name)
            .is_some_and(|table| table.contains_key(&entity))
        {
            return Ok(());
        }

        let instance = factory.instantiate();
        if let Some(table) = self.component_tables.get_mut(component_name) {
            table.insert(entity, instance);
        }

        for filter in &mut self.filters {
            if filter.component_names.is_empty() || filter.contains(entity) {
                continue;
            }
            let matches = filter.component_names.iter().all(|required| {
                self.component_tables
                    .get(required)
                    .is_some_and(|table| table.contains_key(&entity))
            });
            if matches {
                filter.add_entity(entity);
            }
        }

        trace!(entity = entity.id(), component = component_name, "added component");
        self.notify_component_added(entity, component_name);
        Ok(())
    }

    /// Attach instances of several component types, in order.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponentType`] at the first unregistered
    /// name; earlier names have already been added.
    pub fn add_components(
        &mut self,
        entity: Entity,
        component_names: &[&str],
    ) -> Result<(), EcsError> {
        for &name in component_names {
            self.add_component(entity, name)?;
        }
        Ok(())
    }

    /// Detach the named component from an entity.
    ///
    /// If the entity does not hold the component this is a complete no-op:
    /// no filter updates and no notifications. Otherwise the entity leaves
    /// every filter requiring the name, observers are notified while the
    /// data is still queryable, and the instance is deleted last.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponentType`] if `component_name` is not
    /// registered.
    pub fn remove_component(
        &mut self,
        entity: Entity,
        component_name: &str,
    ) -> Result<(), EcsError> {
        if !self.components.contains_key(component_name) {
            return Err(EcsError::UnknownComponentType(component_name.to_string()));
        }
        let held = self
            .component_tables
            .get(component_name)
            .is_some_and(|table| table.contains_key(&entity));
        if !held {
            return Ok(());
        }

        for filter in &mut self.filters {
            if filter.requires(component_name) {
                filter.remove_entity(entity);
            }
        }

        self.notify_component_removed(entity, component_name);

        if let Some(table) = self.component_tables.get_mut(component_name) {
            table.remove(&entity);
        }
        trace!(entity = entity.id(), component = component_name, "removed component");
        Ok(())
    }

    /// Returns the entity's instance of the named component type.
    #[must_use]
    pub fn get_component(&self, entity: Entity, component_name: &str) -> Option<&Value> {
        self.component_tables.get(component_name)?.get(&entity)
    }

    /// Returns the entity's instance of the named component type, for
    /// in-place mutation.
    pub fn get_component_mut(
        &mut self,
        entity: Entity,
        component_name: &str,
    ) -> Option<&mut Value> {
        self.component_tables.get_mut(component_name)?.get_mut(&entity)
    }

    /// Returns `true` if the entity holds an instance of the named type.
    #[must_use]
    pub fn has_component(&self, entity: Entity, component_name: &str) -> bool {
        self.component_tables
            .get(component_name)
            .is_some_and(|table| table.contains_key(&entity))
    }

    /// Returns every entity holding all of the named component types.
    ///
    /// Order is unspecified. Unknown names and an empty input produce an
    /// empty result.
    #[must_use]
    pub fn entities_with_components(&self, component_names: &[&str]) -> Vec<Entity> {
        let Some((&first, rest)) = component_names.split_first() else {
            return Vec::new();
        };
        let Some(table) = self.component_tables.get(first) else {
            return Vec::new();
        };

        table
            .keys()
            .copied()
            .filter(|entity| {
                rest.iter().all(|&name| {
                    self.component_tables
                        .get(name)
                        .is_some_and(|t| t.contains_key(entity))
                })
            })
            .collect()
    }

    /// Iterate over every (entity, instance) pair of the named component
    /// type, in unspecified order.
    pub fn component_entries(
        &self,
        component_name: &str,
    ) -> impl Iterator<Item = (Entity, &Value)> {
        self.component_tables
            .get(component_name)
            .into_iter()
            .flat_map(|table| table.iter().map(|(&entity, value)| (entity, value)))
    }

    // -- Filters --

    /// Create a live filter over entities holding every named component
    /// type. Initial membership is computed immediately; the filter is kept
    /// current through every subsequent mutation until removed.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponentType`] if any name is not
    /// registered.
    pub fn create_entity_filter(&mut self, component_names: &[&str]) -> Result<FilterId, EcsError> {
        for &name in component_names {
            if !self.components.contains_key(name) {
                return Err(EcsError::UnknownComponentType(name.to_string()));
            }
        }

        let id = FilterId(self.next_filter_id);
        self.next_filter_id += 1;

        let entities = self.entities_with_components(component_names);
        let names = component_names.iter().map(|&n| n.to_string()).collect();
        self.filters.push(EntityFilter::new(id, names, entities));
        debug!(filter = id.0, "created entity filter");
        Ok(id)
    }

    /// Deregister a filter; future mutations no longer touch it. No-op for
    /// an unknown handle.
    pub fn remove_entity_filter(&mut self, filter: FilterId) {
        self.filters.retain(|f| f.id != filter);
    }

    /// Start an iteration session over a filter and return its first member.
    ///
    /// Entities may be removed from the filter — including by the code
    /// driving this very iteration — without disturbing the visit order of
    /// the survivors.
    pub fn filter_first(&mut self, filter: FilterId) -> Option<Entity> {
        self.filters.iter_mut().find(|f| f.id == filter)?.first()
    }

    /// Return the next member of an iteration session, or `None` when the
    /// session is exhausted. Calling this without
    /// [`filter_first`](Self::filter_first) starts from the current cursor
    /// state rather than erroring.
    pub fn filter_next(&mut self, filter: FilterId) -> Option<Entity> {
        self.filters.iter_mut().find(|f| f.id == filter)?.next()
    }

    /// Returns a filter's current members, in insertion order. Empty for an
    /// unknown handle.
    #[must_use]
    pub fn filter_entities(&self, filter: FilterId) -> &[Entity] {
        self.filters
            .iter()
            .find(|f| f.id == filter)
            .map(|f| f.entities.as_slice())
            .unwrap_or(&[])
    }

    /// Returns a filter's current requirement set. Empty for an unknown
    /// handle.
    #[must_use]
    pub fn filter_component_names(&self, filter: FilterId) -> &[String] {
        self.filters
            .iter()
            .find(|f| f.id == filter)
            .map(|f| f.component_names.as_slice())
            .unwrap_or(&[])
    }

    // -- Processors & messages --

    /// Append a processor to the schedule and attach an empty emitted-message
    /// list to it.
    pub fn register_processor<P: Processor + 'static>(&mut self, processor: P) -> ProcessorId {
        let id = ProcessorId(self.next_processor_id);
        self.next_processor_id += 1;
        self.processors.push(ProcessorEntry {
            id,
            processor: Some(Box::new(processor)),
            emitted_messages: Vec::new(),
        });
        debug!(processor = id.0, "registered processor");
        id
    }

    /// Remove a processor from the schedule and destroy every entity still in
    /// its emitted-message list. Returns `false` for an unknown handle.
    ///
    /// A processor may unregister itself during its own update.
    pub fn unregister_processor(&mut self, processor: ProcessorId) -> bool {
        let Some(index) = self.processors.iter().position(|entry| entry.id == processor) else {
            return false;
        };

        let entry = self.processors.remove(index);
        for message in entry.emitted_messages {
            self.remove_entity(message);
        }
        debug!(processor = processor.0, "unregistered processor");
        true
    }

    /// Returns the number of scheduled processors.
    #[must_use]
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Run one tick: every processor, strictly in registration order.
    ///
    /// Immediately before each processor runs, the entities in its
    /// emitted-message list are destroyed and the list is cleared — a message
    /// is therefore visible to every processor running between its emission
    /// and the emitter's next turn, and gone by the time the emitter runs
    /// again. Processors registered during a tick first run on the next one.
    pub fn update(&mut self) {
        self.ticks += 1;
        let scheduled: Vec<ProcessorId> = self.processors.iter().map(|entry| entry.id).collect();
        trace!(tick = self.ticks, processors = scheduled.len(), "update tick");

        for id in scheduled {
            let (mut processor, expired) = {
                let Some(entry) = self.processors.iter_mut().find(|entry| entry.id == id) else {
                    // Unregistered earlier in this tick.
                    continue;
                };
                let Some(processor) = entry.processor.take() else {
                    continue;
                };
                (processor, std::mem::take(&mut entry.emitted_messages))
            };

            for message in expired {
                self.remove_entity(message);
            }

            processor.update(self);

            // The processor may have unregistered itself; only put it back
            // if its slot still exists.
            if let Some(entry) = self.processors.iter_mut().find(|entry| entry.id == id) {
                entry.processor = Some(processor);
            }
        }
    }

    /// Returns the number of completed update ticks.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Create a message: an ordinary entity that is additionally recorded in
    /// the emitting processor's message list, and destroyed immediately
    /// before that processor's next update.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownProcessor`] for an unregistered handle and
    /// [`EcsError::UnknownComponentType`] for an unregistered name; in both
    /// cases no entity is created.
    pub fn create_message(
        &mut self,
        emitter: ProcessorId,
        component_names: &[&str],
    ) -> Result<Entity, EcsError> {
        if !self.processors.iter().any(|entry| entry.id == emitter) {
            return Err(EcsError::UnknownProcessor);
        }

        let entity = self.create_entity_inner(component_names, None)?;
        if let Some(entry) = self.processors.iter_mut().find(|entry| entry.id == emitter) {
            entry.emitted_messages.push(entity);
        }
        trace!(entity = entity.id(), processor = emitter.0, "emitted message");
        Ok(entity)
    }

    /// Returns the entities a processor has emitted and not yet had
    /// destroyed. Empty for an unknown handle.
    #[must_use]
    pub fn emitted_messages(&self, processor: ProcessorId) -> &[Entity] {
        self.processors
            .iter()
            .find(|entry| entry.id == processor)
            .map(|entry| entry.emitted_messages.as_slice())
            .unwrap_or(&[])
    }

    // -- Observers --

    /// Register an observer notified of every created and removed entity.
    pub fn register_entity_observer<O: EntityObserver + 'static>(
        &mut self,
        observer: O,
    ) -> EntityObserverId {
        let id = EntityObserverId(self.next_entity_observer_id);
        self.next_entity_observer_id += 1;
        self.entity_observers.push(EntityObserverEntry {
            id,
            observer: Some(Box::new(observer)),
        });
        id
    }

    /// Remove an entity observer. Returns `false` for an unknown handle.
    pub fn unregister_entity_observer(&mut self, observer: EntityObserverId) -> bool {
        let before = self.entity_observers.len();
        self.entity_observers.retain(|entry| entry.id != observer);
        self.entity_observers.len() != before
    }

    /// Register an observer notified of added/removed components for the
    /// named types. The subscription set can be changed later through
    /// [`add_component_observer_component`](Self::add_component_observer_component)
    /// and
    /// [`remove_component_observer_component`](Self::remove_component_observer_component).
    pub fn register_component_observer<O: ComponentObserver + 'static>(
        &mut self,
        observer: O,
        component_names: &[&str],
    ) -> ComponentObserverId {
        let id = ComponentObserverId(self.next_component_observer_id);
        self.next_component_observer_id += 1;
        self.component_observers.push(ComponentObserverEntry {
            id,
            observer: Some(Box::new(observer)),
            component_names: component_names.iter().map(|&n| n.to_string()).collect(),
        });
        id
    }

    /// Remove a component observer and its subscription set. Returns `false`
    /// for an unknown handle.
    pub fn unregister_component_observer(&mut self, observer: ComponentObserverId) -> bool {
        let before = self.component_observers.len();
        self.component_observers.retain(|entry| entry.id != observer);
        self.component_observers.len() != before
    }

    /// Add a component type name to an observer's subscription set. No-op
    /// for an unknown handle.
    pub fn add_component_observer_component(
        &mut self,
        observer: ComponentObserverId,
        component_name: &str,
    ) {
        if let Some(entry) = self.component_observers.iter_mut().find(|e| e.id == observer) {
            entry.component_names.insert(component_name.to_string());
        }
    }

    /// Remove a component type name from an observer's subscription set.
    /// No-op for an unknown handle or an unsubscribed name.
    pub fn remove_component_observer_component(
        &mut self,
        observer: ComponentObserverId,
        component_name: &str,
    ) {
        if let Some(entry) = self.component_observers.iter_mut().find(|e| e.id == observer) {
            entry.component_names.remove(component_name);
        }
    }

    // -- Notification dispatch --
    //
    // Callbacks only get shared access to the manager, so neither observer
    // list can change while it is being walked. Each slot is vacated for the
    // duration of its callback so the manager can be passed by reference.

    fn notify_entity_created(&mut self, entity: Entity) {
        for index in 0..self.entity_observers.len() {
            let Some(mut observer) = self.entity_observers[index].observer.take() else {
                continue;
            };
            observer.entity_created(self, entity);
            self.entity_observers[index].observer = Some(observer);
        }
    }

    fn notify_entity_removed(&mut self, entity: Entity) {
        for index in 0..self.entity_observers.len() {
            let Some(mut observer) = self.entity_observers[index].observer.take() else {
                continue;
            };
            observer.entity_removed(self, entity);
            self.entity_observers[index].observer = Some(observer);
        }
    }

    fn notify_component_added(&mut self, entity: Entity, component_name: &str) {
        for index in 0..self.component_observers.len() {
            if !self.component_observers[index].component_names.contains(component_name) {
                continue;
            }
            let Some(mut observer) = self.component_observers[index].observer.take() else {
                continue;
            };
            observer.component_added(self, entity, component_name);
            self.component_observers[index].observer = Some(observer);
        }
    }

    fn notify_component_removed(&mut self, entity: Entity, component_name: &str) {
        for index in 0..self.component_observers.len() {
            if !self.component_observers[index].component_names.contains(component_name) {
                continue;
            }
            let Some(mut observer) = self.component_observers[index].observer.take() else {
                continue;
            };
            observer.component_removed(self, entity, component_name);
            self.component_observers[index].observer = Some(observer);
        }
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}
