//! Observer contracts and registry entries.
//!
//! Two independent notification lists exist: entity observers hear about
//! every created/removed entity, component observers hear about added/removed
//! components for the type names in their subscription set. All notifications
//! fire synchronously, in registration order, before the mutating call
//! returns.

use std::collections::HashSet;

use ecs_component::Entity;

use crate::manager::EntityManager;

/// Handle to a registered entity observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityObserverId(pub(crate) u64);

/// Handle to a registered component observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentObserverId(pub(crate) u64);

/// Notified of entity lifecycle events, unconditionally for every entity.
///
/// Callbacks receive the manager so they can query the state the event is
/// reported against: on [`entity_created`](Self::entity_created) the entity's
/// initial components are already queryable, and on
/// [`entity_removed`](Self::entity_removed) the entity is still in the live
/// set with its component data still present.
pub trait EntityObserver {
    fn entity_created(&mut self, manager: &EntityManager, entity: Entity);
    fn entity_removed(&mut self, manager: &EntityManager, entity: Entity);
}

/// Notified of component additions and removals, scoped to a per-observer
/// subscription set of component type names.
///
/// Notifications fire only at the moment of the matching mutation;
/// registering late does not retroactively notify about pre-existing state.
/// The same state guarantee as for [`EntityObserver`] holds: on
/// [`component_removed`](Self::component_removed) the reported data is still
/// queryable.
pub trait ComponentObserver {
    fn component_added(&mut self, manager: &EntityManager, entity: Entity, component_name: &str);
    fn component_removed(&mut self, manager: &EntityManager, entity: Entity, component_name: &str);
}

pub(crate) struct EntityObserverEntry {
    pub(crate) id: EntityObserverId,
    /// Taken out of the slot for the duration of its callback, so the manager
    /// can be passed by shared reference without aliasing.
    pub(crate) observer: Option<Box<dyn EntityObserver>>,
}

pub(crate) struct ComponentObserverEntry {
    pub(crate) id: ComponentObserverId,
    /// Taken out of the slot for the duration of its callback.
    pub(crate) observer: Option<Box<dyn ComponentObserver>>,
    /// Component type names this observer is notified about.
    pub(crate) component_names: HashSet<String>,
}
