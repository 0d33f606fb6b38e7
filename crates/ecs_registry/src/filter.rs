//! Live entity filters.
//!
//! A filter is a continuously maintained list of the entities that hold every
//! component type in its requirement set. Iteration goes through an explicit
//! cursor session so that entities can be removed from the list — by the very
//! code that is iterating it — without skipping or double-visiting any of the
//! surviving members.

use ecs_component::Entity;

/// Handle to a filter owned by an [`EntityManager`](crate::EntityManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterId(pub(crate) u64);

/// A live-maintained entity list plus cursor state for safe iteration.
#[derive(Debug)]
pub(crate) struct EntityFilter {
    pub(crate) id: FilterId,
    /// The component types an entity must hold to be a member.
    pub(crate) component_names: Vec<String>,
    /// Current members, in insertion order.
    pub(crate) entities: Vec<Entity>,
    /// Index of the next entity to hand out while iterating.
    next_entity: usize,
    /// Whether an iteration session is active.
    is_processing: bool,
}

impl EntityFilter {
    pub(crate) fn new(id: FilterId, component_names: Vec<String>, entities: Vec<Entity>) -> Self {
        Self {
            id,
            component_names,
            entities,
            next_entity: 0,
            is_processing: false,
        }
    }

    /// Start an iteration session and return the first member, or `None` for
    /// an empty list (in which case no session is left active).
    pub(crate) fn first(&mut self) -> Option<Entity> {
        self.next_entity = 0;
        self.is_processing = true;
        self.next()
    }

    /// Return the member at the cursor and advance. Past the last member the
    /// session ends and `None` is returned; a further call starts over from
    /// whatever the cursor state is, which for a fresh filter means the front.
    pub(crate) fn next(&mut self) -> Option<Entity> {
        if self.next_entity >= self.entities.len() {
            self.is_processing = false;
            return None;
        }

        let entity = self.entities[self.next_entity];
        self.next_entity += 1;
        Some(entity)
    }

    /// Returns `true` if the requirement set includes `name`.
    pub(crate) fn requires(&self, name: &str) -> bool {
        self.component_names.iter().any(|n| n == name)
    }

    pub(crate) fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub(crate) fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Splice an entity out of the member list.
    ///
    /// While a session is active, removing an element at an index the cursor
    /// has already passed pulls the cursor back one step, so the following
    /// [`next`](Self::next) call neither skips a member nor revisits one.
    /// Removing an element the cursor has not reached needs no adjustment.
    pub(crate) fn remove_entity(&mut self, entity: Entity) {
        if let Some(index) = self.entities.iter().position(|&e| e == entity) {
            self.entities.remove(index);
            if self.is_processing && index < self.next_entity {
                self.next_entity -= 1;
            }
        }
    }

    /// Drop every member. An active session simply finds the list exhausted.
    pub(crate) fn clear_entities(&mut self) {
        self.entities.clear();
    }

    /// Remove `name` from the requirement set. Returns `true` if it was
    /// present.
    pub(crate) fn drop_requirement(&mut self, name: &str) -> bool {
        if let Some(index) = self.component_names.iter().position(|n| n == name) {
            self.component_names.remove(index);
            true
        } else {
            false
        }
    }
}
