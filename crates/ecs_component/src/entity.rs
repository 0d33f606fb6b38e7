//! Entity type and allocation utilities.
//!
//! An [`Entity`] is a lightweight `u64` identifier with no inherent data.
//! All entity IDs are allocated by the registry's [`EntityAllocator`], which
//! is the single source of truth for entity identity.

use serde::{Deserialize, Serialize};

/// A unique entity identifier.
///
/// Entities are pure identifiers — they carry no data of their own. Components
/// are attached to entities by name to give them meaning, and existence is
/// defined purely by membership in the registry's live set.
///
/// Identifiers form a strictly increasing sequence starting at 0 and are never
/// reused, even after the entity is destroyed. "Destroyed" and "never existed"
/// therefore stay distinguishable for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    /// Create an entity from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Allocates monotonically increasing entity IDs.
///
/// Destroyed identifiers are deliberately not recycled; besides handing out
/// fresh IDs, the allocator is the authority on whether a given identifier
/// has ever been issued.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    /// Creates a new allocator. IDs start at 0.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Allocates a fresh entity ID.
    pub fn allocate(&mut self) -> Entity {
        let id = self.next_id;
        self.next_id += 1;
        Entity(id)
    }

    /// Returns `true` if this identifier has been returned by
    /// [`allocate`](Self::allocate) at some point.
    #[must_use]
    pub fn issued(&self, entity: Entity) -> bool {
        entity.0 < self.next_id
    }

    /// Returns the number of entities allocated so far.
    #[must_use]
    pub fn issued_count(&self) -> u64 {
        self.next_id
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let e = Entity::from_raw(42);
        assert_eq!(e.id(), 42);
    }

    #[test]
    fn test_allocator_produces_increasing_ids() {
        let mut alloc = EntityAllocator::new();
        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        let e3 = alloc.allocate();
        assert_eq!(e1.id(), 0);
        assert_eq!(e2.id(), 1);
        assert_eq!(e3.id(), 2);
        assert_eq!(alloc.issued_count(), 3);
    }

    #[test]
    fn test_issued() {
        let mut alloc = EntityAllocator::new();
        assert!(!alloc.issued(Entity::from_raw(0)));

        let e = alloc.allocate();
        assert!(alloc.issued(e));
        assert!(!alloc.issued(Entity::from_raw(1)));
    }

    #[test]
    fn test_entity_serialization_roundtrip() {
        let entity = Entity::from_raw(999);
        let encoded = serde_json::to_string(&entity).unwrap();
        let restored: Entity = serde_json::from_str(&encoded).unwrap();
        assert_eq!(entity, restored);
    }
}
