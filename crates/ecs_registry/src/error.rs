//! Registry error types.

use ecs_component::Entity;
use thiserror::Error;

/// Errors produced by [`EntityManager`](crate::EntityManager) operations.
///
/// Only misuse of the type registry itself is an error. Operations on
/// entities or component instances that are merely absent are well-defined
/// no-ops, and lookups return `None` or an empty slice — see the crate docs
/// for the full policy.
#[derive(Debug, Error)]
pub enum EcsError {
    /// A component type with this name is already registered.
    #[error("component type '{0}' already registered")]
    DuplicateComponentType(String),

    /// The named component type has not been registered.
    #[error("unknown component type '{0}'")]
    UnknownComponentType(String),

    /// An operation required a live entity.
    #[error("entity {0} is not alive")]
    EntityNotAlive(Entity),

    /// The processor handle does not refer to a registered processor.
    #[error("processor is not registered")]
    UnknownProcessor,
}
