//! Entity/component registry with live filters, scheduled processors, and
//! synchronous observers.
//!
//! Component types are registered by name with a prototype value or a
//! constructor; entities are opaque IDs holding one instance per attached
//! type. Filters stay current through every mutation and support removing
//! entities from the very list being iterated. Processors run in
//! registration order per [`EntityManager::update`] tick and can exchange
//! short-lived message entities. Observers are notified in-line, against
//! state that still reflects the reported event.
//!
//! ```
//! use ecs_registry::EntityManager;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), ecs_registry::EcsError> {
//! let mut manager = EntityManager::new();
//! manager.register_component("Transform", json!({ "x": 0.0, "y": 0.0 }))?;
//!
//! let player = manager.create_entity_with(&["Transform"])?;
//! manager.add_tag(player, "player");
//!
//! let movable = manager.create_entity_filter(&["Transform"])?;
//! assert_eq!(manager.filter_entities(movable), &[player]);
//!
//! if let Some(transform) = manager.get_component_mut(player, "Transform") {
//!     transform["x"] = json!(10.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod manager;
pub mod observer;
pub mod processor;

pub use error::EcsError;
pub use filter::FilterId;
pub use manager::EntityManager;
pub use observer::{ComponentObserver, ComponentObserverId, EntityObserver, EntityObserverId};
pub use processor::{Processor, ProcessorId};
