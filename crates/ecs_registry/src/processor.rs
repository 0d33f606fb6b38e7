//! Processor contract and scheduling entries.

use ecs_component::Entity;

use crate::manager::EntityManager;

/// Handle to a registered processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessorId(pub(crate) u64);

/// A host-supplied per-tick logic unit.
///
/// Processors run once per [`EntityManager::update`] call, strictly in
/// registration order. The update receives the manager mutably: removing or
/// mutating entities that belong to a filter currently being iterated — even
/// by the processor itself — is supported (see
/// [`crate::filter`] for the cursor rules that make this safe).
pub trait Processor {
    fn update(&mut self, manager: &mut EntityManager);
}

pub(crate) struct ProcessorEntry {
    pub(crate) id: ProcessorId,
    /// Taken out of the slot while the processor runs, so `update` can hand
    /// it a `&mut EntityManager` without aliasing.
    pub(crate) processor: Option<Box<dyn Processor>>,
    /// Messages emitted by this processor, destroyed immediately before its
    /// next update.
    pub(crate) emitted_messages: Vec<Entity>,
}
