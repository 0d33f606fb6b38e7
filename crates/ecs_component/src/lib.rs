//! # ecs_component
//!
//! The leaf building blocks of the ECS registry:
//!
//! - [`Entity`] — lightweight `u64` entity identifiers.
//! - [`EntityAllocator`] — strictly increasing, never-reusing ID allocator.
//! - [`ComponentFactory`] — per-type component instance production, either by
//!   deep-copying a prototype value or by calling a host-supplied constructor.

pub mod component;
pub mod entity;

pub use component::ComponentFactory;
pub use entity::{Entity, EntityAllocator};
