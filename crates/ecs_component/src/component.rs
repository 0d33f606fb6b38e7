//! Component instance factories.
//!
//! A component type is registered as a name plus a way of producing a fresh
//! instance for each entity the type is added to. Instances are
//! dynamically-typed [`Value`]s, so the registry stays agnostic of the host's
//! concrete data shapes.

use std::fmt;

use serde_json::Value;

/// Produces a fresh component instance each time a type is added to an entity.
///
/// Every produced instance is independent: mutating one never affects the
/// prototype or any other instance.
pub enum ComponentFactory {
    /// Deep-copy a prototype value.
    Prototype(Value),
    /// Call a host-supplied constructor.
    Constructor(Box<dyn Fn() -> Value>),
}

impl ComponentFactory {
    /// Produce a new component instance.
    #[must_use]
    pub fn instantiate(&self) -> Value {
        match self {
            ComponentFactory::Prototype(prototype) => prototype.clone(),
            ComponentFactory::Constructor(constructor) => constructor(),
        }
    }
}

impl fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentFactory::Prototype(prototype) => {
                f.debug_tuple("Prototype").field(prototype).finish()
            }
            ComponentFactory::Constructor(_) => f.debug_tuple("Constructor").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_prototype_instances_are_independent() {
        let factory = ComponentFactory::Prototype(json!({ "x": 0, "y": 0 }));

        let mut instance = factory.instantiate();
        instance["x"] = json!(10);

        // The prototype and later instances are untouched.
        assert_eq!(factory.instantiate()["x"], json!(0));
    }

    #[test]
    fn test_prototype_deep_copies_nested_values() {
        let factory = ComponentFactory::Prototype(json!({ "route": [1, 2, 3] }));

        let mut instance = factory.instantiate();
        instance["route"][0] = json!(99);

        assert_eq!(factory.instantiate()["route"], json!([1, 2, 3]));
    }

    #[test]
    fn test_constructor_called_per_instance() {
        let factory = ComponentFactory::Constructor(Box::new(|| json!({ "hp": 100 })));

        let mut first = factory.instantiate();
        first["hp"] = json!(1);

        assert_eq!(factory.instantiate(), json!({ "hp": 100 }));
    }
}
