//! Entity: identity + continuity across state changes.

use crate::id::EntityId;

/// An identity-bearing domain object.
///
/// An entity is defined by its identifier, not by its attribute values: two
/// entities with equal ids denote the same object even when their props have
/// diverged. The identifier is assigned at construction (generated, or
/// supplied when rebuilding from storage) and can never change afterwards.
///
/// Entities are never destroyed by the domain layer. Removal is logical only:
/// [`Entity::delete`] raises a flag and the object stays addressable.
///
/// The attribute bundle is the typed `P` — shape mismatches are compile
/// errors, not runtime checks.
#[derive(Debug, Clone)]
pub struct Entity<P> {
    id: EntityId,
    deleted: bool,
    props: P,
}

impl<P> Entity<P> {
    /// Create a new entity with a freshly generated identifier.
    pub fn new(props: P) -> Self {
        Self::with_id(props, EntityId::new())
    }

    /// Rebuild an entity around a pre-existing identifier (e.g. when
    /// rehydrating from storage).
    pub fn with_id(props: P, id: EntityId) -> Self {
        Self {
            id,
            deleted: false,
            props,
        }
    }

    /// Returns the immutable identifier.
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    /// Attribute state is mutable; identity is not.
    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }

    /// Mark the entity as logically removed. Idempotent.
    pub fn delete(&mut self) {
        self.deleted = true;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

/// Equality is by identifier only; attribute and deletion state are not
/// considered.
impl<P> PartialEq for Entity<P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<P> Eq for Entity<P> {}

/// Hashes by identifier, consistent with [`PartialEq`].
impl<P> core::hash::Hash for Entity<P> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct CustomerProps {
        name: String,
    }

    fn props(name: &str) -> CustomerProps {
        CustomerProps {
            name: name.to_string(),
        }
    }

    #[test]
    fn entities_with_same_id_are_equal_regardless_of_props() {
        let id = EntityId::new();
        let a = Entity::with_id(props("alice"), id);
        let b = Entity::with_id(props("bob"), id);
        assert_eq!(a, b);
    }

    #[test]
    fn entities_with_different_ids_are_not_equal() {
        let a = Entity::new(props("alice"));
        let b = Entity::new(props("alice"));
        assert_ne!(a, b);
    }

    #[test]
    fn new_entity_generates_an_id_and_is_not_deleted() {
        let customer = Entity::new(props("alice"));
        assert!(!customer.id().to_string().is_empty());
        assert!(!customer.is_deleted());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut customer = Entity::new(props("alice"));
        customer.delete();
        customer.delete();
        assert!(customer.is_deleted());
    }

    #[test]
    fn mutating_props_does_not_change_identity_or_equality() {
        let mut customer = Entity::new(props("alice"));
        let id_before = customer.id();
        let snapshot = customer.clone();

        customer.props_mut().name = "renamed".to_string();

        assert_eq!(customer.id(), id_before);
        assert_eq!(customer, snapshot);
        assert_eq!(customer.props().name, "renamed");
    }
}
