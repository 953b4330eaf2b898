//! Value object: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::{Deserialize, Serialize};

/// An immutable attribute bundle compared structurally.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Money { amount: 100, currency: "USD" }` is a value object
/// - `Customer { id: CustomerId(...), name: "..." }` is an entity
///
/// ## Immutability
///
/// The constructor takes **ownership** of the bundle and the wrapper exposes no
/// mutable access, so nothing can alter the stored values afterwards - the
/// caller's original binding is moved away and cannot reach in. To "modify" a
/// value object, build a new one. This ensures:
/// - **Thread safety**: Immutable objects are safe to share across threads
/// - **Predictability**: Value objects can't be unexpectedly modified
/// - **Value semantics**: Values behave like primitives (can be copied, compared)
///
/// ## Equality
///
/// Equality delegates to the bundle's own `PartialEq` - a canonical,
/// field-by-field structural comparison. Two value objects built from
/// structurally identical bundles compare equal even when constructed
/// independently, and nothing here depends on serialization key order.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct MoneyProps {
///     amount: i64,
///     currency: String,
/// }
///
/// let m1 = ValueObject::new(MoneyProps { amount: 100, currency: "USD".into() });
/// let m2 = ValueObject::new(MoneyProps { amount: 100, currency: "USD".into() });
/// assert_eq!(m1, m2);  // Equal by value, not identity
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueObject<P> {
    props: P,
}

impl<P> ValueObject<P> {
    /// Wrap an attribute bundle. The bundle is owned from here on; there is
    /// no way to mutate it through the wrapper.
    pub fn new(props: P) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct AddressProps {
        street: String,
        city: String,
    }

    #[test]
    fn independently_constructed_bundles_with_same_content_are_equal() {
        let a = ValueObject::new(AddressProps {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
        });
        let b = ValueObject::new(AddressProps {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
        });
        assert_eq!(a, b);
    }

    #[test]
    fn different_content_is_not_equal() {
        let a = ValueObject::new(AddressProps {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
        });
        let b = ValueObject::new(AddressProps {
            street: "2 Main St".to_string(),
            city: "Springfield".to_string(),
        });
        assert_ne!(a, b);
    }

    #[test]
    fn equality_does_not_depend_on_insertion_order_of_keyed_bundles() {
        let mut first = BTreeMap::new();
        first.insert("city", "Springfield");
        first.insert("street", "1 Main St");

        let mut second = BTreeMap::new();
        second.insert("street", "1 Main St");
        second.insert("city", "Springfield");

        assert_eq!(ValueObject::new(first), ValueObject::new(second));
    }

    #[test]
    fn mutating_a_copy_of_the_source_does_not_affect_the_value_object() {
        let mut source = AddressProps {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
        };
        let value = ValueObject::new(source.clone());

        source.city = "Shelbyville".to_string();

        assert_eq!(value.props().city, "Springfield");
    }
}
