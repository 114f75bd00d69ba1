//! Attribute keys.

use std::fmt;

/// Identifies an attribute within an entity.
///
/// A key is the triple `(entity name, container path, attribute name)`.
/// The container path is the dot-joined chain of enclosing composite
/// attributes and is empty for top-level attributes.
///
/// Equality and hashing are structural over the triple. A key built from
/// parts and one built by splitting the full path are equal as long as the
/// attribute name itself contains no dot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeKey {
    entity_name: String,
    container_path: String,
    attribute_name: String,
}

impl AttributeKey {
    /// Creates a key from its parts.
    pub fn new(
        entity_name: impl Into<String>,
        container_path: impl Into<String>,
        attribute_name: impl Into<String>,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            container_path: container_path.into(),
            attribute_name: attribute_name.into(),
        }
    }

    /// Creates a key by splitting a dotted attribute path on its last dot.
    ///
    /// `"address.city"` yields container `"address"` and name `"city"`;
    /// a path without a dot yields an empty container.
    pub fn from_path(entity_name: impl Into<String>, attribute_path: &str) -> Self {
        let (container_path, attribute_name) = match attribute_path.rsplit_once('.') {
            Some((container, name)) => (container, name),
            None => ("", attribute_path),
        };
        Self::new(entity_name, container_path, attribute_name)
    }

    /// Returns the entity name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Returns the container path, empty at the top level.
    #[must_use]
    pub fn container_path(&self) -> &str {
        &self.container_path
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    /// Returns the full attribute path within the entity.
    #[must_use]
    pub fn attribute_path(&self) -> String {
        if self.container_path.is_empty() {
            self.attribute_name.clone()
        } else {
            format!("{}.{}", self.container_path, self.attribute_name)
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.entity_name)?;
        if !self.container_path.is_empty() {
            write!(f, "{}.", self.container_path)?;
        }
        f.write_str(&self.attribute_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn top_level_path() {
        let key = AttributeKey::new("Person", "", "name");
        assert_eq!(key.attribute_path(), "name");
        assert_eq!(key.to_string(), "Person.name");
    }

    #[test]
    fn nested_path() {
        let key = AttributeKey::new("Person", "address.geo", "lat");
        assert_eq!(key.attribute_path(), "address.geo.lat");
        assert_eq!(key.to_string(), "Person.address.geo.lat");
    }

    #[test]
    fn from_path_splits_on_last_dot() {
        let key = AttributeKey::from_path("Person", "address.geo.lat");
        assert_eq!(key.entity_name(), "Person");
        assert_eq!(key.container_path(), "address.geo");
        assert_eq!(key.attribute_name(), "lat");
    }

    #[test]
    fn from_path_without_dot() {
        let key = AttributeKey::from_path("Person", "id");
        assert_eq!(key.container_path(), "");
        assert_eq!(key, AttributeKey::new("Person", "", "id"));
    }

    #[test]
    fn structural_equality_and_hash() {
        let mut keys = HashSet::new();
        keys.insert(AttributeKey::new("Person", "address", "city"));
        assert!(keys.contains(&AttributeKey::from_path("Person", "address.city")));
        assert!(!keys.contains(&AttributeKey::from_path("Company", "address.city")));
    }

    #[test]
    fn dotted_attribute_name_is_ambiguous() {
        // Splitting cannot tell a dotted name from a container segment.
        let explicit = AttributeKey::new("Person", "", "a.b");
        let split = AttributeKey::from_path("Person", "a.b");
        assert_ne!(explicit, split);
        assert_eq!(explicit.attribute_path(), split.attribute_path());
    }

    fn segment() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,7}").expect("Invalid regex")
    }

    proptest! {
        #[test]
        fn path_round_trip(
            container in prop::collection::vec(segment(), 0..4),
            name in segment(),
        ) {
            let container = container.join(".");
            let key = AttributeKey::new("Entity", container.clone(), name.clone());
            let path = key.attribute_path();

            let split = AttributeKey::from_path("Entity", &path);
            prop_assert_eq!(split.container_path(), container.as_str());
            prop_assert_eq!(split.attribute_name(), name.as_str());
            prop_assert_eq!(split.attribute_path(), path);
            prop_assert_eq!(&split, &key);
        }
    }
}
