//! Semantic kinds of attribute and identifier sources.

use serde::{Deserialize, Serialize};

/// Semantic kind of a single-valued attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingularNature {
    /// A plain value mapped to one or more columns.
    Basic,
    /// An embedded group of attributes.
    Composite,
    /// A many-to-one association.
    ManyToOne,
    /// A one-to-one association.
    OneToOne,
    /// A polymorphic association to any entity type.
    Any,
}

impl SingularNature {
    /// Returns true if attributes of this nature contain nested attributes.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Composite)
    }
}

/// Semantic kind of a collection-valued attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralNature {
    /// Unordered collection allowing duplicates.
    Bag,
    /// Bag with a surrogate identifier per element.
    IdBag,
    /// Unordered collection without duplicates.
    Set,
    /// Ordered, indexed collection.
    List,
    /// Fixed array.
    Array,
    /// Keyed collection.
    Map,
}

/// Shape of an entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierNature {
    /// A single identifier attribute.
    Simple,
    /// One composite attribute holding the whole identifier.
    AggregatedComposite,
    /// Several attributes of the entity that together form the identifier.
    NonAggregatedComposite,
}
