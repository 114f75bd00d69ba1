//! Attribute sources.

use super::nature::{PluralNature, SingularNature};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Describes one mapped attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttributeSource {
    /// Single-valued attribute.
    Singular(SingularAttributeSource),
    /// Collection-valued attribute.
    Plural(PluralAttributeSource),
}

impl AttributeSource {
    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Singular(source) => source.name(),
            Self::Plural(source) => source.name(),
        }
    }

    /// Returns true for single-valued attributes.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular(_))
    }

    /// Returns the singular source, if this is one.
    #[must_use]
    pub fn as_singular(&self) -> Option<&SingularAttributeSource> {
        match self {
            Self::Singular(source) => Some(source),
            Self::Plural(_) => None,
        }
    }

    /// Returns the plural source, if this is one.
    #[must_use]
    pub fn as_plural(&self) -> Option<&PluralAttributeSource> {
        match self {
            Self::Singular(_) => None,
            Self::Plural(source) => Some(source),
        }
    }
}

impl From<SingularAttributeSource> for AttributeSource {
    fn from(source: SingularAttributeSource) -> Self {
        Self::Singular(source)
    }
}

impl From<PluralAttributeSource> for AttributeSource {
    fn from(source: PluralAttributeSource) -> Self {
        Self::Plural(source)
    }
}

/// Describes a single-valued attribute.
///
/// Nested attributes are only walked for [`SingularNature::Composite`]
/// sources, and only [`SingularAttributeSource::composite`] attaches them.
/// Children are shared, so cloning a composite does not copy its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingularAttributeSource {
    name: String,
    nature: SingularNature,
    #[serde(default = "empty_attributes", skip_serializing_if = "no_attributes")]
    attributes: Arc<[AttributeSource]>,
}

fn empty_attributes() -> Arc<[AttributeSource]> {
    Arc::from(Vec::new())
}

fn no_attributes(attributes: &Arc<[AttributeSource]>) -> bool {
    attributes.is_empty()
}

impl SingularAttributeSource {
    /// Creates a leaf attribute of the given nature.
    pub fn new(name: impl Into<String>, nature: SingularNature) -> Self {
        Self {
            name: name.into(),
            nature,
            attributes: empty_attributes(),
        }
    }

    /// Creates a basic value attribute.
    pub fn basic(name: impl Into<String>) -> Self {
        Self::new(name, SingularNature::Basic)
    }

    /// Creates a many-to-one association attribute.
    pub fn many_to_one(name: impl Into<String>) -> Self {
        Self::new(name, SingularNature::ManyToOne)
    }

    /// Creates a one-to-one association attribute.
    pub fn one_to_one(name: impl Into<String>) -> Self {
        Self::new(name, SingularNature::OneToOne)
    }

    /// Creates a composite attribute holding the given nested attributes.
    pub fn composite(name: impl Into<String>, attributes: Vec<AttributeSource>) -> Self {
        Self {
            name: name.into(),
            nature: SingularNature::Composite,
            attributes: Arc::from(attributes),
        }
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute nature.
    #[must_use]
    pub fn nature(&self) -> SingularNature {
        self.nature
    }

    /// Returns true if this attribute is a composite.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.nature.is_composite()
    }

    /// Returns the nested attributes in declaration order.
    ///
    /// Always empty for non-composite attributes.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeSource] {
        if self.is_composite() {
            &self.attributes[..]
        } else {
            &[]
        }
    }
}

/// Describes a collection-valued attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralAttributeSource {
    name: String,
    nature: PluralNature,
}

impl PluralAttributeSource {
    /// Creates a plural attribute.
    pub fn new(name: impl Into<String>, nature: PluralNature) -> Self {
        Self {
            name: name.into(),
            nature,
        }
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collection nature.
    #[must_use]
    pub fn nature(&self) -> PluralNature {
        self.nature
    }
}
