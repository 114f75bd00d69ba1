//! Entity and identifier sources.

use super::attribute::{AttributeSource, SingularAttributeSource};
use super::nature::IdentifierNature;
use serde::{Deserialize, Serialize};
use std::slice;

/// Describes the identifier of a root entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "nature", content = "attributes", rename_all = "snake_case")]
pub enum IdentifierSource {
    /// A single identifier attribute.
    Simple(SingularAttributeSource),
    /// One composite attribute representing the whole identifier.
    AggregatedComposite(SingularAttributeSource),
    /// Entity attributes that together make up the identifier.
    NonAggregatedComposite(Vec<SingularAttributeSource>),
}

impl IdentifierSource {
    /// Returns the identifier nature.
    #[must_use]
    pub fn nature(&self) -> IdentifierNature {
        match self {
            Self::Simple(_) => IdentifierNature::Simple,
            Self::AggregatedComposite(_) => IdentifierNature::AggregatedComposite,
            Self::NonAggregatedComposite(_) => IdentifierNature::NonAggregatedComposite,
        }
    }

    /// Returns the attributes making up the identifier, in order.
    #[must_use]
    pub fn attribute_sources(&self) -> &[SingularAttributeSource] {
        match self {
            Self::Simple(source) | Self::AggregatedComposite(source) => slice::from_ref(source),
            Self::NonAggregatedComposite(sources) => sources,
        }
    }
}

/// Describes one mapped entity type.
///
/// An entity is a root entity exactly when it carries an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySource {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<IdentifierSource>,
    #[serde(default)]
    attributes: Vec<AttributeSource>,
}

impl EntitySource {
    /// Creates a root entity with the given identifier.
    pub fn root(name: impl Into<String>, identifier: IdentifierSource) -> Self {
        Self {
            name: name.into(),
            identifier: Some(identifier),
            attributes: Vec::new(),
        }
    }

    /// Creates a non-root entity, which inherits its identifier.
    pub fn subclass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: None,
            attributes: Vec::new(),
        }
    }

    /// Appends a top-level attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<AttributeSource>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Appends several top-level attributes.
    #[must_use]
    pub fn with_attributes<I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = AttributeSource>,
    {
        self.attributes.extend(attributes);
        self
    }

    /// Returns the entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true for root entities.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.identifier.is_some()
    }

    /// Returns the identifier source of a root entity.
    #[must_use]
    pub fn identifier(&self) -> Option<&IdentifierSource> {
        self.identifier.as_ref()
    }

    /// Returns the top-level attributes in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeSource] {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{PluralAttributeSource, PluralNature};

    #[test]
    fn root_entity_has_identifier() {
        let entity = EntitySource::root(
            "Person",
            IdentifierSource::Simple(SingularAttributeSource::basic("id")),
        );
        assert!(entity.is_root());
        assert_eq!(
            entity.identifier().map(IdentifierSource::nature),
            Some(IdentifierNature::Simple)
        );
    }

    #[test]
    fn subclass_has_no_identifier() {
        let entity = EntitySource::subclass("Employee")
            .with_attribute(SingularAttributeSource::basic("salary"))
            .with_attribute(PluralAttributeSource::new("skills", PluralNature::Set));

        assert!(!entity.is_root());
        assert!(entity.identifier().is_none());
        assert_eq!(entity.attributes().len(), 2);
    }

    #[test]
    fn identifier_attribute_sources() {
        let simple = IdentifierSource::Simple(SingularAttributeSource::basic("id"));
        assert_eq!(simple.attribute_sources().len(), 1);

        let parts = IdentifierSource::NonAggregatedComposite(vec![
            SingularAttributeSource::basic("region"),
            SingularAttributeSource::basic("number"),
        ]);
        let names: Vec<_> = parts.attribute_sources().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["region", "number"]);
        assert_eq!(parts.nature(), IdentifierNature::NonAggregatedComposite);
    }

    #[test]
    fn entity_from_json() {
        let json = r#"{
            "name": "Order",
            "identifier": {
                "nature": "non_aggregated_composite",
                "attributes": [
                    {"name": "region", "nature": "basic"},
                    {"name": "number", "nature": "basic"}
                ]
            },
            "attributes": [
                {"kind": "singular", "name": "customer", "nature": "many_to_one"},
                {"kind": "plural", "name": "lines", "nature": "list"}
            ]
        }"#;

        let entity: EntitySource = serde_json::from_str(json).unwrap();
        assert_eq!(entity.name(), "Order");
        assert!(entity.is_root());
        assert_eq!(entity.attributes()[1].name(), "lines");
    }
}
