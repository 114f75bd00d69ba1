//! Property-based test generators using proptest.
//!
//! Generated trees never repeat a name among siblings, and identifier
//! attributes (`id*`, `pk`) never clash with regular ones (`a*`), so every
//! generated entity indexes cleanly.

use mapidx_core::source::{
    AttributeSource, EntitySource, IdentifierSource, PluralAttributeSource,
    SingularAttributeSource,
};
use mapidx_core::{PluralNature, SingularNature};
use proptest::prelude::*;

/// Shape of a generated attribute before names are assigned.
#[derive(Debug, Clone)]
pub enum AttributeShape {
    /// Leaf singular attribute.
    Singular(SingularNature),
    /// Plural attribute.
    Plural(PluralNature),
    /// Composite with nested shapes.
    Composite(Vec<AttributeShape>),
}

impl AttributeShape {
    /// Builds the attribute source, naming children `{name}_{position}`.
    pub fn into_source(self, name: String) -> AttributeSource {
        match self {
            Self::Singular(nature) => SingularAttributeSource::new(name, nature).into(),
            Self::Plural(nature) => PluralAttributeSource::new(name, nature).into(),
            Self::Composite(children) => {
                let children = name_shapes(&name, children);
                SingularAttributeSource::composite(name, children).into()
            }
        }
    }
}

fn name_shapes(prefix: &str, shapes: Vec<AttributeShape>) -> Vec<AttributeSource> {
    shapes
        .into_iter()
        .enumerate()
        .map(|(position, shape)| shape.into_source(format!("{prefix}_{position}")))
        .collect()
}

/// Strategy for leaf singular natures.
pub fn leaf_nature_strategy() -> impl Strategy<Value = SingularNature> {
    prop_oneof![
        Just(SingularNature::Basic),
        Just(SingularNature::ManyToOne),
        Just(SingularNature::OneToOne),
        Just(SingularNature::Any),
    ]
}

/// Strategy for plural natures.
pub fn plural_nature_strategy() -> impl Strategy<Value = PluralNature> {
    prop_oneof![
        Just(PluralNature::Bag),
        Just(PluralNature::IdBag),
        Just(PluralNature::Set),
        Just(PluralNature::List),
        Just(PluralNature::Array),
        Just(PluralNature::Map),
    ]
}

/// Strategy for attribute shapes nested up to four composites deep.
pub fn attribute_shape_strategy() -> impl Strategy<Value = AttributeShape> {
    let leaf = prop_oneof![
        3 => leaf_nature_strategy().prop_map(AttributeShape::Singular),
        1 => plural_nature_strategy().prop_map(AttributeShape::Plural),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(AttributeShape::Composite)
    })
}

/// Strategy for a list of sibling attributes named `{prefix}{position}`.
pub fn attributes_strategy(prefix: &'static str) -> impl Strategy<Value = Vec<AttributeSource>> {
    prop::collection::vec(attribute_shape_strategy(), 0..6).prop_map(move |shapes| {
        shapes
            .into_iter()
            .enumerate()
            .map(|(position, shape)| shape.into_source(format!("{prefix}{position}")))
            .collect()
    })
}

/// Strategy for identifier sources of every shape.
pub fn identifier_strategy() -> impl Strategy<Value = IdentifierSource> {
    prop_oneof![
        leaf_nature_strategy()
            .prop_map(|nature| IdentifierSource::Simple(SingularAttributeSource::new("id", nature))),
        prop::collection::vec(leaf_nature_strategy(), 1..4).prop_map(|natures| {
            IdentifierSource::NonAggregatedComposite(
                natures
                    .into_iter()
                    .enumerate()
                    .map(|(position, nature)| {
                        SingularAttributeSource::new(format!("id{position}"), nature)
                    })
                    .collect(),
            )
        }),
        attributes_strategy("pk_").prop_map(|children| {
            IdentifierSource::AggregatedComposite(SingularAttributeSource::composite(
                "pk", children,
            ))
        }),
    ]
}

/// Strategy for valid entity names.
pub fn entity_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,15}").expect("Invalid regex")
}

/// Strategy for root and non-root entity sources.
pub fn entity_source_strategy() -> impl Strategy<Value = EntitySource> {
    (
        entity_name_strategy(),
        prop::option::of(identifier_strategy()),
        attributes_strategy("a"),
    )
        .prop_map(|(name, identifier, attributes)| {
            let entity = match identifier {
                Some(identifier) => EntitySource::root(name, identifier),
                None => EntitySource::subclass(name),
            };
            entity.with_attributes(attributes)
        })
}

/// Strategy for several entities with distinct names.
pub fn entity_sources_strategy(max: usize) -> impl Strategy<Value = Vec<EntitySource>> {
    prop::collection::vec(entity_source_strategy(), 1..=max.max(1)).prop_map(|entities| {
        let mut seen = std::collections::HashSet::new();
        entities
            .into_iter()
            .filter(|entity| seen.insert(entity.name().to_owned()))
            .collect()
    })
}
