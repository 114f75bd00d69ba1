//! Canned entity sources.
//!
//! Each fixture covers one identifier shape or nesting pattern.

use mapidx_core::source::{
    AttributeSource, EntitySource, IdentifierSource, PluralAttributeSource, SingularAttributeSource,
};
use mapidx_core::{IndexConfig, PluralNature, SourceIndex};

/// Shorthand for a basic attribute.
pub fn basic(name: &str) -> AttributeSource {
    SingularAttributeSource::basic(name).into()
}

/// Shorthand for a composite attribute.
pub fn composite(name: &str, attributes: Vec<AttributeSource>) -> AttributeSource {
    SingularAttributeSource::composite(name, attributes).into()
}

/// Shorthand for a plural attribute.
pub fn plural(name: &str, nature: PluralNature) -> AttributeSource {
    PluralAttributeSource::new(name, nature).into()
}

/// `Person`: simple `id`, basic `name`, composite `address { city, zip }`.
pub fn person() -> EntitySource {
    EntitySource::root(
        "Person",
        IdentifierSource::Simple(SingularAttributeSource::basic("id")),
    )
    .with_attribute(basic("name"))
    .with_attribute(composite("address", vec![basic("city"), basic("zip")]))
}

/// `Order`: aggregated `pk { region, number }`, a customer association,
/// a list of lines and a nested billing composite.
pub fn order() -> EntitySource {
    EntitySource::root(
        "Order",
        IdentifierSource::AggregatedComposite(SingularAttributeSource::composite(
            "pk",
            vec![basic("region"), basic("number")],
        )),
    )
    .with_attribute(SingularAttributeSource::many_to_one("customer"))
    .with_attribute(plural("lines", PluralNature::List))
    .with_attribute(composite(
        "billing",
        vec![
            composite("address", vec![basic("city"), basic("zip")]),
            plural("notes", PluralNature::Bag),
        ],
    ))
}

/// `OrderLine`: identifier made of `order` and `position`.
pub fn order_line() -> EntitySource {
    EntitySource::root(
        "OrderLine",
        IdentifierSource::NonAggregatedComposite(vec![
            SingularAttributeSource::many_to_one("order"),
            SingularAttributeSource::basic("position"),
        ]),
    )
    .with_attribute(basic("quantity"))
    .with_attribute(SingularAttributeSource::one_to_one("product"))
}

/// `Employee`: non-root entity with no identifier of its own.
pub fn employee() -> EntitySource {
    EntitySource::subclass("Employee")
        .with_attribute(basic("salary"))
        .with_attribute(plural("skills", PluralNature::Set))
        .with_attribute(composite("desk", vec![plural("skills", PluralNature::Set)]))
}

/// All fixtures above, in a fixed order.
pub fn sample_model() -> Vec<EntitySource> {
    vec![person(), order(), order_line(), employee()]
}

/// Builds an index over `sources` with the default configuration.
///
/// # Panics
///
/// Panics if indexing fails.
pub fn indexed(sources: Vec<EntitySource>) -> SourceIndex {
    SourceIndex::from_sources(IndexConfig::default(), sources).expect("fixture should index")
}
