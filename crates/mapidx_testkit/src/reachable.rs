//! Reference walk over entity sources.
//!
//! A straightforward recursive listing of every attribute reachable from an
//! entity, used as the expected side when checking an index.

use mapidx_core::source::{AttributeSource, EntitySource};

/// An attribute reachable from an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachable {
    /// Full dotted path within the entity.
    pub path: String,
    /// The attribute source.
    pub source: AttributeSource,
    /// Whether the attribute is part of the identifier.
    pub in_identifier: bool,
}

/// Lists reachable attributes in visit order: identifier first, then
/// top-level attributes, each followed by its nested attributes.
pub fn reachable_attributes(entity: &EntitySource) -> Vec<Reachable> {
    let mut out = Vec::new();
    if let Some(identifier) = entity.identifier() {
        for source in identifier.attribute_sources() {
            collect("", &AttributeSource::Singular(source.clone()), true, &mut out);
        }
    }
    for source in entity.attributes() {
        collect("", source, false, &mut out);
    }
    out
}

fn collect(prefix: &str, source: &AttributeSource, in_identifier: bool, out: &mut Vec<Reachable>) {
    let path = if prefix.is_empty() {
        source.name().to_owned()
    } else {
        format!("{prefix}.{}", source.name())
    };
    out.push(Reachable {
        path: path.clone(),
        source: source.clone(),
        in_identifier,
    });
    if let AttributeSource::Singular(singular) = source {
        for child in singular.attributes() {
            collect(&path, child, in_identifier, out);
        }
    }
}
