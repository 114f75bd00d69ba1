//! Traversal of entity source trees.
//!
//! Every attribute reachable from an entity is visited exactly once: the
//! identifier attributes of a root entity first, then the top-level
//! attributes in declaration order, descending into composites depth-first.
//! Each visit registers the attribute key in the flat attribute map and in
//! the entity's nature buckets.
//!
//! The walk uses an explicit stack instead of recursion, so nesting depth is
//! not limited by the call stack. A cap applies only when
//! [`IndexConfig::max_nesting_depth`] is set. Children are pushed in reverse
//! so the visit order matches a recursive pre-order walk.

use crate::config::IndexConfig;
use crate::error::{IndexError, IndexResult};
use crate::index::{AttributeKey, EntitySourceIndex};
use crate::source::{
    AttributeSource, EntitySource, IdentifierSource, PluralAttributeSource,
    SingularAttributeSource,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Borrowed attribute source, singular or plural.
#[derive(Debug, Clone, Copy)]
enum Visit<'s> {
    Singular(&'s SingularAttributeSource),
    Plural(&'s PluralAttributeSource),
}

impl<'s> Visit<'s> {
    fn name(self) -> &'s str {
        match self {
            Self::Singular(source) => source.name(),
            Self::Plural(source) => source.name(),
        }
    }

    fn to_source(self) -> AttributeSource {
        match self {
            Self::Singular(source) => AttributeSource::Singular(source.clone()),
            Self::Plural(source) => AttributeSource::Plural(source.clone()),
        }
    }
}

impl<'s> From<&'s AttributeSource> for Visit<'s> {
    fn from(source: &'s AttributeSource) -> Self {
        match source {
            AttributeSource::Singular(source) => Self::Singular(source),
            AttributeSource::Plural(source) => Self::Plural(source),
        }
    }
}

/// One pending visit.
struct Frame<'s> {
    path_base: String,
    source: Visit<'s>,
    depth: usize,
}

/// Walks one entity into its own index and the shared attribute map.
pub(crate) struct Walker<'a> {
    config: &'a IndexConfig,
    attributes: &'a mut HashMap<AttributeKey, AttributeSource>,
    entity_index: EntitySourceIndex,
}

impl<'a> Walker<'a> {
    /// Indexes every attribute reachable from `source`.
    ///
    /// On error the attribute map may hold part of the entity; callers must
    /// discard it.
    pub(crate) fn index_entity(
        config: &'a IndexConfig,
        attributes: &'a mut HashMap<AttributeKey, AttributeSource>,
        source: Arc<EntitySource>,
    ) -> IndexResult<EntitySourceIndex> {
        let mut walker = Self {
            config,
            attributes,
            entity_index: EntitySourceIndex::new(Arc::clone(&source)),
        };

        if let Some(identifier) = source.identifier() {
            walker.walk_identifier(identifier)?;
        }
        for attribute in source.attributes() {
            walker.walk(attribute.into(), false)?;
        }

        Ok(walker.entity_index)
    }

    fn walk_identifier(&mut self, identifier: &IdentifierSource) -> IndexResult<()> {
        match identifier {
            IdentifierSource::Simple(source) => self.walk(Visit::Singular(source), true),
            IdentifierSource::NonAggregatedComposite(sources) => {
                for source in sources {
                    self.walk(Visit::Singular(source), true)?;
                }
                Ok(())
            }
            IdentifierSource::AggregatedComposite(source) => {
                if !source.is_composite() {
                    return Err(IndexError::unexpected_identifier(
                        self.entity_index.entity_name(),
                        source.name(),
                        source.nature(),
                    ));
                }
                self.walk(Visit::Singular(source), true)
            }
        }
    }

    fn walk(&mut self, root: Visit<'_>, in_identifier: bool) -> IndexResult<()> {
        let mut stack = vec![Frame {
            path_base: String::new(),
            source: root,
            depth: 1,
        }];

        while let Some(frame) = stack.pop() {
            let key = AttributeKey::new(
                self.entity_index.entity_name(),
                frame.path_base.as_str(),
                frame.source.name(),
            );
            if let Some(limit) = self.config.max_nesting_depth {
                if frame.depth > limit {
                    return Err(IndexError::NestingTooDeep { key, limit });
                }
            }

            self.register(&key, frame.source)?;

            match frame.source {
                Visit::Singular(source) => {
                    self.entity_index
                        .index_singular(&frame.path_base, source, in_identifier)?;

                    let children = source.attributes();
                    if children.is_empty() {
                        continue;
                    }
                    let path = key.attribute_path();
                    for child in children.iter().rev() {
                        stack.push(Frame {
                            path_base: path.clone(),
                            source: child.into(),
                            depth: frame.depth + 1,
                        });
                    }
                }
                Visit::Plural(source) => {
                    self.entity_index.index_plural(&frame.path_base, source)?;
                }
            }
        }

        Ok(())
    }

    fn register(&mut self, key: &AttributeKey, source: Visit<'_>) -> IndexResult<()> {
        match self.attributes.entry(key.clone()) {
            Entry::Occupied(_) => Err(IndexError::duplicate_attribute(key.clone())),
            Entry::Vacant(entry) => {
                entry.insert(source.to_source());
                debug!(key = %key, "mapped attribute source");
                Ok(())
            }
        }
    }
}
