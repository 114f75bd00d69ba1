//! Per-entity attribute buckets.

use crate::error::{IndexError, IndexResult};
use crate::index::view::{PluralAttributes, SingularAttributes};
use crate::index::AttributeKey;
use crate::source::{
    EntitySource, PluralAttributeSource, PluralNature, SingularAttributeSource, SingularNature,
};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::hash::Hash;
use std::sync::Arc;

type Buckets<N, V> = IndexMap<N, IndexMap<AttributeKey, V>>;

/// Attribute sources of one entity, grouped by nature.
///
/// Singular attributes that belong to the identifier are kept apart from
/// regular singular attributes; a key lives in at most one of the two.
/// Natures keep the order in which they were first seen and every bucket
/// keeps insertion order.
#[derive(Debug)]
pub struct EntitySourceIndex {
    source: Arc<EntitySource>,
    identifier_by_nature: Buckets<SingularNature, SingularAttributeSource>,
    singular_by_nature: Buckets<SingularNature, SingularAttributeSource>,
    plural_by_nature: Buckets<PluralNature, PluralAttributeSource>,
}

impl EntitySourceIndex {
    /// Creates an empty index for the entity.
    pub fn new(source: Arc<EntitySource>) -> Self {
        Self {
            source,
            identifier_by_nature: IndexMap::new(),
            singular_by_nature: IndexMap::new(),
            plural_by_nature: IndexMap::new(),
        }
    }

    /// Returns the indexed entity source.
    #[must_use]
    pub fn entity_source(&self) -> &EntitySource {
        &self.source
    }

    /// Returns the entity name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        self.source.name()
    }

    /// Indexes a singular attribute found under `path_base`.
    ///
    /// Fails if the attribute key is already present in the bucket.
    pub fn index_singular(
        &mut self,
        path_base: &str,
        source: &SingularAttributeSource,
        in_identifier: bool,
    ) -> IndexResult<()> {
        let key = AttributeKey::new(self.source.name(), path_base, source.name());
        let buckets = if in_identifier {
            &mut self.identifier_by_nature
        } else {
            &mut self.singular_by_nature
        };
        insert_unique(buckets, source.nature(), key, source)
    }

    /// Indexes a plural attribute found under `path_base`.
    ///
    /// Fails if the attribute is already present in the bucket.
    pub fn index_plural(
        &mut self,
        path_base: &str,
        source: &PluralAttributeSource,
    ) -> IndexResult<()> {
        let key = AttributeKey::new(self.source.name(), path_base, source.name());
        insert_unique(&mut self.plural_by_nature, source.nature(), key, source)
    }

    /// Returns the regular singular attributes of a nature.
    #[must_use]
    pub fn singular_attributes_of(&self, nature: SingularNature) -> SingularAttributes<'_> {
        SingularAttributes::new(self.singular_by_nature.get(&nature))
    }

    /// Returns the identifier attributes of a nature.
    #[must_use]
    pub fn identifier_attributes_of(&self, nature: SingularNature) -> SingularAttributes<'_> {
        SingularAttributes::new(self.identifier_by_nature.get(&nature))
    }

    /// Returns the plural attributes of a nature.
    #[must_use]
    pub fn plural_attributes_of(&self, nature: PluralNature) -> PluralAttributes<'_> {
        PluralAttributes::new(self.plural_by_nature.get(&nature))
    }

    /// Natures of regular singular attributes, in first-seen order.
    pub fn singular_natures(&self) -> impl Iterator<Item = SingularNature> + '_ {
        self.singular_by_nature.keys().copied()
    }

    /// Natures of identifier attributes, in first-seen order.
    pub fn identifier_natures(&self) -> impl Iterator<Item = SingularNature> + '_ {
        self.identifier_by_nature.keys().copied()
    }

    /// Natures of plural attributes, in first-seen order.
    pub fn plural_natures(&self) -> impl Iterator<Item = PluralNature> + '_ {
        self.plural_by_nature.keys().copied()
    }

    /// Returns the total number of indexed attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        bucket_len(&self.identifier_by_nature)
            + bucket_len(&self.singular_by_nature)
            + bucket_len(&self.plural_by_nature)
    }
}

fn insert_unique<N, V>(
    buckets: &mut Buckets<N, V>,
    nature: N,
    key: AttributeKey,
    source: &V,
) -> IndexResult<()>
where
    N: Hash + Eq,
    V: Clone,
{
    match buckets.entry(nature).or_default().entry(key) {
        Entry::Occupied(entry) => Err(IndexError::duplicate_attribute(entry.key().clone())),
        Entry::Vacant(entry) => {
            entry.insert(source.clone());
            Ok(())
        }
    }
}

fn bucket_len<N, V>(buckets: &Buckets<N, V>) -> usize {
    buckets.values().map(|bucket| bucket.len()).sum()
}
