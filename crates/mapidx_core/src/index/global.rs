//! Source index over all entities.
//!
//! Indexing happens in two phases:
//!
//! 1. [`SourceIndexBuilder`] accepts each entity source exactly once and
//!    walks it into the per-entity buckets and the flat attribute map.
//! 2. [`SourceIndexBuilder::build`] freezes the result into a
//!    [`SourceIndex`], which only hands out shared references and can be
//!    read from many threads without locking.
//!
//! A failure while indexing an entity leaves the builder partially
//! populated. The builder is then poisoned: every later call to
//! [`SourceIndexBuilder::index_entity`] and [`SourceIndexBuilder::build`]
//! fails, so a half-built index is never observable.
//!
//! ## Example
//!
//! ```
//! use mapidx_core::source::{EntitySource, IdentifierSource, SingularAttributeSource};
//! use mapidx_core::{IndexConfig, SourceIndex};
//!
//! let person = EntitySource::root(
//!     "Person",
//!     IdentifierSource::Simple(SingularAttributeSource::basic("id")),
//! );
//! let index = SourceIndex::from_sources(IndexConfig::default(), [person]).unwrap();
//!
//! assert!(index.entity_source("Person").is_some());
//! assert!(index.attribute_source("Person", "id").is_some());
//! assert!(index.attribute_source("Person", "name").is_none());
//! ```

use crate::config::IndexConfig;
use crate::error::{IndexError, IndexResult};
use crate::index::view::{PluralAttributes, SingularAttributes};
use crate::index::walker::Walker;
use crate::index::{AttributeKey, EntitySourceIndex};
use crate::source::{AttributeSource, EntitySource, PluralNature, SingularNature};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds a [`SourceIndex`] one entity at a time.
#[derive(Debug)]
pub struct SourceIndexBuilder {
    config: IndexConfig,
    entities: IndexMap<String, EntitySourceIndex>,
    attributes: HashMap<AttributeKey, AttributeSource>,
    /// Entity whose indexing failed, if any.
    failed: Option<String>,
}

impl SourceIndexBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(config: IndexConfig) -> Self {
        Self {
            entities: IndexMap::with_capacity(config.expected_entities),
            attributes: HashMap::new(),
            failed: None,
            config,
        }
    }

    /// Indexes one entity source.
    ///
    /// Fails if the entity was already indexed, if any attribute is reached
    /// twice, or if the identifier does not match its declared shape. After
    /// a failure the builder is poisoned.
    pub fn index_entity(&mut self, source: EntitySource) -> IndexResult<()> {
        if let Some(entity) = &self.failed {
            return Err(IndexError::poisoned(entity.clone()));
        }

        let name = source.name().to_owned();
        let result = self.try_index_entity(source);
        if let Err(err) = &result {
            warn!(entity = %name, error = %err, "failed to index entity source");
            self.failed = Some(name);
        }
        result
    }

    /// Indexes several entity sources in order, stopping at the first error.
    pub fn index_entities<I>(&mut self, sources: I) -> IndexResult<()>
    where
        I: IntoIterator<Item = EntitySource>,
    {
        for source in sources {
            self.index_entity(source)?;
        }
        Ok(())
    }

    fn try_index_entity(&mut self, source: EntitySource) -> IndexResult<()> {
        if self.entities.contains_key(source.name()) {
            return Err(IndexError::duplicate_entity(source.name()));
        }

        let source = Arc::new(source);
        let entity_index =
            Walker::index_entity(&self.config, &mut self.attributes, Arc::clone(&source))?;
        debug!(
            entity = source.name(),
            attributes = entity_index.attribute_count(),
            "mapped entity source"
        );
        self.entities.insert(source.name().to_owned(), entity_index);
        Ok(())
    }

    /// Returns true if a previous call to `index_entity` failed.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.failed.is_some()
    }

    /// Returns the number of entities indexed so far.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Freezes the builder into a read-only index.
    pub fn build(self) -> IndexResult<SourceIndex> {
        if let Some(entity) = self.failed {
            return Err(IndexError::poisoned(entity));
        }

        info!(
            entities = self.entities.len(),
            attributes = self.attributes.len(),
            "built source index"
        );
        Ok(SourceIndex {
            entities: self.entities,
            attributes: self.attributes,
        })
    }
}

impl Default for SourceIndexBuilder {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}

/// Read-only index of entity and attribute sources.
///
/// Lookups that find nothing return `None` or an empty view.
#[derive(Debug)]
pub struct SourceIndex {
    entities: IndexMap<String, EntitySourceIndex>,
    attributes: HashMap<AttributeKey, AttributeSource>,
}

impl SourceIndex {
    /// Indexes all sources and builds the index.
    pub fn from_sources<I>(config: IndexConfig, sources: I) -> IndexResult<Self>
    where
        I: IntoIterator<Item = EntitySource>,
    {
        let mut builder = SourceIndexBuilder::new(config);
        builder.index_entities(sources)?;
        builder.build()
    }

    /// Returns the source of an indexed entity.
    #[must_use]
    pub fn entity_source(&self, entity_name: &str) -> Option<&EntitySource> {
        self.entity_index(entity_name)
            .map(EntitySourceIndex::entity_source)
    }

    /// Returns the attribute at a dotted path within an entity.
    #[must_use]
    pub fn attribute_source(
        &self,
        entity_name: &str,
        attribute_path: &str,
    ) -> Option<&AttributeSource> {
        self.attributes
            .get(&AttributeKey::from_path(entity_name, attribute_path))
    }

    /// Returns the attribute registered under a key.
    #[must_use]
    pub fn attribute_source_by_key(&self, key: &AttributeKey) -> Option<&AttributeSource> {
        self.attributes.get(key)
    }

    /// Returns the regular singular attributes of an entity with a nature.
    #[must_use]
    pub fn singular_attributes_of(
        &self,
        entity_name: &str,
        nature: SingularNature,
    ) -> SingularAttributes<'_> {
        self.entity_index(entity_name)
            .map_or_else(SingularAttributes::empty, |index| index.singular_attributes_of(nature))
    }

    /// Returns the identifier attributes of an entity with a nature.
    #[must_use]
    pub fn identifier_attributes_of(
        &self,
        entity_name: &str,
        nature: SingularNature,
    ) -> SingularAttributes<'_> {
        self.entity_index(entity_name)
            .map_or_else(SingularAttributes::empty, |index| index.identifier_attributes_of(nature))
    }

    /// Returns the plural attributes of an entity with a nature.
    #[must_use]
    pub fn plural_attributes_of(
        &self,
        entity_name: &str,
        nature: PluralNature,
    ) -> PluralAttributes<'_> {
        self.entity_index(entity_name)
            .map_or_else(PluralAttributes::empty, |index| index.plural_attributes_of(nature))
    }

    /// Returns the per-entity index.
    #[must_use]
    pub fn entity_index(&self, entity_name: &str) -> Option<&EntitySourceIndex> {
        self.entities.get(entity_name)
    }

    /// Returns true if the entity was indexed.
    #[must_use]
    pub fn contains_entity(&self, entity_name: &str) -> bool {
        self.entities.contains_key(entity_name)
    }

    /// Names of indexed entities, in indexing order.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.keys().map(String::as_str)
    }

    /// Returns the number of indexed entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns the number of indexed attributes across all entities.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{IdentifierSource, PluralAttributeSource, SingularAttributeSource};

    fn person() -> EntitySource {
        EntitySource::root(
            "Person",
            IdentifierSource::Simple(SingularAttributeSource::basic("id")),
        )
        .with_attribute(SingularAttributeSource::basic("name"))
        .with_attribute(SingularAttributeSource::composite(
            "address",
            vec![
                SingularAttributeSource::basic("city").into(),
                SingularAttributeSource::basic("zip").into(),
            ],
        ))
    }

    #[test]
    fn person_scenario() {
        let index = SourceIndex::from_sources(IndexConfig::default(), [person()]).unwrap();

        let id = index.attribute_source("Person", "id").unwrap();
        assert_eq!(id.name(), "id");

        let city = index.attribute_source("Person", "address.city").unwrap();
        assert_eq!(city.name(), "city");

        let basic = index.singular_attributes_of("Person", SingularNature::Basic);
        let names: Vec<_> = basic.values().map(|source| source.name()).collect();
        assert_eq!(names, ["name", "city", "zip"]);
        assert!(!basic.contains_key(&AttributeKey::new("Person", "", "id")));
        assert!(!basic.contains_key(&AttributeKey::new("Person", "", "address")));

        let top_level: Vec<_> = basic
            .keys()
            .filter(|key| key.container_path().is_empty())
            .map(AttributeKey::attribute_name)
            .collect();
        assert_eq!(top_level, ["name"]);

        let identifier = index.identifier_attributes_of("Person", SingularNature::Basic);
        assert_eq!(identifier.len(), 1);
        assert_eq!(index.attribute_count(), 5);
    }

    #[test]
    fn unknown_lookups_are_absent() {
        let index = SourceIndex::from_sources(IndexConfig::default(), [person()]).unwrap();

        assert!(index.entity_source("Company").is_none());
        assert!(index.attribute_source("Company", "id").is_none());
        assert!(index.attribute_source("Person", "address.street").is_none());
        assert!(index
            .singular_attributes_of("Company", SingularNature::Basic)
            .is_empty());
        assert!(index
            .singular_attributes_of("Person", SingularNature::OneToOne)
            .is_empty());
        assert!(index
            .plural_attributes_of("Person", PluralNature::Bag)
            .is_empty());
    }

    #[test]
    fn reindexing_entity_fails() {
        let mut builder = SourceIndexBuilder::default();
        builder.index_entity(person()).unwrap();

        let err = builder.index_entity(person()).unwrap_err();
        assert_eq!(err, IndexError::duplicate_entity("Person"));
        assert!(err.is_consistency_violation());
        assert!(builder.is_poisoned());
    }

    #[test]
    fn poisoned_builder_refuses_work() {
        let broken = EntitySource::subclass("Broken")
            .with_attribute(SingularAttributeSource::basic("x"))
            .with_attribute(PluralAttributeSource::new("x", PluralNature::Set));

        let mut builder = SourceIndexBuilder::default();
        let err = builder.index_entity(broken).unwrap_err();
        assert_eq!(
            err,
            IndexError::duplicate_attribute(AttributeKey::new("Broken", "", "x"))
        );

        assert_eq!(
            builder.index_entity(person()).unwrap_err(),
            IndexError::poisoned("Broken")
        );
        assert_eq!(builder.build().unwrap_err(), IndexError::poisoned("Broken"));
    }

    #[test]
    fn subclass_entity_has_no_identifier_bucket() {
        let employee = EntitySource::subclass("Employee")
            .with_attribute(SingularAttributeSource::basic("salary"))
            .with_attribute(PluralAttributeSource::new("skills", PluralNature::Set));

        let index =
            SourceIndex::from_sources(IndexConfig::default(), [person(), employee]).unwrap();

        let employee = index.entity_index("Employee").unwrap();
        assert_eq!(employee.identifier_natures().count(), 0);
        assert!(index.attribute_source("Employee", "skills").is_some());
        assert!(index.attribute_source("Employee", "id").is_none());

        let names: Vec<_> = index.entity_names().collect();
        assert_eq!(names, ["Person", "Employee"]);
    }

    #[test]
    fn same_attribute_name_in_two_entities() {
        let company = EntitySource::root(
            "Company",
            IdentifierSource::Simple(SingularAttributeSource::basic("id")),
        )
        .with_attribute(SingularAttributeSource::basic("name"));

        let index =
            SourceIndex::from_sources(IndexConfig::default(), [person(), company]).unwrap();
        assert!(index.attribute_source("Company", "name").is_some());
        assert_eq!(index.entity_count(), 2);
        assert_eq!(index.attribute_count(), 7);
    }

    #[test]
    fn expected_entities_is_only_a_hint() {
        let company = EntitySource::subclass("Company")
            .with_attribute(SingularAttributeSource::basic("name"));

        let config = IndexConfig::new().expected_entities(1);
        let index = SourceIndex::from_sources(config, [person(), company]).unwrap();
        assert_eq!(index.entity_count(), 2);
        assert!(index.attribute_source("Company", "name").is_some());
    }

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceIndex>();
    }
}
