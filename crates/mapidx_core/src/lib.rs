//! # mapidx core
//!
//! Lookup index over mapping sources.
//!
//! An upstream mapping parser produces a tree of entity and attribute
//! sources. This crate walks each tree once and builds:
//! - a flat map from `entity.attribute.path` to the attribute source
//! - per-entity buckets of singular attributes grouped by nature, with
//!   identifier attributes kept apart from regular ones
//! - per-entity buckets of plural attributes grouped by nature
//!
//! ## Usage
//!
//! ```
//! use mapidx_core::source::{EntitySource, IdentifierSource, SingularAttributeSource};
//! use mapidx_core::{IndexConfig, SingularNature, SourceIndexBuilder};
//!
//! let person = EntitySource::root(
//!     "Person",
//!     IdentifierSource::Simple(SingularAttributeSource::basic("id")),
//! )
//! .with_attribute(SingularAttributeSource::basic("name"))
//! .with_attribute(SingularAttributeSource::composite(
//!     "address",
//!     vec![SingularAttributeSource::basic("city").into()],
//! ));
//!
//! let mut builder = SourceIndexBuilder::new(IndexConfig::default());
//! builder.index_entity(person).unwrap();
//! let index = builder.build().unwrap();
//!
//! assert!(index.attribute_source("Person", "address.city").is_some());
//! // `name` and `address.city`; `id` sits in the identifier bucket.
//! assert_eq!(index.singular_attributes_of("Person", SingularNature::Basic).len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod index;
pub mod source;

pub use config::IndexConfig;
pub use error::{IndexError, IndexResult};
pub use index::{
    AttributeKey, EntitySourceIndex, PluralAttributes, SingularAttributes, SourceIndex,
    SourceIndexBuilder,
};
pub use source::{IdentifierNature, PluralNature, SingularNature};
