//! Index structures over mapping sources.
//!
//! # Structures
//!
//! - [`AttributeKey`]: `(entity, container path, attribute name)` key
//! - [`EntitySourceIndex`]: one entity's attributes grouped by nature
//! - [`SourceIndexBuilder`] / [`SourceIndex`]: all entities plus a flat
//!   map from attribute key to attribute source
//!
//! # Invariants
//!
//! - At most one attribute source is registered per key
//! - A singular attribute is in the identifier buckets or the regular
//!   buckets of its entity, never both
//! - Bucket contents keep visit order

mod entity;
mod global;
mod key;
mod view;
mod walker;

pub use entity::EntitySourceIndex;
pub use global::{SourceIndex, SourceIndexBuilder};
pub use key::AttributeKey;
pub use view::{AttributeView, PluralAttributes, SingularAttributes, ViewIter};
