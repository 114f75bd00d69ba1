//! Mapping sources consumed by the index.
//!
//! These types are produced by the mapping parser. The index only reads
//! them: names, natures, identifier shape and composite nesting.

mod attribute;
mod entity;
mod nature;

pub use attribute::{AttributeSource, PluralAttributeSource, SingularAttributeSource};
pub use entity::{EntitySource, IdentifierSource};
pub use nature::{IdentifierNature, PluralNature, SingularNature};
