//! Error types for the source index.

use crate::index::AttributeKey;
use crate::source::SingularNature;
use thiserror::Error;

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur while building a source index.
///
/// Every variant is fatal for the model build that produced it. Lookups
/// that find nothing are not errors and return `None` or an empty view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The same attribute was reached twice while indexing.
    #[error("attempt to reindex attribute source for: [{key}]")]
    DuplicateAttribute {
        /// Key that was already registered.
        key: AttributeKey,
    },

    /// An entity with this name has already been indexed.
    #[error("attempt to reindex entity source: [{entity}]")]
    DuplicateEntity {
        /// Name of the entity.
        entity: String,
    },

    /// Identifier source does not have the shape its variant requires.
    #[error("unknown type of identifier for {entity}: attribute [{attribute}] has nature {nature:?}")]
    UnexpectedIdentifier {
        /// Entity owning the identifier.
        entity: String,
        /// Name of the offending identifier attribute.
        attribute: String,
        /// Nature found on the attribute.
        nature: SingularNature,
    },

    /// Composite attributes are nested deeper than the configured limit.
    #[error("composite nesting exceeds {limit} levels at [{key}]")]
    NestingTooDeep {
        /// Key of the attribute that crossed the limit.
        key: AttributeKey,
        /// Configured maximum depth.
        limit: usize,
    },

    /// A previous build step failed and the builder can no longer be used.
    #[error("source index is unusable after failing to index entity {entity}")]
    Poisoned {
        /// Entity whose indexing failed.
        entity: String,
    },
}

impl IndexError {
    /// Creates a duplicate attribute error.
    pub fn duplicate_attribute(key: AttributeKey) -> Self {
        Self::DuplicateAttribute { key }
    }

    /// Creates a duplicate entity error.
    pub fn duplicate_entity(entity: impl Into<String>) -> Self {
        Self::DuplicateEntity {
            entity: entity.into(),
        }
    }

    /// Creates an unexpected identifier error.
    pub fn unexpected_identifier(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        nature: SingularNature,
    ) -> Self {
        Self::UnexpectedIdentifier {
            entity: entity.into(),
            attribute: attribute.into(),
            nature,
        }
    }

    /// Creates a poisoned builder error.
    pub fn poisoned(entity: impl Into<String>) -> Self {
        Self::Poisoned {
            entity: entity.into(),
        }
    }

    /// Returns true if this error reports the same attribute or entity
    /// reaching the index twice.
    #[must_use]
    pub fn is_consistency_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAttribute { .. } | Self::DuplicateEntity { .. }
        )
    }
}
