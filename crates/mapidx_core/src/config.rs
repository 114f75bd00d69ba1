//! Index configuration.

/// Configuration for building a source index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Maximum nesting depth of composite attributes below an entity.
    ///
    /// Top-level attributes sit at depth 1. `None` leaves depth unbounded.
    pub max_nesting_depth: Option<usize>,

    /// Number of entities expected.
    ///
    /// Only the entity map is pre-sized; the attribute map grows on demand.
    pub expected_entities: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: None,
            expected_entities: 0,
        }
    }
}

impl IndexConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the composite nesting depth.
    #[must_use]
    pub const fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = Some(depth);
        self
    }

    /// Sets the expected number of entities.
    #[must_use]
    pub const fn expected_entities(mut self, count: usize) -> Self {
        self.expected_entities = count;
        self
    }
}
