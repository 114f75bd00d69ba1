//! JSON fixture loading.
//!
//! Fixtures are JSON arrays of entity sources in the serde shape of
//! [`EntitySource`].

use mapidx_core::source::EntitySource;
use mapidx_core::{IndexConfig, IndexError, SourceIndex};
use thiserror::Error;

/// Errors raised while loading a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture is not valid JSON or does not match the source shape.
    #[error("invalid fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// The sources failed to index.
    #[error("fixture failed to index: {0}")]
    Index(#[from] IndexError),
}

/// Parses a JSON array of entity sources.
pub fn entities_from_json(json: &str) -> Result<Vec<EntitySource>, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a JSON array of entity sources and indexes them.
pub fn index_from_json(json: &str, config: IndexConfig) -> Result<SourceIndex, FixtureError> {
    let entities = entities_from_json(json)?;
    Ok(SourceIndex::from_sources(config, entities)?)
}

/// Serializes entity sources to pretty JSON.
pub fn entities_to_json(entities: &[EntitySource]) -> Result<String, FixtureError> {
    Ok(serde_json::to_string_pretty(entities)?)
}
