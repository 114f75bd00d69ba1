//! # mapidx testkit
//!
//! Test utilities for mapidx.
//!
//! This crate provides:
//! - Canned entity sources for common mapping shapes
//! - Property-based generators for entity source trees using proptest
//! - A reference walk listing every attribute an entity should expose
//! - JSON fixture loading
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mapidx_testkit::prelude::*;
//!
//! #[test]
//! fn person_has_city() {
//!     let index = indexed(vec![person()]);
//!     assert!(index.attribute_source("Person", "address.city").is_some());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod json;
pub mod reachable;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::json::*;
    pub use crate::reachable::*;
}

pub use fixtures::*;
pub use generators::*;
pub use json::*;
pub use reachable::*;
