//! # heartline-catalog
//!
//! Static response content for the heartline classifier.
//!
//! The catalog maps a `(category, age group, reason)` key to a non-empty list
//! of authored variants, each a caring reply plus an ordered list of coping
//! tips. Content is kept apart from the classification logic so that replies
//! can be edited, or replaced per deployment with a TOML overlay, without
//! touching control flow.
//!
//! ## Guarantees
//!
//! - The catalog is immutable after construction and safe to share across
//!   threads.
//! - [`ResponseCatalog::validate`] proves every reachable bucket is populated.
//!   Callers run it once at startup and refuse to serve on failure.
//! - Variant selection takes the caller's random source, so draws are
//!   reproducible under a seeded RNG.

mod builtin;
pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::ResponseCatalog;
pub use error::{CatalogError, Result};
pub use types::{AgeGroup, BucketKey, Category, Reason, Variant};
