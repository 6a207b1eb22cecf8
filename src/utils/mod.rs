//! Helpers shared by the flows.
//!
//! - [`url_normalizer`] - URL normalization and validation
//! - [`expiration`] - Expiration input parsing and validation
//! - [`timestamp`] - Tolerant timestamp parsing and local-time rendering

pub mod expiration;
pub mod timestamp;
pub mod url_normalizer;
