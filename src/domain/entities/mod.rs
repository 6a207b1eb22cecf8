//! Data the client exchanges with the backend.
//!
//! - [`LinkRecord`] - Statistics for an existing link
//! - [`ShortLink`] - Result of a creation request
//! - [`NewLink`] - Validated creation input

pub mod link;

pub use link::{LinkRecord, NewLink, ShortLink};
