//! Data Transfer Objects for the backend's JSON contract.
//!
//! All DTOs use Serde. Field naming is tolerant where backends are known to
//! differ (camelCase and snake_case).

pub mod error;
pub mod shorten;
pub mod stats;
