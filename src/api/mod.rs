//! Backend API contract: endpoint paths and wire DTOs.
//!
//! - [`routes`] - Endpoint URL construction
//! - [`dto`] - Request and response bodies

pub mod dto;
pub mod routes;
