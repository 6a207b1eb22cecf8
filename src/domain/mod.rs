//! Domain layer: entities, request lifecycle and repository contracts.
//!
//! - [`entities`] - Link data exchanged with the backend
//! - [`request`] - Request status and generation tokens
//! - [`navigation`] - Navigation targets emitted by the flows
//! - [`repositories`] - Backend access trait

pub mod entities;
pub mod navigation;
pub mod repositories;
pub mod request;
