//! Application layer: the client flows.
//!
//! Flows orchestrate validation, repository calls and view state. They take
//! their collaborators (repository, clipboard) at construction and never read
//! configuration on their own.
//!
//! # Available Flows
//!
//! - [`flows::CreationFlow`] - Link creation and clipboard acknowledgement
//! - [`flows::LookupFlow`] - Slug search
//! - [`flows::DetailsFlow`] - Statistics and deletion

pub mod flows;
