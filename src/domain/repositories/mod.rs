//! Repository trait definitions for the domain layer.
//!
//! The flows depend on [`LinkRepository`] only; the HTTP implementation lives
//! in `crate::infrastructure::http`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
