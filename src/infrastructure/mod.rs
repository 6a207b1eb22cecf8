//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces the flows depend on.
//!
//! # Modules
//!
//! - [`http`] - Backend access over HTTP/JSON
//! - [`clipboard`] - Clipboard implementations

pub mod clipboard;
pub mod http;
