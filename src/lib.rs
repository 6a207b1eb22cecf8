//! # Shortlink Client
//!
//! Client for a link-shortening service: shorten a URL, look up a slug,
//! inspect its statistics and delete it.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entities, request lifecycle and the repository trait
//! - **Application Layer** ([`application`]) - The creation, lookup and details flows
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP repository and clipboard access
//! - **API Layer** ([`api`]) - Wire DTOs and endpoint paths of the backend
//!
//! ## Features
//!
//! - URL normalization and validation before any request is sent
//! - Optional expiration, validated against the current time
//! - Pending gates and generation tokens so stale responses are never applied
//! - Clipboard acknowledgement with a self-clearing "copied" flag
//! - Deletion gated by explicit confirmation
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="http://localhost:3000"
//! cargo run -- shorten example.com --copy
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use error::ClientError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::flows::{
        CreationFlow, DeleteOutcome, DetailsFlow, DetailsView, LookupFlow,
    };
    pub use crate::domain::entities::{LinkRecord, NewLink, ShortLink};
    pub use crate::domain::navigation::Route;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::ClientError;
    pub use crate::infrastructure::clipboard::{ClipboardService, MemoryClipboard};
    pub use crate::infrastructure::http::HttpLinkRepository;
}
