//! Repository trait for remote link data access.

use crate::domain::entities::{LinkRecord, NewLink, ShortLink};
use crate::error::ClientError;
use async_trait::async_trait;

/// Repository interface over the link backend.
///
/// Each method is one request against the backend and is atomic from the
/// client's point of view. No method retries, times out or cancels on its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLinkRepository`] - HTTP/JSON implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/http_link_repository.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a short link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Server`] on any non-2xx status and
    /// [`ClientError::Transport`] on network or decoding failures.
    async fn create(&self, new_link: NewLink) -> Result<ShortLink, ClientError>;

    /// Fetches statistics for a slug.
    ///
    /// # Errors
    ///
    /// Unknown slugs surface as [`ClientError::Server`] (404-class), not as a
    /// distinct case.
    async fn find_stats(&self, slug: &str) -> Result<LinkRecord, ClientError>;

    /// Deletes a link by slug. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Server`] on any non-2xx status.
    async fn delete(&self, slug: &str) -> Result<(), ClientError>;
}
