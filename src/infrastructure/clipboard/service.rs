//! Clipboard service trait and error types.

use async_trait::async_trait;

/// Errors that can occur while writing to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard program unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Trait for placing text on a clipboard.
///
/// Writes are fire-and-forget from the user's perspective: callers report
/// success with a transient acknowledgement and never retry on failure.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - Pipes into the platform clipboard program
/// - [`crate::infrastructure::clipboard::MemoryClipboard`] - In-process clipboard for tests and headless use
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> ClipboardResult<()>;
}
