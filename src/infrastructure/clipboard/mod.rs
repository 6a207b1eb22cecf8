//! Clipboard access for the copy acknowledgement.
//!
//! Provides a [`ClipboardService`] trait with two implementations:
//! - [`SystemClipboard`] - Platform clipboard program
//! - [`MemoryClipboard`] - In-process fallback

mod memory_clipboard;
mod service;
mod system_clipboard;

pub use memory_clipboard::MemoryClipboard;
#[cfg(test)]
pub use service::MockClipboardService;
pub use service::{ClipboardError, ClipboardResult, ClipboardService};
pub use system_clipboard::SystemClipboard;
