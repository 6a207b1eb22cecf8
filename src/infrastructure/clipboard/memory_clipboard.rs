//! In-process clipboard.

use super::service::{ClipboardResult, ClipboardService};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

/// A clipboard that keeps its contents in memory.
///
/// For embedders without a system clipboard and for tests that need to
/// observe what was copied.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last text written, if any.
    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl ClipboardService for MemoryClipboard {
    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        debug!(len = text.len(), "Writing to in-memory clipboard");
        *self.contents.lock().await = Some(text.to_string());
        Ok(())
    }
}
