use anyhow::Result;
use async_trait::async_trait;

/// Clipboard writer port - abstracts writing a result back to the system
/// clipboard.
#[async_trait]
pub trait ClipboardWriterPort: Send + Sync {
    async fn write_text(&self, content: &str) -> Result<()>;
}
