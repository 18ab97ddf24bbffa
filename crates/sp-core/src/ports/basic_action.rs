use anyhow::Result;
use async_trait::async_trait;

/// Basic action port - abstracts deterministic fire-and-forget effects
/// (open URL, compose email, save file, ...).
///
/// The collaborator's return value is unused; only success or failure
/// matters here, and failures are surfaced via logs rather than the UI.
#[async_trait]
pub trait BasicActionPort: Send + Sync {
    async fn run(&self, action_id: &str, content: &str) -> Result<()>;
}
