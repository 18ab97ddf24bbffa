use anyhow::Result;
use async_trait::async_trait;

/// Window port - the two external rungs of the close-escalation ladder.
///
/// `request_close` is the polite path; `destroy` is the window-destroy
/// primitive used when the polite path fails. The last rung (local close)
/// lives in the application layer and cannot fail.
#[async_trait]
pub trait PopupWindowPort: Send + Sync {
    async fn request_close(&self) -> Result<()>;

    async fn destroy(&self) -> Result<()>;
}
