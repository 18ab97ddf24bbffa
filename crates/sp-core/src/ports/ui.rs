use async_trait::async_trait;

use crate::popup::SessionSnapshot;

/// UI port - receives a fresh session snapshot after every mutation.
///
/// Rendering must not fail the controller; implementations swallow their
/// own errors.
#[async_trait]
pub trait PopupUiPort: Send + Sync {
    async fn render(&self, snapshot: SessionSnapshot);
}
