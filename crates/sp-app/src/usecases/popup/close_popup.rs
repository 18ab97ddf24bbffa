use std::sync::Arc;

use log::warn;

use sp_core::ports::PopupWindowPort;

/// Which rung of the close-escalation ladder succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseMethod {
    /// The polite close request was accepted.
    Requested,
    /// The window-destroy primitive had to be used.
    Destroyed,
}

/// Both external rungs failed; the caller must fall back to a local close.
#[derive(Debug, thiserror::Error)]
#[error("close request failed ({request}); window destroy failed ({destroy})")]
pub struct CloseEscalationError {
    request: String,
    destroy: String,
}

/// Use case that makes the popup disappear.
///
/// Escalates through the window collaborator's two mechanisms. The caller
/// performs the guaranteed last rung (marking the session closed locally)
/// whatever happens here, so the popup always eventually disappears.
pub struct ClosePopup {
    window: Arc<dyn PopupWindowPort>,
}

impl ClosePopup {
    pub fn new(window: Arc<dyn PopupWindowPort>) -> Self {
        Self { window }
    }

    pub async fn execute(&self) -> Result<CloseMethod, CloseEscalationError> {
        let request_error = match self.window.request_close().await {
            Ok(()) => return Ok(CloseMethod::Requested),
            Err(e) => {
                warn!("popup close request failed, destroying window: {}", e);
                e
            }
        };

        match self.window.destroy().await {
            Ok(()) => Ok(CloseMethod::Destroyed),
            Err(destroy_error) => Err(CloseEscalationError {
                request: request_error.to_string(),
                destroy: destroy_error.to_string(),
            }),
        }
    }
}
