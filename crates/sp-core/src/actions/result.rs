use serde::{Deserialize, Serialize};

/// Sentinel `action_type` marking a failed AI invocation rather than a
/// genuine task type. Error results are rendered but never auto-dismissed
/// by the result timer.
pub const ERROR_ACTION_TYPE: &str = "error";

/// Outcome of one AI-processing invocation, successful or failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResult {
    pub content: String,
    pub action_type: String,

    /// Wall-clock duration of the remote call; absent for synthetic
    /// failure results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
}

impl AiResult {
    pub fn completed(content: String, action_type: String, processing_time_ms: u64) -> Self {
        Self {
            content,
            action_type,
            processing_time_ms: Some(processing_time_ms),
        }
    }

    /// Synthetic result standing in for a failed invocation, so the popup
    /// always has something to show.
    pub fn failure(message: String) -> Self {
        Self {
            content: message,
            action_type: ERROR_ACTION_TYPE.to_string(),
            processing_time_ms: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.action_type == ERROR_ACTION_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_result_is_error() {
        let result = AiResult::failure("Execution failed: timeout".to_string());
        assert!(result.is_error());
        assert_eq!(result.processing_time_ms, None);
    }

    #[test]
    fn test_completed_result_is_not_error() {
        let result = AiResult::completed("Bonjour".to_string(), "translate".to_string(), 120);
        assert!(!result.is_error());
        assert_eq!(result.processing_time_ms, Some(120));
    }
}
