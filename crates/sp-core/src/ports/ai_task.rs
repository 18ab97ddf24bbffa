use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

/// AI task port - abstracts the remote deep-processing call.
///
/// `task_type` is the bare task name ("translate", "summarize", ...), with
/// the popup's id marker already stripped. Returns the rendered result
/// text.
#[async_trait]
pub trait AiTaskPort: Send + Sync {
    async fn run(
        &self,
        task_type: &str,
        content: &str,
        parameters: HashMap<String, serde_json::Value>,
    ) -> Result<String>;
}
