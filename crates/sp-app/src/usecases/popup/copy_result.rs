use anyhow::Result;
use std::sync::Arc;

use sp_core::actions::AiResult;
use sp_core::ports::ClipboardWriterPort;

/// Copy a displayed AI result back into the system clipboard.
///
/// Represents the user intention to keep the processed text. Non-fatal on
/// failure; the caller logs and the popup stays up.
pub struct CopyResult {
    clipboard: Arc<dyn ClipboardWriterPort>,
}

impl CopyResult {
    pub fn new(clipboard: Arc<dyn ClipboardWriterPort>) -> Self {
        Self { clipboard }
    }

    pub async fn execute(&self, result: &AiResult) -> Result<()> {
        self.clipboard.write_text(&result.content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ClipboardWriterPort for RecordingClipboard {
        async fn write_text(&self, content: &str) -> anyhow::Result<()> {
            self.written.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn copies_result_content_verbatim() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let usecase = CopyResult::new(clipboard.clone());
        let result = AiResult::completed("Bonjour".to_string(), "translate".to_string(), 120);

        usecase.execute(&result).await.unwrap();

        assert_eq!(*clipboard.written.lock().unwrap(), vec!["Bonjour"]);
    }
}
