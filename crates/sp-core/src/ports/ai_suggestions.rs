use anyhow::Result;
use async_trait::async_trait;

use crate::actions::AiActionCandidate;
use crate::content::ContentType;

/// AI suggestion port - abstracts the remote intent-prediction call.
///
/// The backend truncates its own output to at most 3 candidates; callers
/// consume only `id`, `label`, `icon` and `reason`. The call may be slow
/// or fail outright; the popup must keep working on the rule-only list
/// either way.
#[async_trait]
pub trait AiSuggestionsPort: Send + Sync {
    async fn fetch(&self, content: &str, content_type: ContentType)
        -> Result<Vec<AiActionCandidate>>;
}
