use std::sync::Arc;

use log::{info, warn};

use sp_core::actions::AiActionCandidate;
use sp_core::content::ContentFragment;
use sp_core::ports::AiSuggestionsPort;

/// Outcome of one suggestion fetch.
///
/// Failure is a domain fact rather than an error: the rule-only list
/// already on screen stays authoritative, and the only required effect is
/// clearing the pending indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionFetch {
    Resolved(Vec<AiActionCandidate>),
    Failed,
}

/// Use case that retrieves AI action suggestions for a content fragment.
///
/// Responsibilities:
/// - Call the remote suggestion collaborator
/// - Translate a rejection or timeout into [`SuggestionFetch::Failed`]
///   instead of propagating it; a missing suggestion list must never take
///   the popup down.
pub struct FetchSuggestions<S>
where
    S: AiSuggestionsPort + ?Sized,
{
    suggestions: Arc<S>,
}

impl<S> FetchSuggestions<S>
where
    S: AiSuggestionsPort + ?Sized,
{
    pub fn new(suggestions: Arc<S>) -> Self {
        Self { suggestions }
    }

    pub async fn execute(&self, fragment: &ContentFragment) -> SuggestionFetch {
        match self
            .suggestions
            .fetch(&fragment.content, fragment.content_type)
            .await
        {
            Ok(candidates) => {
                info!(
                    "AI suggestions resolved: {} candidates for {:?}",
                    candidates.len(),
                    fragment.content_type
                );
                SuggestionFetch::Resolved(candidates)
            }
            Err(e) => {
                warn!("AI suggestion fetch failed, keeping rule-only list: {}", e);
                SuggestionFetch::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sp_core::content::ContentType;

    struct StubSuggestions {
        should_fail: bool,
    }

    #[async_trait]
    impl AiSuggestionsPort for StubSuggestions {
        async fn fetch(
            &self,
            _content: &str,
            _content_type: ContentType,
        ) -> anyhow::Result<Vec<AiActionCandidate>> {
            if self.should_fail {
                anyhow::bail!("backend unreachable");
            }
            Ok(vec![AiActionCandidate::new("ai_translate", "AI Translate")])
        }
    }

    #[tokio::test]
    async fn resolved_fetch_carries_candidates() {
        let usecase = FetchSuggestions::new(Arc::new(StubSuggestions { should_fail: false }));
        let fragment = ContentFragment::new("bonjour", ContentType::PlainText);

        match usecase.execute(&fragment).await {
            SuggestionFetch::Resolved(candidates) => {
                assert_eq!(candidates.len(), 1);
                assert_eq!(candidates[0].id.as_deref(), Some("ai_translate"));
            }
            SuggestionFetch::Failed => panic!("expected resolution"),
        }
    }

    #[tokio::test]
    async fn failed_fetch_is_absorbed() {
        let usecase = FetchSuggestions::new(Arc::new(StubSuggestions { should_fail: true }));
        let fragment = ContentFragment::new("bonjour", ContentType::PlainText);

        assert_eq!(usecase.execute(&fragment).await, SuggestionFetch::Failed);
    }
}
