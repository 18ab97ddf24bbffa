use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};

use sp_core::actions::{ActionSource, ActionSuggestion, AiResult};
use sp_core::content::ContentFragment;
use sp_core::popup::DispatchOutcome;
use sp_core::ports::{AiTaskPort, BasicActionPort, ClockPort};

/// Id marker for AI-processing tasks ("ai_translate", "ai_summarize", ...).
pub const AI_ACTION_ID_PREFIX: &str = "ai_";

/// The action dispatcher.
///
/// Given a chosen action id it decides between the AI-processing path and
/// the basic-action path, invokes the matching collaborator, and folds
/// every failure into a displayable outcome:
///
/// - AI failures become a synthetic error [`AiResult`] so the popup always
///   has something to show;
/// - basic-action failures are logged only and leave the popup open.
///
/// The orchestrator guarantees at most one dispatch is outstanding per
/// session.
pub struct DispatchAction {
    ai_tasks: Arc<dyn AiTaskPort>,
    basic_actions: Arc<dyn BasicActionPort>,
    clock: Arc<dyn ClockPort>,
}

impl DispatchAction {
    pub fn new(
        ai_tasks: Arc<dyn AiTaskPort>,
        basic_actions: Arc<dyn BasicActionPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            ai_tasks,
            basic_actions,
            clock,
        }
    }

    pub async fn execute(
        &self,
        action_id: &str,
        fragment: &ContentFragment,
        known_actions: &[ActionSuggestion],
    ) -> DispatchOutcome {
        if Self::is_ai_action(action_id, known_actions) {
            self.run_ai_task(action_id, fragment).await
        } else {
            self.run_basic_action(action_id, fragment).await
        }
    }

    /// A known entry tagged `source: ai` always takes the AI path; an
    /// unknown id falls back to prefix-based classification.
    fn is_ai_action(action_id: &str, known_actions: &[ActionSuggestion]) -> bool {
        if let Some(known) = known_actions.iter().find(|a| a.id == action_id) {
            if known.source == ActionSource::Ai {
                return true;
            }
        }
        action_id.starts_with(AI_ACTION_ID_PREFIX)
    }

    async fn run_ai_task(&self, action_id: &str, fragment: &ContentFragment) -> DispatchOutcome {
        let task_type = action_id
            .strip_prefix(AI_ACTION_ID_PREFIX)
            .unwrap_or(action_id);

        let started_ms = self.clock.now_ms();
        let result = self
            .ai_tasks
            .run(task_type, &fragment.content, HashMap::new())
            .await;
        let elapsed_ms = (self.clock.now_ms() - started_ms).max(0) as u64;

        match result {
            Ok(content) => {
                info!("AI task `{}` completed in {}ms", task_type, elapsed_ms);
                DispatchOutcome::ShowResult(AiResult::completed(
                    content,
                    task_type.to_string(),
                    elapsed_ms,
                ))
            }
            Err(e) => {
                warn!("AI task `{}` failed: {}", task_type, e);
                DispatchOutcome::ShowResult(AiResult::failure(format!("Execution failed: {}", e)))
            }
        }
    }

    async fn run_basic_action(
        &self,
        action_id: &str,
        fragment: &ContentFragment,
    ) -> DispatchOutcome {
        match self.basic_actions.run(action_id, &fragment.content).await {
            Ok(()) => {
                info!("basic action `{}` executed", action_id);
                DispatchOutcome::CloseNow
            }
            Err(e) => {
                // Fire-and-forget effects fail silently for the end user.
                warn!("basic action `{}` failed: {}", action_id, e);
                DispatchOutcome::StayOpen
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use sp_core::content::ContentType;

    mock! {
        Task {}

        #[async_trait]
        impl AiTaskPort for Task {
            async fn run(
                &self,
                task_type: &str,
                content: &str,
                parameters: HashMap<String, serde_json::Value>,
            ) -> anyhow::Result<String>;
        }
    }

    mock! {
        Basic {}

        #[async_trait]
        impl BasicActionPort for Basic {
            async fn run(&self, action_id: &str, content: &str) -> anyhow::Result<()>;
        }
    }

    struct StubClock {
        readings: std::sync::Mutex<Vec<i64>>,
    }

    impl StubClock {
        fn with_readings(readings: Vec<i64>) -> Arc<Self> {
            Arc::new(Self {
                readings: std::sync::Mutex::new(readings),
            })
        }
    }

    impl ClockPort for StubClock {
        fn now_ms(&self) -> i64 {
            let mut readings = self.readings.lock().unwrap();
            if readings.len() > 1 {
                readings.remove(0)
            } else {
                readings[0]
            }
        }
    }

    fn fragment() -> ContentFragment {
        ContentFragment::new("bonjour", ContentType::PlainText)
    }

    fn ai_known_action(id: &str) -> ActionSuggestion {
        ActionSuggestion {
            id: id.to_string(),
            label: "AI Something".to_string(),
            icon: String::new(),
            hotkey: "2".to_string(),
            source: ActionSource::Ai,
            reason: None,
        }
    }

    fn dispatcher(ai: MockTask, basic: MockBasic, clock: Arc<StubClock>) -> DispatchAction {
        DispatchAction::new(Arc::new(ai), Arc::new(basic), clock)
    }

    #[tokio::test]
    async fn ai_task_success_measures_elapsed_time() {
        let mut ai = MockTask::new();
        ai.expect_run()
            .withf(|task_type, content, _| task_type == "translate" && content == "bonjour")
            .returning(|_, _, _| Ok("Bonjour".to_string()));

        let clock = StubClock::with_readings(vec![1000, 1120]);
        let dispatcher = dispatcher(ai, MockBasic::new(), clock);

        let outcome = dispatcher
            .execute("ai_translate", &fragment(), &[])
            .await;

        assert_eq!(
            outcome,
            DispatchOutcome::ShowResult(AiResult::completed(
                "Bonjour".to_string(),
                "translate".to_string(),
                120,
            ))
        );
    }

    #[tokio::test]
    async fn ai_task_failure_becomes_error_result() {
        let mut ai = MockTask::new();
        ai.expect_run()
            .returning(|_, _, _| anyhow::bail!("model timeout"));

        let dispatcher = dispatcher(ai, MockBasic::new(), StubClock::with_readings(vec![0]));

        let outcome = dispatcher.execute("ai_summarize", &fragment(), &[]).await;

        match outcome {
            DispatchOutcome::ShowResult(result) => {
                assert!(result.is_error());
                assert!(result.content.starts_with("Execution failed:"));
                assert!(result.content.contains("model timeout"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn ai_source_wins_over_missing_prefix() {
        let mut ai = MockTask::new();
        ai.expect_run()
            .withf(|task_type, _, _| task_type == "smart_reply")
            .returning(|_, _, _| Ok("done".to_string()));
        let mut basic = MockBasic::new();
        basic.expect_run().never();

        let dispatcher = dispatcher(ai, basic, StubClock::with_readings(vec![0]));

        // No "ai_" prefix, but the known-action list marks it as AI.
        let outcome = dispatcher
            .execute("smart_reply", &fragment(), &[ai_known_action("smart_reply")])
            .await;

        assert!(matches!(outcome, DispatchOutcome::ShowResult(_)));
    }

    #[tokio::test]
    async fn unknown_id_with_prefix_takes_ai_path() {
        let mut ai = MockTask::new();
        ai.expect_run().returning(|_, _, _| Ok("ok".to_string()));

        let dispatcher = dispatcher(ai, MockBasic::new(), StubClock::with_readings(vec![0]));

        let outcome = dispatcher.execute("ai_unknown", &fragment(), &[]).await;
        assert!(matches!(outcome, DispatchOutcome::ShowResult(_)));
    }

    #[tokio::test]
    async fn basic_action_success_requests_close() {
        let mut basic = MockBasic::new();
        basic
            .expect_run()
            .withf(|action_id, content| action_id == "open_browser" && content == "bonjour")
            .returning(|_, _| Ok(()));

        let dispatcher = dispatcher(MockTask::new(), basic, StubClock::with_readings(vec![0]));

        let outcome = dispatcher.execute("open_browser", &fragment(), &[]).await;
        assert_eq!(outcome, DispatchOutcome::CloseNow);
    }

    #[tokio::test]
    async fn basic_action_failure_stays_open() {
        let mut basic = MockBasic::new();
        basic
            .expect_run()
            .returning(|_, _| anyhow::bail!("spawn failed"));

        let dispatcher = dispatcher(MockTask::new(), basic, StubClock::with_readings(vec![0]));

        let outcome = dispatcher.execute("open_browser", &fragment(), &[]).await;
        assert_eq!(outcome, DispatchOutcome::StayOpen);
    }
}
