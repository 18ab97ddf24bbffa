//! Popup orchestrator.
//!
//! Drives one popup session: runs the pure lifecycle state machine and
//! executes the side effects it emits (dispatching actions, arming and
//! cancelling timers, pushing UI snapshots, closing the window).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, warn, Instrument};

use sp_core::actions::merge_with_capacity;
use sp_core::content::ContentFragment;
use sp_core::ids::SessionId;
use sp_core::popup::{
    DispatchOutcome, PopupAction, PopupEvent, PopupSession, PopupStateMachine, SessionSnapshot,
    TimeoutKind, TransitionContext,
};
use sp_core::ports::{
    AiSuggestionsPort, AiTaskPort, BasicActionPort, ClipboardWriterPort, ClockPort, PopupUiPort,
    PopupWindowPort,
};
use sp_core::settings::PopupSettings;

use super::close_popup::ClosePopup;
use super::copy_result::CopyResult;
use super::dispatch_action::DispatchAction;
use super::fetch_suggestions::{FetchSuggestions, SuggestionFetch};

/// Orchestrator for one popup session, from content injection to close.
///
/// All event handling is serialized by a dispatch lock, so the session is
/// only ever mutated by one handler at a time; the asynchronous ports are
/// the only suspension points and their completions re-enter through
/// [`PopupOrchestrator::handle_event`]. A settled outcome that arrives
/// after the session closed is discarded by the state machine's sticky
/// `Closed` state, never applied to a torn-down session.
pub struct PopupOrchestrator {
    session_id: SessionId,
    settings: PopupSettings,

    session: Mutex<PopupSession>,
    // Serializes concurrent handle_event calls so two events never read
    // the same state and execute duplicate actions.
    dispatch_lock: Mutex<()>,
    timers: Mutex<HashMap<TimeoutKind, tokio::task::AbortHandle>>,

    fetch_suggestions: FetchSuggestions<dyn AiSuggestionsPort>,
    dispatch_action: DispatchAction,
    close_popup: ClosePopup,
    copy_result: CopyResult,
    ui: Arc<dyn PopupUiPort>,
}

impl PopupOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        fragment: ContentFragment,
        settings: PopupSettings,
        suggestions: Arc<dyn AiSuggestionsPort>,
        ai_tasks: Arc<dyn AiTaskPort>,
        basic_actions: Arc<dyn BasicActionPort>,
        clipboard: Arc<dyn ClipboardWriterPort>,
        window: Arc<dyn PopupWindowPort>,
        ui: Arc<dyn PopupUiPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Arc<Self> {
        let session = PopupSession::open(fragment);
        Arc::new(Self {
            session_id: session.id.clone(),
            settings,
            session: Mutex::new(session),
            dispatch_lock: Mutex::new(()),
            timers: Mutex::new(HashMap::new()),
            fetch_suggestions: FetchSuggestions::new(suggestions),
            dispatch_action: DispatchAction::new(ai_tasks, basic_actions, clock),
            close_popup: ClosePopup::new(window),
            copy_result: CopyResult::new(clipboard),
            ui,
        })
    }

    /// Shows the popup: renders the rule-only list immediately, arms the
    /// idle timer, and requests AI suggestions in the background.
    pub async fn open(self: &Arc<Self>) {
        self.render().await;
        self.handle_event(PopupEvent::Opened).await;

        let fragment = self.session.lock().await.fragment.clone();
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move {
            let event = match orchestrator.fetch_suggestions.execute(&fragment).await {
                SuggestionFetch::Resolved(candidates) => {
                    PopupEvent::SuggestionsResolved { candidates }
                }
                SuggestionFetch::Failed => PopupEvent::SuggestionsFailed,
            };
            orchestrator.handle_event(event).await;
        });
    }

    /// Routes a captured key press into the lifecycle.
    pub async fn handle_key(self: &Arc<Self>, key: &str, modifier: bool) {
        self.handle_event(PopupEvent::from_key(key, modifier)).await;
    }

    /// Pointer pick of the action at `index` (same semantics as its digit).
    pub async fn pick_action(self: &Arc<Self>, index: usize) {
        self.handle_event(PopupEvent::DigitPressed { index }).await;
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn handle_event(self: &Arc<Self>, event: PopupEvent) {
        // Serialize event handling; see struct docs.
        let _dispatch_guard = self.dispatch_lock.lock().await;

        let span = info_span!("popup.handle_event", session_id = %self.session_id, event = ?event);
        async {
            let (from, next, actions) = {
                let mut session = self.session.lock().await;
                let ctx = TransitionContext {
                    action_count: session.actions.len(),
                    user_interacted: session.user_interacted,
                    settings: &self.settings,
                };
                let from = session.state.clone();
                let (next, actions) =
                    PopupStateMachine::transition(from.clone(), event, Utc::now(), &ctx);
                session.state = next.clone();
                (from, next, actions)
            };

            if from == next && actions.is_empty() {
                return;
            }

            info!(from = ?from, to = ?next, num_actions = actions.len(), "popup state transition");
            self.execute_actions(actions).await;
            self.render().await;
        }
        .instrument(span)
        .await
    }

    // Boxed return type breaks the recursive future cycle
    // (handle_event -> execute_actions -> spawned timer -> handle_event),
    // which otherwise prevents the compiler from proving `Send`.
    fn execute_actions<'a>(
        self: &'a Arc<Self>,
        actions: Vec<PopupAction>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
        for action in actions {
            match action {
                PopupAction::MarkInteracted => {
                    self.session.lock().await.user_interacted = true;
                }

                PopupAction::DispatchAction { index } => {
                    self.start_dispatch(index).await;
                }

                PopupAction::ApplySuggestions { candidates } => {
                    let mut session = self.session.lock().await;
                    session.actions = merge_with_capacity(
                        &session.actions,
                        &candidates,
                        self.settings.merge_capacity,
                    );
                }
                PopupAction::ClearLoadingFlag => {
                    self.session.lock().await.loading_suggestions = false;
                }

                PopupAction::ShowResult { result } => {
                    self.session.lock().await.active_result = Some(result);
                }
                PopupAction::ClearResult => {
                    self.session.lock().await.active_result = None;
                }
                PopupAction::ClearProcessing => {
                    self.session.lock().await.processing_action_id = None;
                }

                PopupAction::CopyResultToClipboard => {
                    let result = self.session.lock().await.active_result.clone();
                    if let Some(result) = result {
                        if let Err(e) = self.copy_result.execute(&result).await {
                            warn!(error = %e, "failed to copy result to clipboard");
                        }
                    }
                }

                PopupAction::RequestClose => match self.close_popup.execute().await {
                    Ok(method) => debug!(?method, "popup close delivered"),
                    Err(e) => {
                        // Last rung: the session state is already Closed and
                        // the timers are gone, so the popup is dead locally
                        // even if the window collaborator is unreachable.
                        error!(error = %e, "close escalation exhausted, local close only");
                    }
                },

                PopupAction::StartTimer { kind, deadline } => {
                    let sleep_duration = deadline
                        .signed_duration_since(Utc::now())
                        .to_std()
                        .unwrap_or_else(|_| std::time::Duration::from_secs(0));

                    let orchestrator = Arc::clone(self);
                    let handle = tokio::spawn(async move {
                        tokio::time::sleep(sleep_duration).await;
                        orchestrator.forget_timer(kind).await;
                        orchestrator.handle_event(PopupEvent::Timeout { kind }).await;
                    });

                    let mut timers = self.timers.lock().await;
                    if let Some(previous) = timers.insert(kind, handle.abort_handle()) {
                        previous.abort();
                    }
                }
                PopupAction::CancelTimer { kind } => {
                    let mut timers = self.timers.lock().await;
                    if let Some(handle) = timers.remove(&kind) {
                        handle.abort();
                    }
                }
                PopupAction::CancelAllTimers => {
                    let mut timers = self.timers.lock().await;
                    for (_kind, handle) in timers.drain() {
                        handle.abort();
                    }
                }
            }
        }
        })
    }

    /// Resolves the picked action and runs the dispatcher off the event
    /// path, so Escape stays responsive while the call is outstanding.
    async fn start_dispatch(self: &Arc<Self>, index: usize) {
        let picked = {
            let mut session = self.session.lock().await;
            match session.action_at(index).cloned() {
                Some(action) => {
                    session.processing_action_id = Some(action.id.clone());
                    Some((action, session.fragment.clone(), session.actions.clone()))
                }
                None => None,
            }
        };

        let orchestrator = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = match picked {
                Some((action, fragment, known_actions)) => {
                    orchestrator
                        .dispatch_action
                        .execute(&action.id, &fragment, &known_actions)
                        .await
                }
                // The index was validated against the list at key time; if
                // it no longer resolves, settle harmlessly instead of
                // wedging in Processing.
                None => DispatchOutcome::StayOpen,
            };
            orchestrator
                .handle_event(PopupEvent::DispatchSettled { outcome })
                .await;
        });
    }

    /// Drops a timer's own handle right before it fires, without aborting.
    async fn forget_timer(&self, kind: TimeoutKind) {
        self.timers.lock().await.remove(&kind);
    }

    async fn render(&self) {
        let snapshot = self.session.lock().await.snapshot();
        self.ui.render(snapshot).await;
    }
}
