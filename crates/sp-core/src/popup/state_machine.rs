//! Popup lifecycle state machine.
//!
//! Defines a pure state transition function for the action popup. Side
//! effects (dispatching an action, starting or cancelling timers, pushing
//! UI snapshots, closing the window) are described as [`PopupAction`]
//! values and executed by the application-layer orchestrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{AiActionCandidate, AiResult};
use crate::settings::PopupSettings;

/// Visible mode of the popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupState {
    /// Action list shown, waiting for a pick. Initial state.
    Selecting,
    /// Exactly one action dispatch in flight.
    Processing { index: usize },
    /// An AI outcome is displayed.
    ResultShown { error: bool },
    /// Terminal. Late events are no-ops.
    Closed,
}

/// Timers the popup can own. Only one state is active at a time, so at
/// most one of these is armed; every state exit cancels its own timer so a
/// stale expiry never fires into a later state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeoutKind {
    /// No interaction observed since the popup opened.
    IdleDismiss,
    /// A non-error result has been on screen long enough.
    ResultDismiss,
    /// Fixed display window for a failure result.
    ErrorDismiss,
}

/// What a settled action dispatch produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    /// Basic action ran; the popup's job is done.
    CloseNow,
    /// Basic action failed; logged only, popup stays selectable.
    StayOpen,
    /// AI task produced a displayable result (possibly a failure sentinel).
    ShowResult(AiResult),
}

/// Events that drive the popup lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PopupEvent {
    /// Popup finished construction; the rule list is already on screen.
    Opened,
    /// Digit key resolved to a 0-based action index.
    DigitPressed { index: usize },
    /// Escape at any non-terminal state.
    EscapePressed,
    /// Modifier+`c`, valid only while a result is shown.
    CopyResultShortcut,
    /// Modifier+`r`, valid only while a result is shown.
    RetryShortcut,
    /// Pointer activity that is not an action pick.
    PointerInteraction,
    /// The asynchronous suggestion fetch resolved.
    SuggestionsResolved { candidates: Vec<AiActionCandidate> },
    /// The asynchronous suggestion fetch failed or timed out.
    SuggestionsFailed,
    /// The in-flight dispatch settled.
    DispatchSettled { outcome: DispatchOutcome },
    /// An armed timer expired.
    Timeout { kind: TimeoutKind },
}

impl PopupEvent {
    /// Decodes a raw key press into a popup event.
    ///
    /// Keyboard capture itself belongs to the UI shell; this only maps the
    /// already-captured key. Unrecognized keys count as bare interaction so
    /// the idle timer still disarms.
    pub fn from_key(key: &str, modifier: bool) -> Self {
        match key {
            "Escape" => PopupEvent::EscapePressed,
            "c" | "C" if modifier => PopupEvent::CopyResultShortcut,
            "r" | "R" if modifier => PopupEvent::RetryShortcut,
            d if d.len() == 1 && d.as_bytes()[0].is_ascii_digit() && d != "0" => {
                PopupEvent::DigitPressed {
                    index: (d.as_bytes()[0] - b'1') as usize,
                }
            }
            _ => PopupEvent::PointerInteraction,
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PopupAction {
    /// Run the dispatcher for the action at `index`.
    DispatchAction { index: usize },
    /// Run the merger over the current list and these candidates.
    ApplySuggestions { candidates: Vec<AiActionCandidate> },
    /// The suggestion fetch settled; stop showing the pending indicator.
    ClearLoadingFlag,
    /// Record and display an AI result.
    ShowResult { result: AiResult },
    /// Drop the displayed result (retry path).
    ClearResult,
    /// Clear `processing_action_id`.
    ClearProcessing,
    /// Write the displayed result to the system clipboard.
    CopyResultToClipboard,
    /// Ask the window collaborator to close the popup.
    RequestClose,
    /// Mark the session as interacted-with (disarms idle dismiss forever).
    MarkInteracted,
    StartTimer {
        kind: TimeoutKind,
        deadline: DateTime<Utc>,
    },
    CancelTimer { kind: TimeoutKind },
    CancelAllTimers,
}

/// Session facts the pure transition needs but does not own.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub action_count: usize,
    pub user_interacted: bool,
    pub settings: &'a PopupSettings,
}

/// Pure popup state machine: no side effects, no clock access beyond the
/// injected `now`.
pub struct PopupStateMachine;

impl PopupStateMachine {
    pub fn transition(
        state: PopupState,
        event: PopupEvent,
        now: DateTime<Utc>,
        ctx: &TransitionContext<'_>,
    ) -> (PopupState, Vec<PopupAction>) {
        match (state, event) {
            // Closed is sticky: nothing revives a closed session, and late
            // dispatch outcomes or suggestion resolutions are discarded.
            (PopupState::Closed, _) => (PopupState::Closed, Vec::new()),

            (PopupState::Selecting, PopupEvent::Opened) => {
                let mut actions = Vec::new();
                if !ctx.user_interacted {
                    actions.push(PopupAction::StartTimer {
                        kind: TimeoutKind::IdleDismiss,
                        deadline: now + to_chrono(ctx.settings.idle_dismiss),
                    });
                }
                (PopupState::Selecting, actions)
            }

            (PopupState::Selecting, PopupEvent::DigitPressed { index }) => {
                let mut actions = interaction(ctx);
                if index >= ctx.action_count {
                    // Digit beyond the current list: no transition, no dispatch.
                    return (PopupState::Selecting, actions);
                }
                actions.push(PopupAction::DispatchAction { index });
                (PopupState::Processing { index }, actions)
            }

            // A second pick while one dispatch is outstanding is rejected,
            // not queued; this prevents double-execution from rapid
            // repeated key presses.
            (PopupState::Processing { index }, PopupEvent::DigitPressed { .. }) => {
                (PopupState::Processing { index }, interaction(ctx))
            }

            (PopupState::Processing { .. }, PopupEvent::DispatchSettled { outcome }) => {
                match outcome {
                    DispatchOutcome::CloseNow => (
                        PopupState::Closed,
                        vec![
                            PopupAction::ClearProcessing,
                            PopupAction::CancelAllTimers,
                            PopupAction::RequestClose,
                        ],
                    ),
                    DispatchOutcome::StayOpen => (
                        PopupState::Selecting,
                        vec![PopupAction::ClearProcessing],
                    ),
                    DispatchOutcome::ShowResult(result) => {
                        let error = result.is_error();
                        let timer = if error {
                            PopupAction::StartTimer {
                                kind: TimeoutKind::ErrorDismiss,
                                deadline: now + to_chrono(ctx.settings.error_dismiss),
                            }
                        } else {
                            PopupAction::StartTimer {
                                kind: TimeoutKind::ResultDismiss,
                                deadline: now + to_chrono(ctx.settings.result_dismiss),
                            }
                        };
                        (
                            PopupState::ResultShown { error },
                            vec![
                                PopupAction::ClearProcessing,
                                PopupAction::ShowResult { result },
                                timer,
                            ],
                        )
                    }
                }
            }

            (PopupState::ResultShown { error }, PopupEvent::CopyResultShortcut) => {
                let mut actions = interaction(ctx);
                actions.push(PopupAction::CopyResultToClipboard);
                (PopupState::ResultShown { error }, actions)
            }

            (PopupState::ResultShown { error }, PopupEvent::RetryShortcut) => {
                let mut actions = interaction(ctx);
                actions.push(PopupAction::CancelTimer {
                    kind: if error {
                        TimeoutKind::ErrorDismiss
                    } else {
                        TimeoutKind::ResultDismiss
                    },
                });
                actions.push(PopupAction::ClearResult);
                // The pre-result action list is retained, not recomputed.
                (PopupState::Selecting, actions)
            }

            // Escape closes from every non-terminal state. Leaving
            // Processing this way abandons the in-flight dispatch, so the
            // processing marker must not outlive the session.
            (state, PopupEvent::EscapePressed) => {
                let mut actions = interaction(ctx);
                if matches!(state, PopupState::Processing { .. }) {
                    actions.push(PopupAction::ClearProcessing);
                }
                actions.push(PopupAction::CancelAllTimers);
                actions.push(PopupAction::RequestClose);
                (PopupState::Closed, actions)
            }

            // Suggestion resolution may land after the user already acted
            // on the rule-only list; the refreshed list is still useful if
            // the user returns to Selecting via retry, so it is accepted in
            // every live state. It never touches an active result.
            (state, PopupEvent::SuggestionsResolved { candidates }) => (
                state,
                vec![
                    PopupAction::ApplySuggestions { candidates },
                    PopupAction::ClearLoadingFlag,
                ],
            ),
            (state, PopupEvent::SuggestionsFailed) => {
                (state, vec![PopupAction::ClearLoadingFlag])
            }

            (PopupState::Selecting, PopupEvent::Timeout { kind: TimeoutKind::IdleDismiss }) => {
                if ctx.user_interacted {
                    // Stale fire; the disarm already happened.
                    (PopupState::Selecting, Vec::new())
                } else {
                    (
                        PopupState::Closed,
                        vec![PopupAction::CancelAllTimers, PopupAction::RequestClose],
                    )
                }
            }

            (
                PopupState::ResultShown { error: false },
                PopupEvent::Timeout { kind: TimeoutKind::ResultDismiss },
            )
            | (
                PopupState::ResultShown { error: true },
                PopupEvent::Timeout { kind: TimeoutKind::ErrorDismiss },
            ) => (
                PopupState::Closed,
                vec![PopupAction::CancelAllTimers, PopupAction::RequestClose],
            ),

            (state, PopupEvent::PointerInteraction) => (state, interaction(ctx)),

            (state, event) => {
                debug!(?state, ?event, "event has no effect in this state");
                (state, Vec::new())
            }
        }
    }
}

/// First interaction disarms the idle timer for good; later ones are
/// no-ops and produce nothing.
fn interaction(ctx: &TransitionContext<'_>) -> Vec<PopupAction> {
    if ctx.user_interacted {
        Vec::new()
    } else {
        vec![
            PopupAction::MarkInteracted,
            PopupAction::CancelTimer {
                kind: TimeoutKind::IdleDismiss,
            },
        ]
    }
}

fn to_chrono(duration: std::time::Duration) -> chrono::Duration {
    chrono::Duration::from_std(duration).unwrap_or_else(|_| chrono::Duration::zero())
}
