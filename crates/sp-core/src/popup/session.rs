use serde::{Deserialize, Serialize};

use crate::actions::{rules_for, ActionSuggestion, AiResult};
use crate::content::ContentFragment;
use crate::ids::SessionId;

use super::state_machine::PopupState;

/// Aggregate root for one popup instance, from content injection to close.
///
/// The session is mutated only by the orchestrator applying merger and
/// dispatcher outputs; UI layers receive read-only [`SessionSnapshot`]s.
///
/// Invariants:
/// - the UI is a strict function of `active_result` presence;
/// - `processing_action_id` is non-`None` only between dispatch start and
///   completion of exactly one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupSession {
    pub id: SessionId,
    pub fragment: ContentFragment,
    pub state: PopupState,

    /// Current action list; replaced wholesale when AI suggestions resolve.
    pub actions: Vec<ActionSuggestion>,

    /// True while the asynchronous suggestion fetch is outstanding.
    pub loading_suggestions: bool,

    pub active_result: Option<AiResult>,
    pub processing_action_id: Option<String>,

    /// Set on the first key or pointer event and never cleared; permanently
    /// disarms the idle auto-dismiss for the session.
    pub user_interacted: bool,
}

impl PopupSession {
    /// Opens a session: seeds the rule action table synchronously so the
    /// list is populated before any asynchronous suggestion arrives.
    pub fn open(fragment: ContentFragment) -> Self {
        let actions = rules_for(fragment.content_type);
        Self {
            id: SessionId::new(),
            fragment,
            state: PopupState::Selecting,
            actions,
            loading_suggestions: true,
            active_result: None,
            processing_action_id: None,
            user_interacted: false,
        }
    }

    pub fn action_at(&self, index: usize) -> Option<&ActionSuggestion> {
        self.actions.get(index)
    }

    pub fn is_closed(&self) -> bool {
        self.state == PopupState::Closed
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.clone(),
            state: self.state.clone(),
            content_preview: self.fragment.preview(100),
            content_type: self.fragment.content_type,
            actions: self.actions.clone(),
            loading_suggestions: self.loading_suggestions,
            active_result: self.active_result.clone(),
            user_interacted: self.user_interacted,
        }
    }
}

/// Read-only view pushed to the UI shell after every session mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub state: PopupState,
    pub content_preview: String,
    pub content_type: crate::content::ContentType,
    pub actions: Vec<ActionSuggestion>,
    pub loading_suggestions: bool,
    pub active_result: Option<AiResult>,
    pub user_interacted: bool,
}
