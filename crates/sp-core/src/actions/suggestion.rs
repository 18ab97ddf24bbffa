use serde::{Deserialize, Serialize};

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSource {
    /// Deterministic action derived purely from the content type.
    Rule,
    /// Action whose execution invokes the remote AI-processing collaborator.
    Ai,
}

/// One entry of the popup's action list.
///
/// Identity is `id`; uniqueness within a list is enforced by the merger.
/// Array position is meaningful: it determines both display order and the
/// digit assigned as hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSuggestion {
    pub id: String,
    pub label: String,
    pub icon: String,

    /// Single-digit keyboard shortcut, "1".."9", reflecting list position.
    pub hotkey: String,

    pub source: ActionSource,

    /// Why the AI proposed this action; `None` for rule actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ActionSuggestion {
    /// Deterministic action from the rule table.
    pub fn rule(id: &str, label: &str, icon: &str, hotkey: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            hotkey: hotkey.to_string(),
            source: ActionSource::Rule,
            reason: None,
        }
    }
}

/// Wire shape of one candidate returned by the external suggestion call.
///
/// The fields mirror what the suggestion backend emits; only `id`, `label`,
/// `icon` and `reason` are consumed here. `id`/`label` are optional so a
/// malformed candidate can be dropped instead of failing the merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiActionCandidate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub hotkey: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl AiActionCandidate {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            label: Some(label.to_string()),
            icon: None,
            hotkey: None,
            source: None,
            reason: None,
            confidence: None,
        }
    }

    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }
}
