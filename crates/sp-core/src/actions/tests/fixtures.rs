//! Test fixtures and helper functions for action tests.

use crate::actions::{ActionSuggestion, AiActionCandidate};

/// Creates a rule action with a placeholder icon.
pub fn rule_action(id: &str, label: &str, hotkey: &str) -> ActionSuggestion {
    ActionSuggestion::rule(id, label, "📋", hotkey)
}

/// Creates a well-formed AI candidate.
pub fn ai_candidate(id: &str, label: &str) -> AiActionCandidate {
    AiActionCandidate::new(id, label)
}

/// Creates a candidate missing its id, as a malformed backend response.
pub fn malformed_candidate(label: &str) -> AiActionCandidate {
    AiActionCandidate {
        id: None,
        label: Some(label.to_string()),
        icon: None,
        hotkey: None,
        source: None,
        reason: None,
        confidence: None,
    }
}
