//! Suggestion merger.
//!
//! Combines the rule action table's output with asynchronously retrieved
//! AI candidates into one ordered, deduplicated, hotkey-numbered action
//! list under a fixed capacity.

use super::suggestion::{ActionSource, ActionSuggestion, AiActionCandidate};

/// Combined slot budget for rule plus AI actions.
pub const DEFAULT_MERGE_CAPACITY: usize = 6;

/// Merge with the default capacity.
pub fn merge(base: &[ActionSuggestion], ai_candidates: &[AiActionCandidate]) -> Vec<ActionSuggestion> {
    merge_with_capacity(base, ai_candidates, DEFAULT_MERGE_CAPACITY)
}

/// Merge `base` (always retained in full) with `ai_candidates`.
///
/// The base list establishes a floor of always-available deterministic
/// actions and is renumbered from "1" in its own order. Candidates are
/// considered in arrival order; a candidate is rejected when its `id`
/// matches an included entry, or when its `label` is a case-sensitive
/// substring of any included label. The substring check is deliberately
/// loose: it exists to avoid near-duplicate clutter such as "Search" next
/// to "Search Address". Malformed candidates (missing id or label) are
/// dropped. Never fails.
pub fn merge_with_capacity(
    base: &[ActionSuggestion],
    ai_candidates: &[AiActionCandidate],
    capacity: usize,
) -> Vec<ActionSuggestion> {
    let mut merged: Vec<ActionSuggestion> = base
        .iter()
        .enumerate()
        .map(|(i, action)| ActionSuggestion {
            hotkey: (i + 1).to_string(),
            ..action.clone()
        })
        .collect();

    for candidate in ai_candidates {
        if merged.len() >= capacity {
            break;
        }

        let (id, label) = match (&candidate.id, &candidate.label) {
            (Some(id), Some(label)) if !id.is_empty() && !label.is_empty() => (id, label),
            _ => continue,
        };

        let duplicate = merged
            .iter()
            .any(|existing| existing.id == *id || existing.label.contains(label.as_str()));
        if duplicate {
            continue;
        }

        merged.push(ActionSuggestion {
            id: id.clone(),
            label: label.clone(),
            icon: candidate.icon.clone().unwrap_or_default(),
            hotkey: (merged.len() + 1).to_string(),
            source: ActionSource::Ai,
            reason: candidate.reason.clone(),
        });
    }

    merged
}
