//! Action domain models: the rule action table and the suggestion merger.

mod merge;
mod result;
mod rules;
mod suggestion;

#[cfg(test)]
mod tests;

pub use merge::{merge, merge_with_capacity, DEFAULT_MERGE_CAPACITY};
pub use result::{AiResult, ERROR_ACTION_TYPE};
pub use rules::rules_for;
pub use suggestion::{ActionSource, ActionSuggestion, AiActionCandidate};
