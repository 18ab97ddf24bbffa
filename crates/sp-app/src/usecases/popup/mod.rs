mod close_popup;
mod copy_result;
mod dispatch_action;
mod fetch_suggestions;
mod orchestrator;

pub use close_popup::{CloseEscalationError, CloseMethod, ClosePopup};
pub use copy_result::CopyResult;
pub use dispatch_action::{DispatchAction, AI_ACTION_ID_PREFIX};
pub use fetch_suggestions::{FetchSuggestions, SuggestionFetch};
pub use orchestrator::PopupOrchestrator;
