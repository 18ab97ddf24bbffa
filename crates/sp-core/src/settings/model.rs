use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables of the popup controller.
///
/// All values have fixed product defaults (see `defaults.rs`); the struct
/// exists so hosts and tests can shorten the timers without patching code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupSettings {
    /// Combined slot budget for rule plus AI actions.
    pub merge_capacity: usize,

    /// Auto-dismiss delay when no interaction has been observed.
    pub idle_dismiss: Duration,

    /// Auto-dismiss delay for a displayed non-error result.
    pub result_dismiss: Duration,

    /// Display window for a failure result before the popup closes itself.
    pub error_dismiss: Duration,
}
