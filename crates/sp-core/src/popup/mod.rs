//! Popup lifecycle domain: the session aggregate and the pure state machine.

mod session;
mod state_machine;

#[cfg(test)]
mod tests;

pub use session::{PopupSession, SessionSnapshot};
pub use state_machine::{
    DispatchOutcome, PopupAction, PopupEvent, PopupState, PopupStateMachine, TimeoutKind,
    TransitionContext,
};
