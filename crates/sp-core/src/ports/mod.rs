//! Port interfaces for the application layer
//!
//! Ports define the contract between the popup controller's use cases and
//! the external collaborators (the AI backend, the system clipboard, the
//! window shell, the UI). The controller's core logic never talks to any
//! of these directly; infrastructure implements the traits.

mod ai_suggestions;
mod ai_task;
mod basic_action;
mod clipboard;
mod clock;
mod ui;
mod window;


pub use ai_suggestions::AiSuggestionsPort;
pub use ai_task::AiTaskPort;
pub use basic_action::BasicActionPort;
pub use clipboard::ClipboardWriterPort;
pub use clock::{ClockPort, SystemClock};
pub use ui::PopupUiPort;
pub use window::PopupWindowPort;
