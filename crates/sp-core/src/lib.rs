//! # sp-core
//!
//! Core domain models and business logic for the SmartClip action popup.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod actions;
pub mod content;
pub mod ids;
pub mod popup;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use actions::{ActionSource, ActionSuggestion, AiActionCandidate, AiResult};
pub use content::{ContentFragment, ContentType};
pub use ids::SessionId;
pub use popup::{PopupSession, PopupState, SessionSnapshot};
pub use settings::PopupSettings;
