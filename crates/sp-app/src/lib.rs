//! # sp-app
//!
//! Application layer for the SmartClip action popup. Use cases coordinate
//! the pure domain logic in `sp-core` with the external collaborators
//! behind its ports; the [`usecases::popup::PopupOrchestrator`] drives one
//! popup session from content injection to close.

pub mod usecases;

pub use usecases::popup::PopupOrchestrator;
