//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod exposure_handler;
pub mod profile_handler;
pub mod settings_handler;
pub mod tab_handler;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{AppState, ExposureField, InputMode, SettingsField, Tab};
pub use profile_handler::ProfileCommand;
pub use tab_handler::handle_tab_action;
