//! Profile management actions (pure state transitions).
//!
//! Creating, updating, deleting and reloading profiles needs the store, which
//! this layer never touches. Handlers instead return a [`ProfileCommand`] for
//! the shell to execute; the shell then feeds the resulting list back through
//! [`AppState::replace_profiles`].

use crate::model::{KeyAction, ProfileId};
use crate::state::{AppState, InputMode};

/// Storage work requested by a profile action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommand {
    /// Snapshot the current settings under a new name.
    Create {
        /// Trimmed, non-empty display name.
        name: String,
    },
    /// Overwrite a profile with the current settings.
    Update(ProfileId),
    /// Remove a profile.
    Delete(ProfileId),
    /// Re-read the list from the store.
    Reload,
}

/// Handle a profile keyboard action from normal mode.
pub fn handle_profile_action(
    mut state: AppState,
    action: KeyAction,
) -> (AppState, Option<ProfileCommand>) {
    match action {
        KeyAction::NewProfile => (begin_naming(state), None),
        KeyAction::UpdateProfile | KeyAction::DeleteProfile => {
            let Some(id) = state.selected_profile_id().cloned() else {
                state.set_status("No profile selected");
                return (state, None);
            };
            let command = if action == KeyAction::UpdateProfile {
                ProfileCommand::Update(id)
            } else {
                ProfileCommand::Delete(id)
            };
            (state, Some(command))
        }
        KeyAction::ReloadProfiles => (state, Some(ProfileCommand::Reload)),
        _ => (state, None),
    }
}

/// Enter profile-name input with an empty buffer.
pub fn begin_naming(mut state: AppState) -> AppState {
    state.input = InputMode::NamingProfile {
        buffer: String::new(),
    };
    state.set_status("Profile name: Enter to save, Esc to cancel");
    state
}

/// Append a character to the name being typed.
///
/// No-op outside naming mode.
pub fn handle_char_input(mut state: AppState, ch: char) -> AppState {
    if let InputMode::NamingProfile { buffer } = &mut state.input {
        buffer.push(ch);
    }
    state
}

/// Delete the last character of the name being typed.
///
/// No-op outside naming mode or when the buffer is empty.
pub fn handle_backspace(mut state: AppState) -> AppState {
    if let InputMode::NamingProfile { buffer } = &mut state.input {
        buffer.pop();
    }
    state
}

/// Finish naming. A blank name keeps the input open.
pub fn submit_name(mut state: AppState) -> (AppState, Option<ProfileCommand>) {
    let InputMode::NamingProfile { buffer } = &state.input else {
        return (state, None);
    };

    let name = buffer.trim().to_string();
    if name.is_empty() {
        state.set_status("Profile name cannot be empty");
        return (state, None);
    }

    state.input = InputMode::Normal;
    state.status = None;
    (state, Some(ProfileCommand::Create { name }))
}

/// Leave naming mode without creating anything.
pub fn cancel_naming(mut state: AppState) -> AppState {
    if state.is_typing() {
        state.input = InputMode::Normal;
        state.set_status("New profile cancelled");
    }
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "profile_handler_tests.rs"]
mod tests;
