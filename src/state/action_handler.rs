//! Top-level routing of key actions to the pure handlers.

use crate::model::KeyAction;
use crate::state::exposure_handler::{handle_exposure_action, step_condition};
use crate::state::profile_handler::{handle_profile_action, ProfileCommand};
use crate::state::settings_handler::handle_settings_action;
use crate::state::tab_handler::handle_tab_action;
use crate::state::{AppState, Tab};

/// Route a key action to the handler that owns it.
///
/// While help is open only Help and Quit get through. Tab, shortcut and
/// profile actions work on every tab; field actions go to the active tab's
/// form. `Quit` is returned unchanged for the shell to act on.
pub fn handle_action(
    mut state: AppState,
    action: KeyAction,
) -> (AppState, Option<ProfileCommand>) {
    if state.help_visible && !action.allowed_during_help() {
        return (state, None);
    }

    match action {
        KeyAction::Help => {
            state.toggle_help();
            (state, None)
        }
        KeyAction::Quit => (state, None),
        KeyAction::NextTab | KeyAction::PrevTab | KeyAction::SelectTab(_) => {
            (handle_tab_action(state, action), None)
        }
        KeyAction::ToggleOrientation
        | KeyAction::ToggleReciprocity
        | KeyAction::ToggleRedFilter
        | KeyAction::CycleCondition => (handle_shortcut(state, action), None),
        KeyAction::NewProfile
        | KeyAction::UpdateProfile
        | KeyAction::DeleteProfile
        | KeyAction::ReloadProfiles => handle_profile_action(state, action),
        _ => match state.active_tab {
            Tab::Viewfinder => (state, None),
            Tab::Settings => (handle_settings_action(state, action), None),
            Tab::Exposure => (handle_exposure_action(state, action), None),
        },
    }
}

/// Single-key toggles that work from any tab.
pub fn handle_shortcut(mut state: AppState, action: KeyAction) -> AppState {
    let settings = state.settings.clone();
    state.settings = match action {
        KeyAction::ToggleOrientation => {
            let orientation = settings.film_orientation.toggled();
            settings.with_film_orientation(orientation)
        }
        KeyAction::ToggleReciprocity => {
            let enabled = !settings.use_reciprocity_failure;
            settings.with_reciprocity_failure(enabled)
        }
        KeyAction::ToggleRedFilter => {
            let enabled = !settings.use_red_filter;
            settings.with_red_filter(enabled)
        }
        KeyAction::CycleCondition => {
            let next = step_condition(settings.selected_condition.as_deref(), true);
            settings.with_condition(next)
        }
        _ => settings,
    };
    state
}
