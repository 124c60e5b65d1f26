//! Exposure tab keyboard action handler.
//!
//! Pure functions that transform AppState in response to form actions on the
//! Exposure tab: lighting condition, bracketing and the two correction flags.

use crate::model::{
    KeyAction, LightingCondition, LIGHTING_CONDITIONS, MAX_BRACKET_STOPS, MIN_BRACKET_STOPS,
};
use crate::state::settings_handler::Step;
use crate::state::{AppState, ExposureField};

/// Next lighting condition in catalog order, passing through "none".
///
/// The cycle is `None → first → … → last → None`. A name that is not in the
/// catalog counts as `None`.
pub fn step_condition(current: Option<&str>, forward: bool) -> Option<String> {
    let len = LIGHTING_CONDITIONS.len();
    // Position len stands for "none".
    let position = current.and_then(LightingCondition::index_of).unwrap_or(len);
    let next = if forward {
        (position + 1) % (len + 1)
    } else {
        (position + len) % (len + 1)
    };
    LIGHTING_CONDITIONS.get(next).map(|c| c.name.to_string())
}

/// Next bracket offset, clamped to `[MIN_BRACKET_STOPS, MAX_BRACKET_STOPS]`.
///
/// Fine steps move one stop; coarse steps go straight to the limit.
pub fn step_bracket(stops: f64, step: Step) -> f64 {
    let next = match step {
        Step::Up => stops + 1.0,
        Step::Down => stops - 1.0,
        Step::UpCoarse => MAX_BRACKET_STOPS,
        Step::DownCoarse => MIN_BRACKET_STOPS,
    };
    next.clamp(MIN_BRACKET_STOPS, MAX_BRACKET_STOPS)
}

/// Handle a keyboard action while the Exposure tab is active.
pub fn handle_exposure_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::NextField => {
            state.exposure_field = state.exposure_field.next();
            return state;
        }
        KeyAction::PrevField => {
            state.exposure_field = state.exposure_field.prev();
            return state;
        }
        _ => {}
    }

    let step = Step::from_action(action);
    if step.is_none() && action != KeyAction::Activate {
        return state;
    }
    let forward = step.map_or(true, Step::is_up);

    let settings = state.settings.clone();
    state.settings = match state.exposure_field {
        ExposureField::Condition => {
            let next = step_condition(settings.selected_condition.as_deref(), forward);
            settings.with_condition(next)
        }
        ExposureField::Bracket => match step {
            Some(step) => {
                let stops = step_bracket(settings.bracket_stops, step);
                settings.with_bracket_stops(stops)
            }
            // Activate resets bracketing.
            None => settings.with_bracket_stops(0.0),
        },
        ExposureField::Reciprocity => {
            let enabled = !settings.use_reciprocity_failure;
            settings.with_reciprocity_failure(enabled)
        }
        ExposureField::RedFilter => {
            let enabled = !settings.use_red_filter;
            settings.with_red_filter(enabled)
        }
    };
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "exposure_handler_tests.rs"]
mod tests;
