//! Settings tab keyboard action handler.
//!
//! Pure functions that transform AppState in response to form actions on the
//! Settings tab. Adjusters keep values positive: inputs reaching the exposure
//! model are trusted, so this is where they are kept sane.

use crate::model::{FilmFormat, KeyAction, FILM_FORMATS};
use crate::state::{AppState, SettingsField};

/// Smallest focal length the adjuster goes down to, in millimetres.
pub const MIN_FOCAL_LENGTH: f64 = 1.0;
/// Smallest pinhole diameter the adjuster goes down to, in millimetres.
pub const MIN_PINHOLE_SIZE: f64 = 0.01;

const FOCAL_STEP: f64 = 1.0;
const FOCAL_STEP_COARSE: f64 = 10.0;
const PINHOLE_STEP: f64 = 0.01;
const PINHOLE_STEP_COARSE: f64 = 0.1;

/// Film speeds offered by the ISO adjuster.
pub const ISO_LADDER: [u32; 8] = [25, 50, 100, 200, 400, 800, 1600, 3200];

/// Which way, and how far, an adjuster moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One fine increment up.
    Up,
    /// One fine increment down.
    Down,
    /// One coarse increment up.
    UpCoarse,
    /// One coarse increment down.
    DownCoarse,
}

impl Step {
    /// The step an adjust action asks for, if it is one.
    pub fn from_action(action: KeyAction) -> Option<Step> {
        match action {
            KeyAction::Increase => Some(Step::Up),
            KeyAction::Decrease => Some(Step::Down),
            KeyAction::IncreaseCoarse => Some(Step::UpCoarse),
            KeyAction::DecreaseCoarse => Some(Step::DownCoarse),
            _ => None,
        }
    }

    /// Whether the value grows.
    pub fn is_up(self) -> bool {
        matches!(self, Step::Up | Step::UpCoarse)
    }

    /// Whether the coarse increment applies.
    pub fn is_coarse(self) -> bool {
        matches!(self, Step::UpCoarse | Step::DownCoarse)
    }

    fn signed(self, fine: f64, coarse: f64) -> f64 {
        let amount = if self.is_coarse() { coarse } else { fine };
        if self.is_up() {
            amount
        } else {
            -amount
        }
    }
}

/// Next focal length, never below [`MIN_FOCAL_LENGTH`].
pub fn step_focal_length(focal_length: f64, step: Step) -> f64 {
    (focal_length + step.signed(FOCAL_STEP, FOCAL_STEP_COARSE)).max(MIN_FOCAL_LENGTH)
}

/// Next pinhole size, kept to hundredths of a millimetre and never below
/// [`MIN_PINHOLE_SIZE`].
pub fn step_pinhole_size(pinhole_size: f64, step: Step) -> f64 {
    let raw = pinhole_size + step.signed(PINHOLE_STEP, PINHOLE_STEP_COARSE);
    ((raw * 100.0).round() / 100.0).max(MIN_PINHOLE_SIZE)
}

/// Next ISO on [`ISO_LADDER`]. Coarse steps move two rungs.
///
/// A speed off the ladder moves to the nearest rung in the step direction;
/// at either end the speed stays put.
pub fn step_iso(iso: u32, step: Step) -> u32 {
    let rungs = if step.is_coarse() { 2 } else { 1 };
    (0..rungs).fold(iso, |current, _| {
        if step.is_up() {
            ISO_LADDER
                .iter()
                .copied()
                .find(|&rung| rung > current)
                .unwrap_or(current)
        } else {
            ISO_LADDER
                .iter()
                .rev()
                .copied()
                .find(|&rung| rung < current)
                .unwrap_or(current)
        }
    })
}

/// Neighbouring catalog format, wrapping at either end.
///
/// A format that is not in the catalog steps onto the first (or last) entry.
pub fn step_film_format(format: FilmFormat, step: Step) -> FilmFormat {
    let len = FILM_FORMATS.len();
    let next = match (format.catalog_index(), step.is_up()) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    FILM_FORMATS[next]
}

/// Handle a keyboard action while the Settings tab is active.
pub fn handle_settings_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::NextField => {
            state.settings_field = state.settings_field.next();
            return state;
        }
        KeyAction::PrevField => {
            state.settings_field = state.settings_field.prev();
            return state;
        }
        KeyAction::Activate => return activate(state),
        _ => {}
    }

    let Some(step) = Step::from_action(action) else {
        return state;
    };

    let settings = state.settings.clone();
    state.settings = match state.settings_field {
        SettingsField::FocalLength => {
            let value = step_focal_length(settings.focal_length, step);
            settings.with_focal_length(value)
        }
        SettingsField::PinholeSize => {
            let value = step_pinhole_size(settings.pinhole_size, step);
            settings.with_pinhole_size(value)
        }
        SettingsField::FilmFormat => {
            let format = step_film_format(settings.film_format, step);
            settings.with_film_format(format)
        }
        SettingsField::Orientation => {
            let orientation = settings.film_orientation.toggled();
            settings.with_film_orientation(orientation)
        }
        SettingsField::Iso => {
            let iso = step_iso(settings.iso, step);
            settings.with_iso(iso)
        }
        SettingsField::Profiles => {
            state.selected_profile =
                step_selection(state.selected_profile, state.profiles.len(), step);
            settings
        }
    };
    state
}

fn activate(mut state: AppState) -> AppState {
    match state.settings_field {
        SettingsField::Orientation => {
            let orientation = state.settings.film_orientation.toggled();
            state.settings = state.settings.clone().with_film_orientation(orientation);
            state
        }
        SettingsField::Profiles => apply_selected_profile(state),
        _ => state,
    }
}

/// Replace the camera fields of the current settings with the highlighted
/// profile. Lighting and bracketing are left alone.
pub fn apply_selected_profile(mut state: AppState) -> AppState {
    let Some(profile) = state.selected_profile().cloned() else {
        state.set_status("No profile selected");
        return state;
    };
    state.settings = profile.apply_to(state.settings.clone());
    state.set_status(format!("Applied profile '{}'", profile.name));
    state
}

fn step_selection(current: Option<usize>, len: usize, step: Step) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = current.unwrap_or(0).min(len - 1);
    Some(if step.is_up() {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "settings_handler_tests.rs"]
mod tests;
