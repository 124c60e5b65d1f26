//! Tab navigation keyboard action handler.
//!
//! Pure functions that transform AppState in response to tab navigation actions.

use crate::model::KeyAction;
use crate::state::{AppState, Tab};

/// Handle a tab navigation keyboard action.
///
/// `NextTab` and `PrevTab` wrap around; `SelectTab(n)` is 1-based and ignores
/// numbers without a tab. Other actions leave the state unchanged.
pub fn handle_tab_action(mut state: AppState, action: KeyAction) -> AppState {
    state.active_tab = match action {
        KeyAction::NextTab => state.active_tab.next(),
        KeyAction::PrevTab => state.active_tab.prev(),
        KeyAction::SelectTab(number) => Tab::from_number(number).unwrap_or(state.active_tab),
        _ => return state,
    };
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
