//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Tab navigation
    /// Switch to the next screen tab. Default: Tab/]
    NextTab,
    /// Switch to the previous screen tab. Default: Shift+Tab/[
    PrevTab,
    /// Jump to a tab by its 1-based number. Default: 1-3
    SelectTab(usize),

    // Field navigation
    /// Move the cursor to the next control on the current tab. Default: j/↓
    NextField,
    /// Move the cursor to the previous control on the current tab. Default: k/↑
    PrevField,

    // Adjusting values
    /// Step the focused control up by a fine increment. Default: l/→/+
    Increase,
    /// Step the focused control down by a fine increment. Default: h/←/-
    Decrease,
    /// Step the focused control up by a coarse increment. Default: L/Shift+→
    IncreaseCoarse,
    /// Step the focused control down by a coarse increment. Default: H/Shift+←
    DecreaseCoarse,
    /// Toggle a switch or apply the selected profile. Default: Enter/Space
    Activate,

    // Direct shortcuts (any tab)
    /// Flip film orientation between landscape and portrait. Default: o
    ToggleOrientation,
    /// Toggle reciprocity failure correction. Default: r
    ToggleReciprocity,
    /// Toggle the red filter factor. Default: f
    ToggleRedFilter,
    /// Step to the next lighting condition (wrapping through "none"). Default: c
    CycleCondition,

    // Profiles
    /// Start naming a new profile from the current settings. Default: n
    NewProfile,
    /// Overwrite the selected profile with the current settings. Default: u
    UpdateProfile,
    /// Delete the selected profile. Default: d
    DeleteProfile,
    /// Re-read profiles from storage. Default: R
    ReloadProfiles,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}

impl KeyAction {
    /// Whether the action is still dispatched while the help overlay is open.
    pub fn allowed_during_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_tab_discriminates_on_index() {
        assert_ne!(KeyAction::SelectTab(1), KeyAction::SelectTab(2));
        assert_eq!(KeyAction::SelectTab(3), KeyAction::SelectTab(3));
    }

    #[test]
    fn only_help_and_quit_pass_through_help_overlay() {
        assert!(KeyAction::Help.allowed_during_help());
        assert!(KeyAction::Quit.allowed_during_help());
        assert!(!KeyAction::NextTab.allowed_during_help());
        assert!(!KeyAction::DeleteProfile.allowed_during_help());
    }
}
