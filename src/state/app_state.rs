//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure functions; the shell performs storage I/O
//! and feeds results back in.

use crate::model::{Profile, ProfileId, Settings};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Tab**: which screen is shown (Viewfinder, Settings, Exposure)
/// - **Field cursor**: one per form tab, remembered when switching tabs
/// - **Input mode**: normal key dispatch, or typing a new profile name
/// - **Help**: overlay that swallows everything except Help and Quit
///
/// `settings` is replaced wholesale on every change; nothing else in the
/// application holds a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Current camera settings.
    pub settings: Settings,

    /// Visible screen.
    pub active_tab: Tab,

    /// Focused control on the Settings tab.
    pub settings_field: SettingsField,

    /// Focused control on the Exposure tab.
    pub exposure_field: ExposureField,

    /// Profiles as last read from, or written to, the store.
    pub profiles: Vec<Profile>,

    /// Highlighted entry in `profiles`. `None` only when the list is empty.
    pub selected_profile: Option<usize>,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Normal dispatch or profile-name entry.
    pub input: InputMode,

    /// One-line message for the status bar, cleared on the next key press.
    pub status: Option<String>,
}

impl AppState {
    /// Create new AppState starting from `settings`.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            active_tab: Tab::Viewfinder,
            settings_field: SettingsField::FocalLength,
            exposure_field: ExposureField::Condition,
            profiles: Vec::new(),
            selected_profile: None,
            help_visible: false,
            input: InputMode::Normal,
            status: None,
        }
    }

    /// Replace the profile list, keeping the selection on the same id when it
    /// still exists and otherwise clamping it into range.
    pub fn replace_profiles(&mut self, profiles: Vec<Profile>) {
        let previous_id = self.selected_profile_id().cloned();
        self.profiles = profiles;

        self.selected_profile = if self.profiles.is_empty() {
            None
        } else {
            previous_id
                .and_then(|id| self.profiles.iter().position(|p| p.id == id))
                .or_else(|| {
                    Some(
                        self.selected_profile
                            .unwrap_or(0)
                            .min(self.profiles.len() - 1),
                    )
                })
        };
    }

    /// The highlighted profile, if any.
    pub fn selected_profile(&self) -> Option<&Profile> {
        self.selected_profile.and_then(|i| self.profiles.get(i))
    }

    /// Id of the highlighted profile.
    pub fn selected_profile_id(&self) -> Option<&ProfileId> {
        self.selected_profile().map(|p| &p.id)
    }

    /// Set a status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Whether keystrokes are currently text input.
    pub fn is_typing(&self) -> bool {
        matches!(self.input, InputMode::NamingProfile { .. })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

// ===== Tab =====

/// Top-level screens, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Film-shaped frame with the live readout.
    Viewfinder,
    /// Camera form and profile manager.
    Settings,
    /// Lighting, bracketing and the exposure breakdown.
    Exposure,
}

impl Tab {
    /// Tab-bar order.
    pub const ALL: [Tab; 3] = [Tab::Viewfinder, Tab::Settings, Tab::Exposure];

    /// Label in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Viewfinder => "Viewfinder",
            Tab::Settings => "Settings",
            Tab::Exposure => "Exposure",
        }
    }

    /// 0-based position in [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tab::Viewfinder => 0,
            Tab::Settings => 1,
            Tab::Exposure => 2,
        }
    }

    /// Tab for a 1-based number, as typed on the keyboard.
    pub fn from_number(number: usize) -> Option<Tab> {
        number
            .checked_sub(1)
            .and_then(|i| Tab::ALL.get(i).copied())
    }

    /// Following tab, wrapping from last to first.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Preceding tab, wrapping from first to last.
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

// ===== Form fields =====

/// Controls on the Settings tab, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    /// Focal length adjuster.
    FocalLength,
    /// Pinhole diameter adjuster.
    PinholeSize,
    /// Film format selector.
    FilmFormat,
    /// Landscape/portrait toggle.
    Orientation,
    /// ISO ladder.
    Iso,
    /// Saved profile list.
    Profiles,
}

impl SettingsField {
    /// Form order.
    pub const ALL: [SettingsField; 6] = [
        SettingsField::FocalLength,
        SettingsField::PinholeSize,
        SettingsField::FilmFormat,
        SettingsField::Orientation,
        SettingsField::Iso,
        SettingsField::Profiles,
    ];

    /// Label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            SettingsField::FocalLength => "Focal length",
            SettingsField::PinholeSize => "Pinhole",
            SettingsField::FilmFormat => "Film format",
            SettingsField::Orientation => "Orientation",
            SettingsField::Iso => "ISO",
            SettingsField::Profiles => "Profiles",
        }
    }

    /// Following control, wrapping.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Preceding control, wrapping.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// Controls on the Exposure tab, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExposureField {
    /// Lighting condition selector.
    Condition,
    /// Bracket offset.
    Bracket,
    /// Reciprocity correction toggle.
    Reciprocity,
    /// Red filter toggle.
    RedFilter,
}

impl ExposureField {
    /// Form order.
    pub const ALL: [ExposureField; 4] = [
        ExposureField::Condition,
        ExposureField::Bracket,
        ExposureField::Reciprocity,
        ExposureField::RedFilter,
    ];

    /// Label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            ExposureField::Condition => "Lighting",
            ExposureField::Bracket => "Bracket",
            ExposureField::Reciprocity => "Reciprocity",
            ExposureField::RedFilter => "Red filter",
        }
    }

    /// Following control, wrapping.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Preceding control, wrapping.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, offset: usize) -> T {
    let index = all.iter().position(|f| *f == current).unwrap_or(0);
    all[(index + offset) % all.len()]
}

// ===== InputMode =====

/// How key presses are interpreted. Sum type - exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys resolve through the key bindings.
    #[default]
    Normal,
    /// Keys edit the name of a profile about to be created.
    NamingProfile {
        /// Text typed so far.
        buffer: String,
    },
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
