//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line showing the current reading.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Vertical size of a terminal cell relative to its width.
///
/// Frame geometry runs in half-cell units vertically so that a 3:2 film frame
/// also looks 3:2 on screen.
pub const CELL_ASPECT: f64 = 2.0;

/// Width of the settings form on the Settings tab, in columns.
pub const SETTINGS_FORM_WIDTH: u16 = 38;

/// Height of the profile list on the Settings tab, in lines (with border).
pub const PROFILE_LIST_HEIGHT: u16 = 8;

/// Height of the controls box on the Exposure tab, in lines (with border).
pub const EXPOSURE_CONTROLS_HEIGHT: u16 = 6;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width of the profile-name prompt, in columns.
pub const NAME_PROMPT_WIDTH: u16 = 44;
