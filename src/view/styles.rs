//! Colour configuration and the styles built from it.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colours on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colours off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for every element the screens draw.
///
/// With colours disabled every style falls back to modifiers only, so focus
/// and highlights stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Header line.
    pub header: Style,
    /// Inactive tab titles.
    pub tab: Style,
    /// Active tab title.
    pub tab_active: Style,
    /// Form labels.
    pub label: Style,
    /// Form values.
    pub value: Style,
    /// Focused control.
    pub focused: Style,
    /// Viewfinder frame border.
    pub frame_border: Style,
    /// f-stop and exposure readout.
    pub readout: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Block titles and help section headings.
    pub section: Style,
    /// Status bar message.
    pub status: Style,
    /// Keys in the help overlay.
    pub help_key: Style,
}

impl Palette {
    /// Build the palette, monochrome when colours are disabled.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan),
                tab: Style::default().fg(Color::White),
                tab_active: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                label: Style::default().fg(Color::Gray),
                value: Style::default().fg(Color::White),
                focused: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                frame_border: Style::default().fg(Color::LightRed),
                readout: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                section: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                status: Style::default().fg(Color::Green),
                help_key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            Self {
                header: Style::default(),
                tab: Style::default(),
                tab_active: bold,
                label: Style::default(),
                value: Style::default(),
                focused: Style::default().add_modifier(Modifier::REVERSED),
                frame_border: Style::default(),
                readout: bold,
                muted: Style::default().add_modifier(Modifier::DIM),
                section: bold,
                status: Style::default(),
                help_key: bold,
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_defaults_to_enabled() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn monochrome_palette_has_no_colours() {
        let palette = Palette::new(ColorConfig::disabled());
        for style in [palette.header, palette.frame_border, palette.focused, palette.readout] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn monochrome_palette_still_marks_focus() {
        let palette = Palette::new(ColorConfig::disabled());
        assert!(palette.focused.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn coloured_palette_highlights_focus() {
        let palette = Palette::new(ColorConfig::enabled());
        assert_eq!(palette.focused.bg, Some(Color::Yellow));
    }
}
