//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the default shortcuts grouped by
//! category. Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Key column width, padding included.
const KEY_COLUMN: usize = 16;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tabs",
        &[
            ("Tab / ]", "Next tab"),
            ("Shift+Tab / [", "Previous tab"),
            ("1 2 3", "Jump to Viewfinder, Settings, Exposure"),
        ],
    ),
    (
        "Controls",
        &[
            ("j/↓  k/↑", "Next / previous control"),
            ("l/→/+  h/←/-", "Step value up / down"),
            ("L  H", "Step in larger increments"),
            ("Enter / Space", "Toggle switch, apply profile, reset bracket"),
        ],
    ),
    (
        "Shortcuts",
        &[
            ("o", "Flip film orientation"),
            ("c", "Next lighting condition"),
            ("r", "Reciprocity correction on/off"),
            ("f", "Red filter on/off"),
        ],
    ),
    (
        "Profiles",
        &[
            ("n", "Save current settings as a new profile"),
            ("u", "Overwrite the selected profile"),
            ("d", "Delete the selected profile"),
            ("R", "Reload profiles from disk"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q / Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.frame_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Rect covering the given percentages of `area`, centered in it.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    centered_fixed(popup_width, popup_height, area)
}

/// Rect of a fixed size (clamped to `area`), centered in it.
pub(crate) fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (title, entries)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*title, palette.section)));
        lines.extend(entries.iter().map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<width$}", width = KEY_COLUMN - 2), palette.help_key),
                Span::styled(*description, palette.label),
            ])
        }));
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
