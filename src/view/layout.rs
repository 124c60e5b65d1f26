//! Screen layout rendering.
//!
//! Header, tab bar, the active tab's content, and the status bar, with the
//! help overlay and the profile-name prompt drawn on top when open.

use super::constants::{HEADER_HEIGHT, NAME_PROMPT_WIDTH, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use super::help::{centered_fixed, render_help_overlay};
use super::styles::Palette;
use super::{exposure_tab, settings_tab, tabs, viewfinder_tab};
use crate::exposure::exposure_reading;
use crate::model::Settings;
use crate::state::{AppState, InputMode, Tab};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let [header_area, tab_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TAB_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    render_header(frame, header_area, &state.settings, palette);
    tabs::render_tab_bar(frame, tab_area, state.active_tab, palette);

    match state.active_tab {
        Tab::Viewfinder => {
            viewfinder_tab::render_viewfinder_tab(frame, content_area, &state.settings, palette)
        }
        Tab::Settings => settings_tab::render_settings_tab(frame, content_area, state, palette),
        Tab::Exposure => exposure_tab::render_exposure_tab(frame, content_area, state, palette),
    }

    render_status_bar(frame, status_area, state, palette);

    if let InputMode::NamingProfile { buffer } = &state.input {
        render_name_prompt(frame, buffer, palette);
    }

    if state.help_visible {
        render_help_overlay(frame, palette);
    }
}

/// Header line: the reading every tab shares.
///
/// Format: `f/166.7 | 1/4s | Bright Sun`
pub fn header_text(settings: &Settings) -> String {
    let reading = exposure_reading(settings);
    match (reading.exposure_label, reading.condition) {
        (Some(exposure), Some(condition)) => {
            format!("{} | {} | {}", reading.f_stop_label, exposure, condition.name)
        }
        _ => format!("{} | no lighting condition", reading.f_stop_label),
    }
}

/// Key hints for the status bar when there is no message to show.
pub fn keyboard_hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Viewfinder => "Tab: next tab | o: orientation | c: lighting | ?: help | q: quit",
        Tab::Settings => "j/k: field | h/l: adjust | n: save profile | Enter: apply | ?: help",
        Tab::Exposure => "j/k: field | h/l: adjust | r: reciprocity | f: red filter | ?: help",
    }
}

fn render_header(frame: &mut Frame, area: Rect, settings: &Settings, palette: &Palette) {
    let paragraph = Paragraph::new(Line::from(header_text(settings))).style(palette.header);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (text, style) = match &state.status {
        Some(message) => (message.as_str(), palette.status),
        None => (keyboard_hints(state.active_tab), palette.muted),
    };
    frame.render_widget(Paragraph::new(Line::from(text)).style(style), area);
}

fn render_name_prompt(frame: &mut Frame, buffer: &str, palette: &Palette) {
    let area = centered_fixed(NAME_PROMPT_WIDTH, 3, frame.area());
    frame.render_widget(Clear, area);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(buffer.to_string(), palette.value),
        Span::styled("▏", palette.focused),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" New profile name ")
            .border_style(palette.focused),
    );
    frame.render_widget(prompt, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
