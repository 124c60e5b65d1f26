//! Settings tab: camera form, profile list, and a small frame preview.

use super::constants::{PROFILE_LIST_HEIGHT, SETTINGS_FORM_WIDTH};
use super::styles::Palette;
use super::viewfinder_tab::frame_rect;
use crate::exposure::format_f_stop;
use crate::model::{Profile, Settings};
use crate::state::{AppState, SettingsField};
use crate::viewfinder::LayoutVariant;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Display value of a form field.
pub fn field_value(field: SettingsField, state: &AppState) -> String {
    let settings = &state.settings;
    match field {
        SettingsField::FocalLength => format!("{} mm", settings.focal_length),
        SettingsField::PinholeSize => format!("{} mm", settings.pinhole_size),
        SettingsField::FilmFormat => format!(
            "{} ({}×{})",
            settings.film_format, settings.film_format.width, settings.film_format.height
        ),
        SettingsField::Orientation => settings.film_orientation.to_string(),
        SettingsField::Iso => settings.iso.to_string(),
        SettingsField::Profiles => format!("{} saved", state.profiles.len()),
    }
}

/// One-line summary of a profile for the list.
pub fn profile_summary(profile: &Profile) -> String {
    format!(
        "{}  {}mm ⌀{}mm {} {} ISO {}",
        profile.name,
        profile.focal_length,
        profile.pinhole_size,
        profile.film_format,
        profile.film_orientation,
        profile.iso
    )
}

fn form_lines(state: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    SettingsField::ALL
        .iter()
        .map(|&field| {
            let focused = field == state.settings_field;
            let marker = if focused { "▸ " } else { "  " };
            let label = format!("{marker}{:<13}", field.label());
            let (label_style, value_style) = if focused {
                (palette.focused, palette.focused)
            } else {
                (palette.label, palette.value)
            };
            Line::from(vec![
                Span::styled(label, label_style),
                Span::styled(format!("‹ {} ›", field_value(field, state)), value_style),
            ])
        })
        .collect()
}

fn render_profile_list(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.settings_field == SettingsField::Profiles;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Profiles ")
        .border_style(if focused {
            palette.focused
        } else {
            palette.frame_border
        });

    if state.profiles.is_empty() {
        let empty = Paragraph::new("No profiles yet. Press n to save one.")
            .style(palette.muted)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .profiles
        .iter()
        .map(|p| ListItem::new(profile_summary(p)))
        .collect();
    let list = List::new(items)
        .block(block)
        .style(palette.value)
        .highlight_style(palette.focused)
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(state.selected_profile);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_preview(frame: &mut Frame, area: Rect, settings: &Settings, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(palette.frame_border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rect = frame_rect(inner, settings, LayoutVariant::SettingsPreview);
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let film = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(palette.frame_border);
    let film_inner = film.inner(rect);
    frame.render_widget(film, rect);

    if film_inner.height > 0 {
        let label = Paragraph::new(Span::styled(format_f_stop(settings), palette.readout))
            .alignment(Alignment::Center);
        let y = film_inner.y + film_inner.height / 2;
        frame.render_widget(label, Rect { y, height: 1, ..film_inner });
    }
}

/// Render the settings tab into `area`.
pub fn render_settings_tab(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let [left, right] =
        Layout::horizontal([Constraint::Length(SETTINGS_FORM_WIDTH), Constraint::Fill(1)])
            .areas(area);

    let form_height = SettingsField::ALL.len() as u16 + 2;
    let [form_area, list_area] = Layout::vertical([
        Constraint::Length(form_height),
        Constraint::Max(PROFILE_LIST_HEIGHT),
    ])
    .areas(left);

    let form = Paragraph::new(form_lines(state, palette)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Camera ")
            .border_style(palette.frame_border),
    );
    frame.render_widget(form, form_area);
    render_profile_list(frame, list_area, state, palette);
    render_preview(frame, right, &state.settings, palette);
}
