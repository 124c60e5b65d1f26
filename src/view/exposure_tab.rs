//! Exposure tab: lighting and correction controls, the step-by-step
//! breakdown, and a bracket series table.

use super::constants::EXPOSURE_CONTROLS_HEIGHT;
use super::styles::Palette;
use crate::exposure::{
    bracket_series, exposure_breakdown, format_exposure, to_fixed_1, ExposureBreakdown,
    DEFAULT_BRACKET_RANGE, RED_FILTER_FACTOR,
};
use crate::model::Settings;
use crate::state::{AppState, ExposureField};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Width of the bracket table column.
const BRACKET_TABLE_WIDTH: u16 = 26;

/// Signed whole-stop label: `+1`, `0`, `-2`.
pub fn format_stops(stops: f64) -> String {
    if stops > 0.0 {
        format!("+{stops}")
    } else {
        format!("{stops}")
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Display value of an exposure control.
pub fn control_value(field: ExposureField, settings: &Settings) -> String {
    match field {
        ExposureField::Condition => match settings.condition() {
            Some(condition) => format!("{} (f/{})", condition.name, condition.f_stop),
            None => "none".to_string(),
        },
        ExposureField::Bracket => format!("{} stops", format_stops(settings.bracket_stops)),
        ExposureField::Reciprocity => on_off(settings.use_reciprocity_failure).to_string(),
        ExposureField::RedFilter => on_off(settings.use_red_filter).to_string(),
    }
}

/// Labelled rows walking through the exposure pipeline.
pub fn breakdown_rows(breakdown: &ExposureBreakdown, settings: &Settings) -> Vec<(String, String)> {
    let reciprocity = if breakdown.reciprocity_applied {
        format_exposure(breakdown.corrected)
    } else if settings.use_reciprocity_failure {
        "not needed".to_string()
    } else {
        "off".to_string()
    };
    let filter = if settings.use_red_filter {
        format!("×{RED_FILTER_FACTOR} → {}", format_exposure(breakdown.filtered))
    } else {
        "off".to_string()
    };

    vec![
        ("Aperture".to_string(), format!("f/{}", to_fixed_1(breakdown.f_stop))),
        (
            "Reference".to_string(),
            format!("f/{} {}", breakdown.condition.f_stop, breakdown.condition.name),
        ),
        ("Base (1/ISO)".to_string(), format_exposure(breakdown.base)),
        ("Metered".to_string(), format_exposure(breakdown.metered)),
        ("Reciprocity".to_string(), reciprocity),
        ("Red filter".to_string(), filter),
        (
            "Bracket".to_string(),
            format_stops(settings.bracket_stops),
        ),
        ("Exposure".to_string(), format_exposure(breakdown.seconds)),
    ]
}

fn controls_lines(state: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    ExposureField::ALL
        .iter()
        .map(|&field| {
            let focused = field == state.exposure_field;
            let marker = if focused { "▸ " } else { "  " };
            let (label_style, value_style) = if focused {
                (palette.focused, palette.focused)
            } else {
                (palette.label, palette.value)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<12}", field.label()), label_style),
                Span::styled(
                    format!("‹ {} ›", control_value(field, &state.settings)),
                    value_style,
                ),
            ])
        })
        .collect()
}

fn breakdown_lines(settings: &Settings, palette: &Palette) -> Vec<Line<'static>> {
    let Some(breakdown) = exposure_breakdown(settings) else {
        return vec![Line::from(Span::styled(
            "Select a lighting condition to meter the scene.",
            palette.muted,
        ))];
    };

    let mut lines: Vec<Line> = breakdown_rows(&breakdown, settings)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), palette.label),
                Span::styled(value, palette.value),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        breakdown.condition.description,
        palette.muted,
    )));
    lines
}

fn render_bracket_table(frame: &mut Frame, area: Rect, settings: &Settings, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Bracket ")
        .border_style(palette.frame_border);

    let Some(series) = bracket_series(settings, DEFAULT_BRACKET_RANGE) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let rows = series.into_iter().map(|step| {
        let style = if f64::from(step.stops) == settings.bracket_stops {
            palette.focused
        } else {
            palette.value
        };
        Row::new(vec![
            Cell::from(format_stops(f64::from(step.stops))),
            Cell::from(step.label),
        ])
        .style(style)
    });

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Fill(1)])
        .header(Row::new(vec!["Stops", "Time"]).style(palette.section))
        .block(block);
    frame.render_widget(table, area);
}

/// Render the exposure tab into `area`.
pub fn render_exposure_tab(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(BRACKET_TABLE_WIDTH)])
            .areas(area);
    let [controls_area, breakdown_area] = Layout::vertical([
        Constraint::Length(EXPOSURE_CONTROLS_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(left);

    let controls = Paragraph::new(controls_lines(state, palette)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Lighting ")
            .border_style(palette.frame_border),
    );
    frame.render_widget(controls, controls_area);

    let breakdown = Paragraph::new(breakdown_lines(&state.settings, palette))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Breakdown ")
                .border_style(palette.frame_border),
        );
    frame.render_widget(breakdown, breakdown_area);

    render_bracket_table(frame, right, &state.settings, palette);
}
