//! Viewfinder tab: the framed film area with the exposure readout.

use super::constants::CELL_ASPECT;
use super::styles::Palette;
use crate::exposure::exposure_reading;
use crate::model::Settings;
use crate::viewfinder::{frame_for_settings, FrameSize, LayoutVariant, ScreenSize};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Geometry units for a cell area: columns across, two units per row down.
pub fn screen_size_for(area: Rect) -> ScreenSize {
    ScreenSize::new(f64::from(area.width), f64::from(area.height) * CELL_ASPECT)
}

/// Whole cells covered by a fitted frame, rounded down so the frame never
/// exceeds its budget.
pub fn frame_cells(frame: FrameSize) -> (u16, u16) {
    let to_cells = |units: f64| {
        if units.is_finite() && units > 0.0 {
            units.floor().min(f64::from(u16::MAX)) as u16
        } else {
            0
        }
    };
    (to_cells(frame.width), to_cells(frame.height / CELL_ASPECT))
}

/// Rectangle for the film frame, centred in `area`.
pub fn frame_rect(area: Rect, settings: &Settings, variant: LayoutVariant) -> Rect {
    let frame = frame_for_settings(settings, screen_size_for(area), variant);
    let (width, height) = frame_cells(frame);
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Text overlaid on the frame: aperture, time, and what they are based on.
pub fn readout_lines(settings: &Settings, palette: &Palette) -> Vec<Line<'static>> {
    let reading = exposure_reading(settings);

    let exposure = match &reading.exposure_label {
        Some(label) => Line::from(Span::styled(label.clone(), palette.readout)),
        None => Line::from(Span::styled("press c for a lighting condition", palette.muted)),
    };

    let condition = reading
        .condition
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| "no condition".to_string());

    vec![
        Line::from(Span::styled(reading.f_stop_label, palette.readout)),
        exposure,
        Line::from(Span::styled(condition, palette.label)),
        Line::from(Span::styled(
            format!(
                "{} {} · ISO {}",
                settings.film_format, settings.film_orientation, settings.iso
            ),
            palette.label,
        )),
    ]
}

/// Render the viewfinder tab into `area`.
pub fn render_viewfinder_tab(
    frame: &mut Frame,
    area: Rect,
    settings: &Settings,
    palette: &Palette,
) {
    let rect = frame_rect(area, settings, LayoutVariant::Viewfinder);

    if rect.width < 2 || rect.height < 2 {
        let warning = Paragraph::new("Terminal too small for the viewfinder")
            .style(palette.muted)
            .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return;
    }

    let (film_width, film_height) = settings.effective_film_dimensions();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(palette.frame_border)
        .title(format!(" {film_width}×{film_height} mm "))
        .title_alignment(Alignment::Center);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = readout_lines(settings, palette);
    let text_height = (lines.len() as u16).min(inner.height);
    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );
}
