//! Screen tab bar widget.
//!
//! Displays one tab per screen using ratatui's Tabs widget.
//! Selection state is managed by AppState.active_tab.

use super::styles::Palette;
use crate::state::Tab;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab titles with their keyboard number, e.g. `1 Viewfinder`.
pub fn tab_titles() -> Vec<String> {
    Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect()
}

/// Render the screen tab bar with `active` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab, palette: &Palette) {
    let titles: Vec<Line> = tab_titles().into_iter().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" pinhole "))
        .style(palette.tab)
        .highlight_style(palette.tab_active)
        .select(active.index());

    frame.render_widget(tabs, area);
}
