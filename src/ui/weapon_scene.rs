use crate::weapons::{QueryState, WeaponCatalog};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn view_title(catalog: &WeaponCatalog) -> String {
    let base = format!(
        " {}, {} ",
        catalog.availability().name(),
        catalog.sort_order().name()
    );
    match catalog.query_state() {
        QueryState::TagNarrowed { tag } => format!("{}- tag \"{}\" ", base, tag),
        _ => base,
    }
}

/// Number of unwrapped text lines in the rendered query view.
pub fn result_line_count(catalog: &WeaponCatalog) -> u16 {
    let lines = catalog.render_query_results().lines().count();
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Draws the current query view.
pub fn draw_weapon_scene(f: &mut Frame, area: Rect, catalog: &WeaponCatalog, scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),    // Results
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let results = catalog.render_query_results();
    let lines: Vec<Line> = results.lines().map(Line::from).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title(catalog));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        chunks[0],
    );

    let controls =
        Paragraph::new("[O] Search Options    [T] Search by Tag    [Up/Down] Scroll    [Esc] Back")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[1]);
}
