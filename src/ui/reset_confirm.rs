use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

/// Draws the reset confirmation dialog as an overlay.
pub fn draw_reset_confirm(f: &mut Frame) {
    let area = centered_rect(50, 9, f.size());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Resetting will erase:",
            Style::default().fg(Color::Red),
        )),
        Line::from("  - All boss progress"),
        Line::from("  - Any edited weapons"),
        Line::from(""),
        Line::from(Span::styled(
            "[Y] Reset    [N] Cancel",
            Style::default().fg(Color::Gray),
        )),
    ];

    let title = Span::styled(
        " Reset Data to Default ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
