use crate::app::Summary;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the main menu with the progress summary.
pub fn draw_main_menu(f: &mut Frame, area: Rect, summary: &Summary) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Bosses
            Constraint::Length(5), // Weapons
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new("TERRARIA TAG APP")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let bosses = vec![
        Line::from(vec![
            Span::styled("[1] ", Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "Bosses ({}/{} Defeated)",
                summary.bosses_defeated, summary.bosses_total
            )),
        ]),
        Line::from(vec![
            Span::raw("    Next Boss: "),
            Span::styled(summary.next_boss.clone(), Style::default().fg(Color::Blue)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(bosses).block(Block::default().borders(Borders::BOTTOM)),
        chunks[1],
    );

    let weapons = vec![
        Line::from(vec![
            Span::styled("[2] ", Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "Weapons ({}/{} Available)",
                summary.weapons_available, summary.weapons_total
            )),
        ]),
        Line::from("    Best Weapon Available:"),
        Line::from(Span::styled(
            format!("        {}", summary.best_weapon),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(
        Paragraph::new(weapons).block(Block::default().borders(Borders::BOTTOM)),
        chunks[2],
    );

    let controls = Paragraph::new("[1] Bosses    [2] Weapons    [3] Reset Data    [Q] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[4]);
}
