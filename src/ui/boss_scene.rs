use crate::bosses::{BossLedger, BossStatus};
use crate::constants::NO_BOSSES_STORED;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn status_color(status: BossStatus) -> Color {
    match status {
        BossStatus::Next => Color::Blue,
        BossStatus::Defeated => Color::Green,
        BossStatus::Pending => Color::Red,
    }
}

/// Draws the boss checklist with the cursor on `selected`.
pub fn draw_boss_scene(f: &mut Frame, area: Rect, ledger: &BossLedger, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),    // Boss list
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(format!(
        " Bosses ({}/{} Defeated) ",
        ledger.defeated_count(),
        ledger.count()
    ));

    let lines: Vec<Line> = if ledger.is_empty() {
        vec![Line::from(Span::styled(
            NO_BOSSES_STORED,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        ledger
            .bosses()
            .iter()
            .zip(ledger.statuses())
            .enumerate()
            .map(|(i, (boss, status))| {
                let marker = if i == selected { "> " } else { "  " };
                let mut style = Style::default().fg(status_color(status));
                if i == selected {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                Line::from(vec![
                    Span::raw(format!("{}{:>2}: ", marker, i + 1)),
                    Span::styled(boss.name.clone(), style),
                    Span::styled(
                        format!("  ({})", status.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    // Keep the cursor row on screen
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let scroll = selected.saturating_sub(visible.saturating_sub(1)) as u16;

    f.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        chunks[0],
    );

    let controls = Paragraph::new("[Up/Down] Select    [Enter/Space] Toggle Defeated    [Esc] Back")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[1]);
}
