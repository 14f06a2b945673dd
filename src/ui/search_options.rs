use crate::weapons::{AvailabilityFilter, SortOrder};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

/// Pending choices in the search options dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptionsDialog {
    pub availability: AvailabilityFilter,
    pub sort: SortOrder,
    /// 0 = availability row, 1 = sort row
    pub row: usize,
}

impl SearchOptionsDialog {
    pub fn new(availability: AvailabilityFilter, sort: SortOrder) -> Self {
        Self {
            availability,
            sort,
            row: 0,
        }
    }

    pub fn move_up(&mut self) {
        self.row = 0;
    }

    pub fn move_down(&mut self) {
        self.row = 1;
    }

    /// Cycles the value on the current row by `step` (+1 or -1).
    pub fn cycle(&mut self, step: isize) {
        if self.row == 0 {
            self.availability = cycled(&AvailabilityFilter::ALL, self.availability, step);
        } else {
            self.sort = cycled(&SortOrder::ALL, self.sort, step);
        }
    }
}

fn cycled<T: Copy + PartialEq>(options: &[T], current: T, step: isize) -> T {
    let len = options.len() as isize;
    let pos = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    options[(pos + step).rem_euclid(len) as usize]
}

fn option_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let value_style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if active { "> " } else { "  " };
    Line::from(vec![
        Span::raw(format!("{}{:<14}", marker, label)),
        Span::styled(format!("< {} >", value), value_style),
    ])
}

/// Draws the search options dialog as an overlay.
pub fn draw_search_options(f: &mut Frame, dialog: &SearchOptionsDialog) {
    let area: Rect = centered_rect(54, 10, f.size());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        option_line("Show:", dialog.availability.name(), dialog.row == 0),
        option_line("Order:", dialog.sort.name(), dialog.row == 1),
        Line::from(""),
        Line::from(Span::styled(
            "[Up/Down] Row  [Left/Right] Change",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "[Enter] Apply  [Esc] Cancel",
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Search Options ");
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
