pub mod boss_scene;
pub mod main_menu;
pub mod reset_confirm;
pub mod search_options;
pub mod tag_prompt;
pub mod weapon_scene;

use crate::app::App;
use crate::input::{Overlay, Screen, UiState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Main UI drawing function: current screen, status line, then any overlay.
pub fn draw_ui(f: &mut Frame, app: &App, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Status line
        ])
        .split(f.size());

    match ui.screen {
        Screen::MainMenu => main_menu::draw_main_menu(f, chunks[0], &app.summary()),
        Screen::Bosses => boss_scene::draw_boss_scene(f, chunks[0], &app.ledger, ui.boss_cursor),
        Screen::Weapons => {
            weapon_scene::draw_weapon_scene(f, chunks[0], &app.catalog, ui.weapon_scroll)
        }
    }

    if let Some(message) = &ui.status {
        let status = Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(status, chunks[1]);
    }

    match &ui.overlay {
        Overlay::None => {}
        Overlay::SearchOptions(dialog) => search_options::draw_search_options(f, dialog),
        Overlay::TagPrompt(prompt) => tag_prompt::draw_tag_prompt(f, prompt),
        Overlay::ResetConfirm => reset_confirm::draw_reset_confirm(f),
    }
}
