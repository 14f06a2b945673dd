//! Input handling for the terminal UI.
//!
//! Overlays take priority over the screen underneath them.

use std::io;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::error;

use crate::app::App;
use crate::ui::search_options::SearchOptionsDialog;
use crate::ui::tag_prompt::TagPrompt;
use crate::ui::weapon_scene::result_line_count;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Bosses,
    Weapons,
}

/// Modal dialog drawn over the current screen. At most one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    SearchOptions(SearchOptionsDialog),
    TagPrompt(TagPrompt),
    ResetConfirm,
}

pub struct UiState {
    pub screen: Screen,
    pub overlay: Overlay,
    pub boss_cursor: usize,
    pub weapon_scroll: u16,
    /// One-line message shown under the current screen.
    pub status: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::MainMenu,
            overlay: Overlay::None,
            boss_cursor: 0,
            weapon_scroll: 0,
            status: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Main dispatcher for key presses.
pub fn handle_key(key: KeyEvent, app: &mut App, ui: &mut UiState) -> InputResult {
    ui.status = None;

    let overlay = std::mem::replace(&mut ui.overlay, Overlay::None);
    match overlay {
        Overlay::None => {}
        Overlay::SearchOptions(dialog) => {
            ui.overlay = handle_search_options(key, dialog, app, ui);
            return InputResult::Continue;
        }
        Overlay::TagPrompt(prompt) => {
            ui.overlay = handle_tag_prompt(key, prompt, app, ui);
            return InputResult::Continue;
        }
        Overlay::ResetConfirm => {
            handle_reset_confirm(key, app, ui);
            return InputResult::Continue;
        }
    }

    match ui.screen {
        Screen::MainMenu => handle_main_menu(key, app, ui),
        Screen::Bosses => {
            handle_bosses(key, app, ui);
            InputResult::Continue
        }
        Screen::Weapons => {
            handle_weapons(key, app, ui);
            InputResult::Continue
        }
    }
}

fn report(ui: &mut UiState, action: &str, result: io::Result<()>) {
    if let Err(e) = result {
        error!(error = %e, "{action} failed");
        ui.status = Some(format!("Error writing to file: {}", e));
    }
}

fn handle_main_menu(key: KeyEvent, app: &mut App, ui: &mut UiState) -> InputResult {
    match key.code {
        KeyCode::Char('1') => {
            ui.boss_cursor = ui.boss_cursor.min(app.ledger.count().saturating_sub(1));
            ui.screen = Screen::Bosses;
        }
        KeyCode::Char('2') => {
            app.refresh_query();
            ui.weapon_scroll = 0;
            ui.screen = Screen::Weapons;
        }
        KeyCode::Char('3') => ui.overlay = Overlay::ResetConfirm,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            return InputResult::Quit;
        }
        _ => {}
    }
    InputResult::Continue
}

fn handle_bosses(key: KeyEvent, app: &mut App, ui: &mut UiState) {
    match key.code {
        KeyCode::Up => ui.boss_cursor = ui.boss_cursor.saturating_sub(1),
        KeyCode::Down => {
            if ui.boss_cursor + 1 < app.ledger.count() {
                ui.boss_cursor += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.ledger.is_empty() {
                ui.status = Some("There are no bosses in the system to change".to_string());
                return;
            }
            let result = app.toggle_boss(ui.boss_cursor).map(|_| ());
            report(ui, "Saving bosses", result);
        }
        KeyCode::Esc | KeyCode::Char('0') => ui.screen = Screen::MainMenu,
        _ => {}
    }
}

fn handle_weapons(key: KeyEvent, app: &mut App, ui: &mut UiState) {
    match key.code {
        KeyCode::Char('o') | KeyCode::Char('O') | KeyCode::Char('1') => {
            ui.overlay = Overlay::SearchOptions(SearchOptionsDialog::new(
                app.catalog.availability(),
                app.catalog.sort_order(),
            ));
        }
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char('2') => {
            ui.overlay = Overlay::TagPrompt(TagPrompt::new());
        }
        KeyCode::Up => ui.weapon_scroll = ui.weapon_scroll.saturating_sub(1),
        KeyCode::Down => {
            let last_line = result_line_count(&app.catalog).saturating_sub(1);
            ui.weapon_scroll = ui.weapon_scroll.saturating_add(1).min(last_line);
        }
        KeyCode::Esc | KeyCode::Char('0') => ui.screen = Screen::MainMenu,
        _ => {}
    }
}

fn handle_search_options(
    key: KeyEvent,
    mut dialog: SearchOptionsDialog,
    app: &mut App,
    ui: &mut UiState,
) -> Overlay {
    match key.code {
        KeyCode::Up => dialog.move_up(),
        KeyCode::Down => dialog.move_down(),
        KeyCode::Left => dialog.cycle(-1),
        KeyCode::Right | KeyCode::Tab => dialog.cycle(1),
        KeyCode::Enter => {
            let result = app.set_search_options(dialog.availability, dialog.sort);
            report(ui, "Saving settings", result);
            ui.weapon_scroll = 0;
            return Overlay::None;
        }
        KeyCode::Esc => return Overlay::None,
        _ => {}
    }
    Overlay::SearchOptions(dialog)
}

fn handle_tag_prompt(key: KeyEvent, mut prompt: TagPrompt, app: &mut App, ui: &mut UiState) -> Overlay {
    match key.code {
        KeyCode::Char(c) => prompt.handle_char_input(c),
        KeyCode::Backspace => prompt.handle_backspace(),
        KeyCode::Enter => {
            if prompt.is_valid() {
                app.search_by_tag(&prompt.input);
                ui.weapon_scroll = 0;
                return Overlay::None;
            }
        }
        KeyCode::Esc => return Overlay::None,
        _ => {}
    }
    Overlay::TagPrompt(prompt)
}

fn handle_reset_confirm(key: KeyEvent, app: &mut App, ui: &mut UiState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let result = app.reset_to_defaults();
            ui.boss_cursor = 0;
            if result.is_ok() {
                ui.status = Some("Data reset to default".to_string());
            }
            report(ui, "Reset", result);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
        _ => ui.overlay = Overlay::ResetConfirm,
    }
}
