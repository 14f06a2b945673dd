use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

/// Text entry for a tag search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPrompt {
    pub input: String,
}

impl TagPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_char_input(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.input.pop();
    }

    pub fn is_valid(&self) -> bool {
        !self.input.trim().is_empty()
    }
}

/// Draws the tag prompt as an overlay.
pub fn draw_tag_prompt(f: &mut Frame, prompt: &TagPrompt) {
    let area = centered_rect(50, 7, f.size());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}_", prompt.input),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Search  [Esc] Cancel",
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Please enter a tag ");
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut prompt = TagPrompt::new();
        assert!(!prompt.is_valid());
        for c in "melee".chars() {
            prompt.handle_char_input(c);
        }
        assert_eq!(prompt.input, "melee");
        prompt.handle_backspace();
        assert_eq!(prompt.input, "mele");
        assert!(prompt.is_valid());
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        let mut prompt = TagPrompt::new();
        prompt.handle_char_input(' ');
        assert!(!prompt.is_valid());
    }
}
