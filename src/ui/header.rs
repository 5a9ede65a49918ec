//! Score display.

use crate::ui::quiz::Score;
use crate::ui::text::display_text;
use crate::ui::theme::{ACCENT, CORRECT, GLOBAL_BORDER, INCORRECT, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, score: Score, category: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(SEPARATOR);

        let mut spans = vec![
            Span::styled(
                "  quizterm",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("✓ {}", score.correct),
                Style::default().fg(CORRECT),
            ),
            Span::styled("  ", text_style),
            Span::styled(
                format!("✗ {}", score.incorrect),
                Style::default().fg(INCORRECT),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Rounds: {}", score.rounds()), text_style),
        ];
        if let Some(category) = category {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(display_text(category).into_owned(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
