use crate::ui::theme::{ACCENT, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u8) -> &'static str {
    SPINNER[tick as usize % SPINNER.len()]
}

/// Full-body placeholder shown while a question is loading.
pub fn loader_widget(tick: u8) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(ACCENT)),
        Span::styled(" Loading question...", Style::default().fg(TEXT)),
    ]);
    Paragraph::new(line).alignment(Alignment::Center)
}
