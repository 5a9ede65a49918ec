use crate::ui::quiz::Status;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key bindings for the bottom bar, as `(keys, action)` pairs.
pub fn key_hints(status: Status) -> &'static [(&'static str, &'static str)] {
    match status {
        Status::Idle | Status::Fetching => &[("q", "Quit")],
        Status::Ready => &[
            ("↑/↓", "Move"),
            ("Enter", "Answer"),
            ("1-9", "Pick"),
            ("q", "Quit"),
        ],
        Status::Answered => &[("Enter/n", "Next question"), ("q", "Quit")],
        Status::Error => &[("r", "Reload"), ("q", "Quit")],
    }
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, status: Status) -> Paragraph<'static> {
        let dim = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);

        let mut spans = vec![Span::raw(" ")];
        for (idx, (keys, action)) in key_hints(status).iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(SEPARATOR)));
            }
            spans.push(Span::styled(*keys, key_style));
            spans.push(Span::styled(format!(": {}", action), dim));
        }

        // Right-align the version inside the borders.
        let version = format!("v{} ", VERSION);
        let used = Line::from(spans.clone()).width() + version.chars().count();
        let gap = (area.width.saturating_sub(2) as usize).saturating_sub(used);
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(version, dim));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_offers_quit() {
        for status in [
            Status::Idle,
            Status::Fetching,
            Status::Ready,
            Status::Answered,
            Status::Error,
        ] {
            assert!(key_hints(status).iter().any(|(keys, _)| *keys == "q"));
        }
    }

    #[test]
    fn reload_only_offered_on_error() {
        let offers_reload = |status| key_hints(status).iter().any(|(_, a)| *a == "Reload");
        assert!(offers_reload(Status::Error));
        assert!(!offers_reload(Status::Ready));
    }
}
