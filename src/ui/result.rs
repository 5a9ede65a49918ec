//! Verdict shown after an answer.

use crate::ui::quiz::{Outcome, QuizState};
use crate::ui::text::display_text;
use crate::ui::theme::{CORRECT, INCORRECT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn result_line(state: &QuizState) -> Option<Line<'static>> {
    let outcome = state.outcome()?;
    let line = match outcome {
        Outcome::Correct => Line::from(Span::styled(
            "✓ You answered correctly!",
            Style::default().fg(CORRECT).add_modifier(Modifier::BOLD),
        )),
        Outcome::Incorrect => {
            let correct = state
                .question
                .as_ref()
                .map(|q| display_text(&q.question.correct_answer).into_owned())
                .unwrap_or_default();
            Line::from(Span::styled(
                format!("✗ You answered wrong! The correct one was {}", correct),
                Style::default().fg(INCORRECT).add_modifier(Modifier::BOLD),
            ))
        }
    };
    Some(line)
}
