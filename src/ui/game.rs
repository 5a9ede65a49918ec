//! Question and answer-selection view.

use crate::trivia::QuestionKind;
use crate::ui::quiz::{QuizState, Status};
use crate::ui::text::display_text;
use crate::ui::theme::{CORRECT, INCORRECT, SELECTION, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Lines for the current question, or nothing when none is loaded.
///
/// While `Ready` the highlighted option follows `selection`. Once
/// `Answered` the correct option is marked, and the user's pick too when
/// it was wrong.
pub fn game_lines(state: &QuizState, selection: usize) -> Vec<Line<'static>> {
    let Some(active) = state.question.as_ref() else {
        return Vec::new();
    };
    let question = &active.question;

    let kind = match question.kind {
        QuestionKind::Multiple => "Multiple choice",
        QuestionKind::Boolean => "True / False",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            display_text(&question.question).into_owned(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", kind, question.difficulty.label()),
            Style::default().fg(SEPARATOR),
        )),
        Line::from(""),
    ];

    let answered = state.status == Status::Answered;
    for (idx, option) in active.options.iter().enumerate() {
        let text = format!("{:>2}. {}", idx + 1, display_text(option));
        let is_correct = question.is_correct(option);
        let is_pick = state.user_answer.as_deref() == Some(option.as_str());

        let line = if answered {
            if is_correct {
                Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(CORRECT)),
                    Span::styled(text, Style::default().fg(CORRECT)),
                ])
            } else if is_pick {
                Line::from(vec![
                    Span::styled("✗ ", Style::default().fg(INCORRECT)),
                    Span::styled(text, Style::default().fg(INCORRECT)),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(text, Style::default().fg(TEXT).add_modifier(Modifier::DIM)),
                ])
            }
        } else if idx == selection {
            Line::from(vec![
                Span::styled("› ", Style::default().fg(TEXT)),
                Span::styled(text, Style::default().fg(TEXT)),
            ])
            .style(Style::default().bg(SELECTION))
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(text, Style::default().fg(TEXT)),
            ])
        };
        lines.push(line);
    }

    lines
}
