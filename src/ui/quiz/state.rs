//! State for a quiz session.

use serde::{Deserialize, Serialize};

use crate::trivia::ActiveQuestion;
use crate::ui::mvi::UiState;

/// Phase of the quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Waiting for a fetch to be scheduled.
    #[default]
    Idle,
    /// Question request in flight.
    Fetching,
    /// Question shown, waiting for an answer.
    Ready,
    /// Answer submitted, result shown.
    Answered,
    /// Fetch failed. Terminal until the session is reloaded.
    Error,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Fetching => "fetching",
            Status::Ready => "ready",
            Status::Answered => "answered",
            Status::Error => "error",
        }
    }
}

/// Result of one answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Running tally of answered questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub incorrect: u32,
}

impl Score {
    /// New score with `outcome` counted once.
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Score {
        match outcome {
            Outcome::Correct => Score {
                correct: self.correct.saturating_add(1),
                ..self
            },
            Outcome::Incorrect => Score {
                incorrect: self.incorrect.saturating_add(1),
                ..self
            },
        }
    }

    /// Number of completed rounds.
    pub fn rounds(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizState {
    pub status: Status,
    pub question: Option<ActiveQuestion>,
    pub user_answer: Option<String>,
    pub score: Score,
}

impl UiState for QuizState {}

impl QuizState {
    /// Outcome of the submitted answer. Only meaningful once answered.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.status != Status::Answered {
            return None;
        }
        let question = self.question.as_ref()?;
        let answer = self.user_answer.as_deref()?;
        Some(if question.question.is_correct(answer) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        })
    }

    /// Options of the current question, empty when none is loaded.
    pub fn options(&self) -> &[String] {
        self.question
            .as_ref()
            .map(|q| q.options.as_slice())
            .unwrap_or(&[])
    }
}
