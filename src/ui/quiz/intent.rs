//! Intents for the quiz session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Outcome, Status};
use crate::trivia::ActiveQuestion;
use crate::ui::mvi::Intent;

/// Action kinds in their serialized form.
pub const ACTION_KINDS: [&str; 4] = ["setStatus", "setQuestion", "setUserAnswer", "setScore"];

/// Intents that can be dispatched to the quiz reducer.
///
/// Serialized as `{"type": "<kind>", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum QuizIntent {
    /// Replace the status.
    SetStatus(Status),

    /// Replace the current question.
    SetQuestion(ActiveQuestion),

    /// Replace the user's answer; `None` clears it.
    SetUserAnswer(Option<String>),

    /// Count one answered question.
    SetScore(Outcome),
}

impl Intent for QuizIntent {}

/// Errors raised by invalid dispatches. These are programming errors, not
/// runtime conditions.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Unknown action kind '{kind}'")]
    UnknownAction { kind: String },

    #[error("Malformed action: {message}")]
    MalformedAction { message: String },

    #[error("Invalid payload for '{kind}': {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl QuizIntent {
    /// Kind tag as it appears in the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            QuizIntent::SetStatus(_) => ACTION_KINDS[0],
            QuizIntent::SetQuestion(_) => ACTION_KINDS[1],
            QuizIntent::SetUserAnswer(_) => ACTION_KINDS[2],
            QuizIntent::SetScore(_) => ACTION_KINDS[3],
        }
    }

    /// Decode a serialized action.
    ///
    /// Unknown kinds are rejected with [`QuizError::UnknownAction`]; they are
    /// never mapped to a no-op.
    pub fn from_json(raw: &str) -> Result<Self, QuizError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| QuizError::MalformedAction {
                message: e.to_string(),
            })?;

        let kind = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| QuizError::MalformedAction {
                message: "missing string field 'type'".to_string(),
            })?
            .to_string();

        if !ACTION_KINDS.contains(&kind.as_str()) {
            return Err(QuizError::UnknownAction { kind });
        }

        serde_json::from_value(value).map_err(|source| QuizError::InvalidPayload { kind, source })
    }
}
