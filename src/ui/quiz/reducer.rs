//! Reducer for the quiz session.

use crate::ui::mvi::Reducer;

use super::intent::QuizIntent;
use super::state::QuizState;

/// Reducer for quiz state transitions.
///
/// Pure: fetching, shuffling and scheduling happen in
/// [`QuizSession`](super::QuizSession) around the dispatch call.
pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::SetStatus(status) => QuizState { status, ..state },
            QuizIntent::SetQuestion(question) => QuizState {
                question: Some(question),
                ..state
            },
            QuizIntent::SetUserAnswer(user_answer) => QuizState {
                user_answer,
                ..state
            },
            QuizIntent::SetScore(outcome) => QuizState {
                score: state.score.record(outcome),
                ..state
            },
        }
    }
}
