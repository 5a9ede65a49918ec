//! Owner of the quiz state and driver of its side effects.

use rand::Rng;

use super::intent::{QuizError, QuizIntent};
use super::reducer::QuizReducer;
use super::state::{Outcome, QuizState, Status};
use crate::trivia::{activate, FetchError, InsertionMode, Question};
use crate::ui::mvi::Reducer;

/// Permission to run one fetch, tagged with the session generation it was
/// issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
}

/// Quiz session: the single owner of [`QuizState`].
///
/// Entering `Idle` raises a pending-fetch flag. The UI loop drains it with
/// [`take_fetch`](Self::take_fetch), which moves the state to `Fetching`
/// before handing out a ticket, so at most one request is ever in flight.
/// Results are applied through [`complete_fetch`](Self::complete_fetch) and
/// dropped when their generation is stale.
pub struct QuizSession {
    state: QuizState,
    generation: u64,
    pending_fetch: bool,
    insertion: InsertionMode,
}

impl QuizSession {
    pub fn new(insertion: InsertionMode) -> Self {
        Self {
            state: QuizState::default(),
            generation: 0,
            // A new session starts idle, so the first fetch is due at once.
            pending_fetch: true,
            insertion,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.pending_fetch
    }

    /// Run one intent through the reducer.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        tracing::trace!(kind = intent.kind(), ?intent, "Dispatching quiz intent");
        let previous = self.state.status;
        self.state = QuizReducer::reduce(std::mem::take(&mut self.state), intent);
        if previous != Status::Idle && self.state.status == Status::Idle {
            self.pending_fetch = true;
        }
    }

    /// Decode and dispatch a serialized action.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<(), QuizError> {
        let intent = QuizIntent::from_json(raw)?;
        self.dispatch(intent);
        Ok(())
    }

    /// Start the scheduled fetch, if any.
    pub fn take_fetch(&mut self) -> Option<FetchTicket> {
        if !std::mem::take(&mut self.pending_fetch) {
            return None;
        }
        if self.state.status != Status::Idle {
            return None;
        }

        self.generation += 1;
        self.dispatch(QuizIntent::SetStatus(Status::Fetching));
        self.dispatch(QuizIntent::SetUserAnswer(None));
        tracing::debug!(generation = self.generation, "Question fetch scheduled");
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Apply a fetch result. Returns `false` when the result was stale and
    /// ignored.
    pub fn complete_fetch<R: Rng + ?Sized>(
        &mut self,
        generation: u64,
        result: Result<Question, FetchError>,
        rng: &mut R,
    ) -> bool {
        if generation != self.generation || self.state.status != Status::Fetching {
            tracing::debug!(
                generation,
                current = self.generation,
                status = self.state.status.label(),
                "Dropping stale fetch result"
            );
            return false;
        }

        match result {
            Ok(question) => {
                let active = activate(question, self.insertion, rng);
                tracing::info!(
                    category = %active.question.category,
                    difficulty = active.question.difficulty.label(),
                    options = active.options.len(),
                    "Question ready"
                );
                self.dispatch(QuizIntent::SetQuestion(active));
                self.dispatch(QuizIntent::SetStatus(Status::Ready));
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Question fetch failed");
                self.dispatch(QuizIntent::SetStatus(Status::Error));
            }
        }
        true
    }

    /// Submit the user's choice. Only valid while a question is shown.
    pub fn submit_answer(&mut self, answer: &str) -> Option<Outcome> {
        if self.state.status != Status::Ready {
            return None;
        }
        let question = self.state.question.as_ref()?;
        let outcome = if question.question.is_correct(answer) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        self.dispatch(QuizIntent::SetUserAnswer(Some(answer.to_string())));
        self.dispatch(QuizIntent::SetStatus(Status::Answered));
        self.dispatch(QuizIntent::SetScore(outcome));
        tracing::info!(?outcome, rounds = self.state.score.rounds(), "Answer recorded");
        Some(outcome)
    }

    /// Leave the result view and schedule the next question.
    pub fn next_question(&mut self) -> bool {
        if self.state.status != Status::Answered {
            return false;
        }
        self.dispatch(QuizIntent::SetUserAnswer(None));
        self.dispatch(QuizIntent::SetStatus(Status::Idle));
        true
    }

    /// Start over with a fresh state. Any in-flight result becomes stale.
    pub fn reload(&mut self) {
        tracing::info!("Reloading quiz session");
        self.generation += 1;
        self.state = QuizState::default();
        self.pending_fetch = true;
    }
}
