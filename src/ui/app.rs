use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::QuizConfig;
use crate::trivia::{FetchError, Question};
use crate::ui::quiz::{Outcome, QuizSession, QuizState, Status};
use crate::ui::worker::{UiCommand, UiCommandSender};

pub struct App {
    should_quit: bool,
    session: QuizSession,
    /// Highlighted option while a question is shown.
    selection: usize,
    /// Animation tick for the loader spinner.
    spinner_tick: u8,
    /// User-facing message of the last fetch failure.
    last_error: Option<&'static str>,
    rng: StdRng,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &QuizConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build with a caller-provided RNG; used for reproducible option order.
    pub fn with_rng(config: &QuizConfig, rng: StdRng) -> Self {
        Self {
            should_quit: false,
            session: QuizSession::new(config.insertion),
            selection: 0,
            spinner_tick: 0,
            last_error: None,
            rng,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn state(&self) -> &QuizState {
        self.session.state()
    }

    pub fn status(&self) -> Status {
        self.session.status()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error
    }

    pub fn on_tick(&mut self) {
        if matches!(self.status(), Status::Idle | Status::Fetching) {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Hand a scheduled fetch to the worker. Returns `true` if one was
    /// started.
    pub fn pump_fetch(&mut self) -> bool {
        let Some(ticket) = self.session.take_fetch() else {
            return false;
        };
        let command = UiCommand::FetchQuestion {
            generation: ticket.generation,
        };

        let sent = match &self.command_sender {
            Some(sender) => match sender.try_send(command) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to queue question fetch");
                    false
                }
            },
            None => {
                tracing::warn!("No fetch worker attached");
                false
            }
        };

        if !sent {
            self.on_question_fetched(ticket.generation, Err(FetchError::WorkerUnavailable));
        }
        true
    }

    pub fn on_question_fetched(&mut self, generation: u64, result: Result<Question, FetchError>) {
        let message = result.as_ref().err().map(FetchError::user_message);
        if self.session.complete_fetch(generation, result, &mut self.rng) {
            self.selection = 0;
            self.last_error = message;
        }
    }

    /// Move the highlighted option, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state().options().len();
        if len == 0 || self.status() != Status::Ready {
            return;
        }
        let len = len as isize;
        self.selection = (self.selection as isize + delta).rem_euclid(len) as usize;
    }

    pub fn submit_selected(&mut self) -> Option<Outcome> {
        self.submit_index(self.selection)
    }

    /// Answer with the option at `index` (0-based).
    pub fn submit_index(&mut self, index: usize) -> Option<Outcome> {
        let answer = self.state().options().get(index).cloned()?;
        let outcome = self.session.submit_answer(&answer)?;
        self.selection = index;
        Some(outcome)
    }

    pub fn next_question(&mut self) -> bool {
        if self.session.next_question() {
            self.selection = 0;
            return true;
        }
        false
    }

    /// Start a fresh session after a failure.
    pub fn reload(&mut self) -> bool {
        if self.status() != Status::Error {
            return false;
        }
        self.session.reload();
        self.selection = 0;
        self.last_error = None;
        true
    }
}
