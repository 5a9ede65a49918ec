//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quizterm::config::{ApiConfig, QuizConfig};
use quizterm::trivia::{Difficulty, Question, QuestionKind};
use quizterm::ui::app::App;
use quizterm::ui::worker::UiCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

// -- Fixtures -----------------------------------------------------------------

pub fn paris_question() -> Question {
    Question {
        kind: QuestionKind::Multiple,
        difficulty: Difficulty::Easy,
        category: "Geography".to_string(),
        question: "What is the capital of France?".to_string(),
        correct_answer: "Paris".to_string(),
        incorrect_answers: vec!["Rome".into(), "Berlin".into(), "Madrid".into()],
    }
}

pub fn quoted_question() -> Question {
    Question {
        kind: QuestionKind::Boolean,
        difficulty: Difficulty::Medium,
        category: "Science: Computers".to_string(),
        question: "&quot;HTML&quot; stands for Hypertext Markup Language.".to_string(),
        correct_answer: "True".to_string(),
        incorrect_answers: vec!["False".into()],
    }
}

/// Serialized API envelope.
pub fn envelope_json(code: u8, questions: &[Question]) -> String {
    serde_json::json!({
        "response_code": code,
        "results": questions,
    })
    .to_string()
}

pub fn api_config(endpoint: &str) -> ApiConfig {
    ApiConfig {
        base_url: endpoint.to_string(),
        amount: 30,
        category: 18,
        timeout_seconds: 2,
    }
}

// -- App helpers --------------------------------------------------------------

/// App with a seeded RNG and a command receiver standing in for the worker.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::with_rng(&QuizConfig::default(), StdRng::seed_from_u64(42));
    let (tx, rx) = mpsc::channel(4);
    app.set_command_sender(tx);
    (app, rx)
}

/// Generation of the next queued fetch command.
pub fn next_fetch(rx: &mut mpsc::Receiver<UiCommand>) -> u64 {
    match rx.try_recv().expect("expected a queued fetch") {
        UiCommand::FetchQuestion { generation } => generation,
    }
}

/// App showing `question`, as if the worker had just delivered it.
pub fn ready_app(question: Question) -> (App, mpsc::Receiver<UiCommand>) {
    let (mut app, mut rx) = make_app();
    assert!(app.pump_fetch());
    let generation = next_fetch(&mut rx);
    app.on_question_fetched(generation, Ok(question));
    (app, rx)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
