use crate::config::Config;
use crate::trivia::TriviaClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_fetch_worker;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the quiz until the user quits.
///
/// Blocks the calling thread; network requests run on `runtime`.
pub fn run(config: &Config, client: TriviaClient, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(&config.quiz);
    app.set_command_sender(spawn_fetch_worker(runtime, client, events.sender()));
    tracing::info!("Quiz UI started");

    loop {
        app.pump_fetch();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => terminal.autoresize()?,
            Ok(AppEvent::QuestionFetched { generation, result }) => {
                app.on_question_fetched(generation, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let score = app.state().score;
    tracing::info!(
        correct = score.correct,
        incorrect = score.incorrect,
        "Quiz UI stopped"
    );
    drop(guard);
    Ok(())
}
