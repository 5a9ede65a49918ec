//! Background question fetching.
//!
//! The UI thread never awaits. It sends a [`UiCommand`] to a task on the
//! tokio runtime, which performs the request and reports back through the
//! UI event channel.

use std::sync::mpsc as std_mpsc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::trivia::TriviaClient;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    FetchQuestion { generation: u64 },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Only one fetch is ever outstanding; the slack covers a reload racing a
/// request that is still in flight.
const COMMAND_BUFFER: usize = 4;

/// Spawn the fetch worker on `runtime`.
///
/// The worker exits when every command sender is dropped or the event
/// receiver is gone.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    client: TriviaClient,
    events: std_mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::FetchQuestion { generation } => {
                    tracing::debug!(generation, url = %client.url(), "Fetching question");
                    let result = client.fetch_question().await;
                    if events
                        .send(AppEvent::QuestionFetched { generation, result })
                        .is_err()
                    {
                        tracing::trace!("Fetch result dropped (UI gone)");
                        break;
                    }
                }
            }
        }
    });

    tx
}
