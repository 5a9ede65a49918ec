use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

/// Leaves raw mode and the alternate screen. Best effort: errors are
/// ignored since this also runs from the panic hook.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Restores the terminal exactly once: on drop or on panic, whichever
/// happens first.
pub struct TerminalGuard {
    armed: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let armed = Arc::new(Mutex::new(true));

        let hook_armed = Arc::clone(&armed);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if std::mem::take(&mut *hook_armed.lock()) {
                restore_terminal();
            }
            default_hook(info);
        }));

        Self { armed }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if std::mem::take(&mut *self.armed.lock()) {
            restore_terminal();
        }
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    // Arm before touching the screen so a failure below still restores it.
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    Ok((terminal, guard))
}
