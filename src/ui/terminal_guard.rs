use std::io::{self, Stdout};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Puts the terminal back the way the portfolio found it, exactly once:
/// from [`restore`](Self::restore), on drop, or from the panic hook.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn with_cleanup<F: FnOnce() + Send + 'static>(cleanup: F) -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        }
    }

    /// Chain onto the current panic hook so a crash mid-frame leaves a
    /// usable shell behind.
    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(cleanup) = cleanup.lock().take() {
                cleanup();
            }
            previous(info);
        }));
    }

    /// Run the cleanup if nobody has yet. Returns `true` when this call did.
    pub fn restore(&self) -> bool {
        // Take first so the lock is not held while the cleanup writes.
        let cleanup = self.cleanup.lock().take();
        match cleanup {
            Some(cleanup) => {
                cleanup();
                true
            }
            None => false,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Raw mode, alternate screen, mouse capture, hidden cursor.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        TermClear(ClearType::All),
        Hide
    )?;

    let guard = TerminalGuard::with_cleanup(|| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
    });
    guard.install_panic_hook();

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
