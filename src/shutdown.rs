use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared shutdown flag.
///
/// Set by the UI on quit or by SIGINT/SIGTERM, polled by the input thread
/// and awaited by background tasks.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    /// Raised by the OS signal handlers only. Kept apart from `shutdown` so
    /// the [`signal`](Self::signal) that follows still wakes waiters.
    os_signal: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            os_signal: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst) || self.os_signal.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Graceful shutdown initiated");
            self.notify.notify_waiters();
        }
    }

    /// Raise the OS flag on SIGINT and SIGTERM.
    ///
    /// Signal handlers can only touch an atomic, so waiters of
    /// [`wait`](Self::wait) are woken by the [`signal`](Self::signal) the UI
    /// issues once the input thread has seen the flag.
    pub fn register_os_signals(&self) -> io::Result<()> {
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.os_signal))?;
        }
        Ok(())
    }

    pub async fn wait(&self) {
        // Subscribe before checking the flag so a signal() between the check
        // and the await is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}
