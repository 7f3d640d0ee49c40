use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::typewriter::{Phase, Typewriter, TypewriterTiming};

/// Snapshot published after every firing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypewriterFrame {
    pub displayed: String,
    pub phase: Phase,
}

impl TypewriterFrame {
    fn of(typewriter: &Typewriter) -> Self {
        Self {
            displayed: typewriter.displayed().to_string(),
            phase: typewriter.phase(),
        }
    }
}

pub struct TypewriterTask;

impl TypewriterTask {
    /// Spawn the animation on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn(text: impl Into<String>, timing: TypewriterTiming) -> TypewriterHandle {
        let mut typewriter = Typewriter::new(text);
        let (tx, rx) = watch::channel(TypewriterFrame::of(&typewriter));

        let task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(typewriter.delay(&timing)).await;
                typewriter.advance();
                if tx.send(TypewriterFrame::of(&typewriter)).is_err() {
                    tracing::trace!("typewriter: all receivers gone, stopping");
                    break;
                }
            }
        });

        TypewriterHandle {
            task: Some(task),
            frames: rx,
        }
    }
}

/// Owner of a running typewriter animation.
///
/// The scheduled task is aborted by [`cancel`](Self::cancel) or on drop,
/// whichever comes first.
pub struct TypewriterHandle {
    task: Option<JoinHandle<()>>,
    frames: watch::Receiver<TypewriterFrame>,
}

impl TypewriterHandle {
    /// Latest published frame.
    pub fn frame(&self) -> TypewriterFrame {
        self.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TypewriterFrame> {
        self.frames.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the animation. Returns `true` only for the call that actually
    /// released the task.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
