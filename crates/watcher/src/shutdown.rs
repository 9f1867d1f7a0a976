//! Cooperative cancellation for the run loop
//!
//! The loop checks its [`Shutdown`] token once per poll cycle and while
//! sleeping. A command already running is never interrupted.

use tokio::sync::watch;

/// Create a linked trigger and token
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

/// Requests the watcher to stop
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        // Ignore: no token left means nothing to stop
        let _ = self.tx.send(true);
    }
}

/// Observes a [`ShutdownTrigger`]
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// A token that never fires
    pub fn never() -> Self {
        let (_, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the trigger fires
    ///
    /// Pends forever if the trigger was dropped without firing.
    pub async fn wait(&mut self) {
        while !*self.rx.borrow_and_update() {
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
