//! Cancellation of in-flight checks
//!
//! A [`Canceller`] and its [`CancelSignal`]s share a `tokio::sync::watch`
//! flag. Artificial delays wait on the signal alongside the timer, so a
//! cancelled request stops waiting immediately and reports
//! [`RuntimeError::Interrupted`].

use crate::error::{Result, RuntimeError};
use std::time::Duration;
use tokio::sync::watch;

/// Create a connected canceller/signal pair
pub fn cancellation() -> (Canceller, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (Canceller { tx }, CancelSignal { rx })
}

/// Fires the cancellation of every signal it handed out
#[derive(Debug)]
pub struct Canceller {
    tx: watch::Sender<bool>,
}

impl Canceller {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            rx: self.tx.subscribe(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Observes cancellation of a single request
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// A signal that is never cancelled
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Suspend the current task for `duration` unless cancelled first
    pub async fn sleep(&self, duration: Duration) -> Result<()> {
        if self.is_cancelled() {
            return Err(RuntimeError::Interrupted);
        }

        let mut rx = self.rx.clone();
        let sleep = tokio::time::sleep(duration);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => return Ok(()),
                changed = rx.changed() => match changed {
                    Ok(()) if *rx.borrow() => return Err(RuntimeError::Interrupted),
                    Ok(()) => continue,
                    // Canceller gone: nothing can interrupt the wait any more
                    Err(_) => {
                        sleep.as_mut().await;
                        return Ok(());
                    }
                },
            }
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::never()
    }
}
