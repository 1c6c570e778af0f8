use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::error::{JetframeError, JetframeResult};

/// Events posted to the frame loop from outside the render path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEvent {
    /// One score interval elapsed.
    ScoreTick,
}

/// Periodic producer of [`LoopEvent::ScoreTick`].
///
/// Ticks are queued on a channel and only take effect when the frame loop drains them at the
/// start of an iteration, so score changes never race with rendering.
pub struct ScoreTicker {
    events: Receiver<LoopEvent>,
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl ScoreTicker {
    /// Start a background thread that posts a tick every `interval`.
    pub fn spawn(interval: Duration) -> JetframeResult<Self> {
        if interval.is_zero() {
            return Err(JetframeError::validation("score tick interval must be > 0"));
        }

        let (tx, rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let worker = std::thread::Builder::new()
            .name("score-ticker".to_string())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tx.send(LoopEvent::ScoreTick).is_err() {
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
            .context("spawn score ticker thread")?;

        Ok(Self {
            events: rx,
            stop_tx: Some(stop_tx),
            worker: Some(worker),
        })
    }

    /// A ticker without a thread; the caller posts events through the returned sender.
    pub fn manual() -> (Self, Sender<LoopEvent>) {
        let (tx, rx) = mpsc::channel();
        let ticker = Self {
            events: rx,
            stop_tx: None,
            worker: None,
        };
        (ticker, tx)
    }

    /// Receiving end drained by the frame loop.
    pub fn events(&self) -> &Receiver<LoopEvent> {
        &self.events
    }

    /// Stop the background thread, if any, and wait for it. Queued events stay readable.
    pub fn stop(&mut self) {
        self.stop_tx.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::warn!("score ticker thread panicked");
        }
    }
}

impl Drop for ScoreTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/ticker.rs"]
mod tests;
