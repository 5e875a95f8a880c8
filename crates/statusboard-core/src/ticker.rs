use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::clock::Clock;
use crate::event::Event;

/// Period of the board clock.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Owning handle for the one periodic timer of a session.
///
/// A background thread sends [`Event::Tick`] into the sink once per period.
/// [`stop`](ClockTicker::stop) and `Drop` signal the thread and join it, so
/// once either returns no further tick can be delivered. The thread also
/// exits on its own if the receiving end of the sink is dropped.
pub struct ClockTicker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl ClockTicker {
    pub fn spawn(period: Duration, clock: Arc<dyn Clock>, sink: Sender<Event>) -> Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("clock-ticker".into())
            .spawn(move || {
                let mut fired = 0u64;
                let mut deadline = Instant::now() + period;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            if sink.send(Event::Tick { now: clock.now() }).is_err() {
                                tracing::debug!("tick sink closed; ticker exiting");
                                break;
                            }
                            fired += 1;
                            deadline += period;
                            // Late wakeups skip missed ticks instead of bursting.
                            let now = Instant::now();
                            if deadline < now {
                                deadline = now + period;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                fired
            })
            .context("failed to spawn clock ticker thread")?;

        tracing::debug!(period_ms = period.as_millis() as u64, "clock ticker started");

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// `true` until the ticker thread has exited.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer and wait for its thread. Calling this more than once
    /// is a no-op.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // The thread may already be gone if the sink closed.
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(fired) => tracing::debug!(ticks = fired, "clock ticker stopped"),
                Err(_) => tracing::warn!("clock ticker thread panicked"),
            }
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
