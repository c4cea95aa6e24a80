//! Poller — repeating collection task with a start/stop lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use cardwatch_core::{Error, PollerConfig, Result};

use crate::collector::Collector;
use crate::source::CardSource;

/// Drives [`Collector::run_cycle`] on a repeating timer.
///
/// Cycles never overlap: the tick interval uses delayed catch-up, so
/// a cycle that outruns the timer pushes the next tick back instead
/// of stacking. Stopping signals the task and waits for it; an
/// in-flight cycle always completes.
pub struct Poller {
    config: PollerConfig,
    handle: Option<JoinHandle<()>>,
    shutdown_tx: Option<watch::Sender<bool>>,
}

impl Poller {
    pub fn new(config: PollerConfig) -> Self {
        Self {
            config,
            handle: None,
            shutdown_tx: None,
        }
    }

    /// Whether the poll task is currently running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Spawn the repeating poll task.
    ///
    /// Errors if a poll task is already running. With
    /// `config.max_cycles` set, the task stops itself after that many
    /// cycles; otherwise it runs until [`stop`](Self::stop).
    pub fn start(&mut self, source: Arc<dyn CardSource>, collector: Arc<Collector>) -> Result<()> {
        if self.is_running() {
            return Err(Error::AlreadyRunning);
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let config = self.config.clone();

        let handle = tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval(Duration::from_millis(config.poll_interval_ms.max(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            info!(interval_ms = config.poll_interval_ms, "poller started");
            let mut cycles: u64 = 0;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let cards = source.poll_cards();
                        collector.run_cycle(&cards);
                        cycles += 1;
                        if config.max_cycles.is_some_and(|max| cycles >= max) {
                            info!(cycles, "poller reached cycle limit");
                            break;
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        break;
                    }
                }
            }
            info!(cycles, "poller stopped");
        });

        self.handle = Some(handle);
        self.shutdown_tx = Some(shutdown_tx);
        Ok(())
    }

    /// Signal shutdown and wait for the poll task to finish.
    ///
    /// Errors if the poller was never started (or already stopped).
    /// A task that already stopped itself via `max_cycles` joins
    /// immediately.
    pub async fn stop(&mut self) -> Result<()> {
        let handle = self.handle.take().ok_or(Error::NotRunning)?;
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }
        handle.await.map_err(|e| Error::Join(e.to_string()))
    }
}
