use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use super::fetch::{Fetch, FetchError};
use crate::system::snapshot::Snapshot;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

pub type CycleOutcome = Result<Snapshot, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Polling,
    Stopped,
}

/// Drives fetch cycles: one immediately on [`start`](Scheduler::start), then
/// one per interval until [`stop`](Scheduler::stop) or drop.
///
/// Cycles run as independent tasks. A fetch that outlasts the interval does
/// not hold back the next one, so outcomes reach the sink in completion
/// order rather than start order.
pub struct Scheduler {
    interval: Duration,
    state: SchedulerState,
    wake: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: SchedulerState::Idle,
            wake: Arc::new(Notify::new()),
            task: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts polling. Returns `false` if the scheduler was already started.
    pub fn start<F, S>(&mut self, fetcher: F, sink: S) -> bool
    where
        F: Fetch + Send + Sync + 'static,
        S: Fn(CycleOutcome) + Send + Sync + 'static,
    {
        if self.state != SchedulerState::Idle {
            tracing::warn!(state = ?self.state, "scheduler can only be started once");
            return false;
        }

        let fetcher = Arc::new(fetcher);
        let sink = Arc::new(sink);
        let wake = Arc::clone(&self.wake);
        let interval = self.interval;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Dropping the set when this task is aborted cancels in-flight cycles.
            let mut cycles = JoinSet::new();
            let mut cycle: u64 = 0;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = wake.notified() => ticker.reset(),
                    Some(joined) = cycles.join_next(), if !cycles.is_empty() => {
                        if let Err(err) = joined
                            && err.is_panic()
                        {
                            tracing::error!("fetch cycle panicked: {err}");
                        }
                        continue;
                    }
                }

                cycle += 1;
                let fetcher = Arc::clone(&fetcher);
                let sink = Arc::clone(&sink);
                cycles.spawn(async move {
                    tracing::debug!(cycle, "fetch cycle started");
                    let outcome = fetcher.fetch().await;
                    tracing::debug!(cycle, ok = outcome.is_ok(), "fetch cycle finished");
                    sink(outcome);
                });
            }
        }));

        self.state = SchedulerState::Polling;
        tracing::info!(interval_ms = interval.as_millis() as u64, "polling started");
        true
    }

    /// Runs an extra cycle right away and restarts the interval from now.
    pub fn poll_now(&self) {
        if self.state == SchedulerState::Polling {
            self.wake.notify_one();
        }
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if self.state == SchedulerState::Polling {
            tracing::info!("polling stopped");
        }
        self.state = SchedulerState::Stopped;
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
