use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::task::{TaskExecution, TrackedTask};

/// Spawn the firing loop for a task multiplexed on the shared time driver.
///
/// The first tick completes at the initial delay, subsequent ticks every
/// period. Firing is non-blocking (each run goes to its own spawned task),
/// so this loop never falls behind a slow workload.
pub(crate) fn spawn_driver(
    task: Arc<TrackedTask>,
    initial_delay: Duration,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(initial_delay).await;
        let mut ticks = tokio::time::interval(period);
        loop {
            ticks.tick().await;
            Arc::clone(&task).fire();
        }
    })
}

/// A driver loop owned by exactly one task.
///
/// Runs the workload inline between ticks: a slow run delays only this task.
/// Cancellation takes effect between runs, never in the middle of one, so a
/// run already in flight completes while pending firings are discarded.
pub(crate) struct DedicatedScheduler {
    shutdown: CancellationToken,
}

impl DedicatedScheduler {
    /// Construct and immediately schedule at (initial delay, period).
    pub(crate) fn new(exec: TaskExecution, initial_delay: Duration, period: Duration) -> Self {
        let shutdown = CancellationToken::new();
        let stop = shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = stop.cancelled() => return,
                _ = tokio::time::sleep(initial_delay) => {}
            }
            let mut ticks = tokio::time::interval(period);
            loop {
                // Cancellation wins over an overdue tick, so a cancel that
                // lands during a slow run stops the loop before it bursts.
                // The first tick completes immediately: the firing at the
                // initial delay.
                tokio::select! {
                    biased;
                    _ = stop.cancelled() => return,
                    _ = ticks.tick() => {}
                }
                exec.execute().await;
            }
        });
        Self { shutdown }
    }

    /// Discard pending firings. A run already in flight completes.
    pub(crate) fn cancel(&self) {
        self.shutdown.cancel();
    }
}
