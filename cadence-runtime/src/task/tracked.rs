use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Mutex as AsyncMutex;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use super::exec::TaskExecution;

/// How firings of one task may interleave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyMode {
    /// Runs of one task never overlap; a firing that arrives while the
    /// previous run is still going queues on the run gate. Under sustained
    /// overload that queue grows without bound.
    Serialized,
    /// Every firing runs independently; runs of one task may overlap.
    Overlapping,
}

/// One in-flight run: the signal that stops it early.
struct RunHandle {
    run: u64,
    cancel: CancellationToken,
}

/// Execution wrapper whose spawned runs can be interrupted on cancellation.
///
/// Each firing spawns its own tokio task. The run registers itself in the
/// active list right before the workload starts and deregisters right after,
/// so cancellation sees exactly the runs that are genuinely executing.
pub(crate) struct TrackedTask {
    exec: TaskExecution,
    run_gate: Option<Arc<AsyncMutex<()>>>,
    active: Mutex<Vec<RunHandle>>,
    next_run: AtomicU64,
}

impl TrackedTask {
    pub(crate) fn new(exec: TaskExecution, mode: ConcurrencyMode) -> Self {
        let run_gate = match mode {
            ConcurrencyMode::Serialized => Some(Arc::new(AsyncMutex::new(()))),
            ConcurrencyMode::Overlapping => None,
        };
        Self {
            exec,
            run_gate,
            active: Mutex::new(Vec::new()),
            next_run: AtomicU64::new(1),
        }
    }

    /// Spawn one firing. Serialized tasks first queue on the run gate, so at
    /// most one run per task is ever tracked at a time.
    pub(crate) fn fire(self: Arc<Self>) {
        tokio::spawn(async move {
            let _permit = match &self.run_gate {
                Some(gate) => Some(Arc::clone(gate).lock_owned().await),
                None => None,
            };
            let (run, cancel) = self.begin_run();
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {}
                _ = self.exec.execute() => {}
            }
            self.end_run(run);
        });
    }

    /// Interrupt in-flight runs, one tracked run at a time, until none remain.
    /// Raising a token is infallible, so unlike a thread interrupt this can
    /// never abort the drain half way.
    pub(crate) fn cancel(&self) {
        loop {
            let handle = self.lock_active().pop();
            let Some(handle) = handle else { break };
            trace!(
                task = %self.exec.name(),
                run = handle.run,
                "interrupting in-flight run"
            );
            handle.cancel.cancel();
        }
    }

    fn begin_run(&self) -> (u64, CancellationToken) {
        let run = self.next_run.fetch_add(1, Ordering::Relaxed);
        let cancel = CancellationToken::new();
        self.lock_active().push(RunHandle {
            run,
            cancel: cancel.clone(),
        });
        (run, cancel)
    }

    fn end_run(&self, run: u64) {
        self.lock_active().retain(|handle| handle.run != run);
    }

    fn lock_active(&self) -> MutexGuard<'_, Vec<RunHandle>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
