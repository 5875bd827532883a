use std::sync::Arc;

use tokio::task::JoinHandle;

use super::base::{ScheduleRegistry, TaskId, TaskMap};
use crate::request::TaskRequest;
use crate::scheduler::spawn_driver;
use crate::task::{ConcurrencyMode, TaskExecution, TrackedTask};

/// Record stored per task: the firing loop plus the tracked runs it feeds.
struct TimerEntry {
    driver: JoinHandle<()>,
    task: Arc<TrackedTask>,
}

impl TimerEntry {
    fn cancel(&self) {
        // Stop future firings first, then interrupt whatever is in flight.
        self.driver.abort();
        self.task.cancel();
    }
}

/// Registry multiplexing every task onto the shared time driver.
///
/// Each firing runs as its own tracked task, so cancellation can interrupt
/// work that is genuinely running instead of only unscheduling future
/// firings.
pub struct SharedTimerRegistry {
    default_mode: ConcurrencyMode,
    tasks: TaskMap<TimerEntry>,
}

impl SharedTimerRegistry {
    /// `default_mode` applies to registrations that go through the
    /// [`ScheduleRegistry`] contract.
    pub fn new(default_mode: ConcurrencyMode) -> Self {
        Self {
            default_mode,
            tasks: TaskMap::new(),
        }
    }

    /// Register `request` under an explicit concurrency mode and start
    /// firing it at (initial delay, period).
    pub fn register_task_with(&self, mode: ConcurrencyMode, request: TaskRequest) -> TaskId {
        let initial_delay = request.initial_delay_or_period();
        let period = request.period;
        let exec = TaskExecution::new(request.name, request.level, request.workload);
        let task = Arc::new(TrackedTask::new(exec, mode));
        let driver = spawn_driver(Arc::clone(&task), initial_delay, period);
        self.tasks.insert_new(TimerEntry { driver, task })
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl ScheduleRegistry for SharedTimerRegistry {
    fn register_task(&self, request: TaskRequest) -> TaskId {
        self.register_task_with(self.default_mode, request)
    }

    fn remove(&self, id: TaskId) -> bool {
        match self.tasks.remove(id) {
            Some(entry) => {
                entry.cancel();
                true
            }
            None => false,
        }
    }

    fn clear(&self) {
        for entry in self.tasks.drain() {
            entry.cancel();
        }
    }
}

impl Default for SharedTimerRegistry {
    fn default() -> Self {
        Self::new(ConcurrencyMode::Overlapping)
    }
}
